pub mod attr;
pub mod dimension;
pub mod parsers;
pub mod style;
pub mod stylesheet;
pub mod value;

pub use dimension::Dimension;
pub use parsers::StyleParseError;
pub use style::Style;
pub use stylesheet::Stylesheet;
pub use value::StyleValue;
