//! The fixed attribute-name vocabulary recognized by the translators.
//!
//! Styles may carry names outside this list; translators simply ignore them.

pub const ALIGN: &str = "align";

pub const BORDER: &str = "border";
pub const BORDER_TOP: &str = "border-top";
pub const BORDER_RIGHT: &str = "border-right";
pub const BORDER_BOTTOM: &str = "border-bottom";
pub const BORDER_LEFT: &str = "border-left";
pub const BORDER_COLOR: &str = "border-color";
pub const BORDER_WIDTH: &str = "border-width";

pub const FILL: &str = "fill";
pub const FILL_COLOR: &str = "fill-color";

pub const FONT_FAMILY: &str = "font-family";
pub const FONT_STYLE: &str = "font-style";
pub const FONT_SIZE: &str = "font-size";
pub const TEXT_COLOR: &str = "text-color";

pub const LINE_WIDTH: &str = "line-width";
pub const LINE_COLOR: &str = "line-color";

pub const MULTILINE: &str = "multiline";
pub const CURSOR_PLACEMENT: &str = "cursor-placement";
pub const LINK: &str = "link";
