//! Attribute translators: from style attributes to the literal parameter
//! values and state mutations the drawing backend expects.
//!
//! Each module pairs a pure `translate` function with an optional
//! side-effecting `apply` that pushes color/width/font state into the
//! backend ahead of a draw call. Lookup data (edge order, style markers,
//! orientation codes) is owned by the module that uses it.

pub mod align;
pub mod border;
pub mod cursor;
pub mod fill;
pub mod font;
pub mod line;
pub mod multiline;
pub mod orientation;
pub mod page_size;
pub mod rect;

/// The backend's default stroke width, used wherever a width attribute is
/// absent.
pub const DEFAULT_LINE_WIDTH: f32 = 0.2;
