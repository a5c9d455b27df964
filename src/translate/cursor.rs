use crate::error::DocumentError;
use vellum_style::{attr, Style};

/// Cursor lands to the right of the cell, at its top edge.
pub const LN_TOP_RIGHT: u8 = 0;
/// Cursor moves to the left margin on the following line.
pub const LN_NEWLINE: u8 = 1;
/// Cursor lands below the cell, at its left edge.
pub const LN_BOTTOM_LEFT: u8 = 2;

/// Maps a cursor-placement name to the backend's numeric code. The default
/// differs per call site (single-line cells land top-right, wrapped cells
/// bottom-left), so the caller supplies it. Unknown names are an error, not
/// a silent fallback.
pub fn translate(style: &Style, default: u8) -> Result<u8, DocumentError> {
    match style.get_str(attr::CURSOR_PLACEMENT) {
        None => Ok(default),
        Some("top-right") => Ok(LN_TOP_RIGHT),
        Some("newline") => Ok(LN_NEWLINE),
        Some("bottom-left") => Ok(LN_BOTTOM_LEFT),
        Some(other) => Err(DocumentError::UnsupportedFeature(format!(
            "cursor placement '{other}'"
        ))),
    }
}
