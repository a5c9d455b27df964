use vellum_style::{attr, Style};

/// Whether a cell wraps its text over multiple lines.
pub fn translate(style: &Style) -> bool {
    style.truthy(attr::MULTILINE)
}
