use vellum_backend::PageBackend;
use vellum_style::{attr, Style};
use vellum_types::Color;

/// A cell is filled when the `fill` flag is truthy or a fill color is set.
pub fn translate(style: &Style) -> bool {
    style.truthy(attr::FILL) || style.truthy(attr::FILL_COLOR)
}

/// Pushes the fill color (default black) only for filled cells.
pub fn apply<B: PageBackend>(backend: &mut B, style: &Style) {
    if translate(style) {
        backend.set_fill_color(style.color_or(attr::FILL_COLOR, Color::BLACK));
    }
}
