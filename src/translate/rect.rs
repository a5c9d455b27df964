use super::DEFAULT_LINE_WIDTH;
use vellum_backend::PageBackend;
use vellum_style::{attr, Style};
use vellum_types::Color;

/// Rectangle style code: `"D"` (outline), `"F"` (filled), or `"DF"` (both).
/// An outline is requested by border-color or border-width, a fill by
/// fill-color. A style that asks for neither still draws an outline.
pub fn translate(style: &Style) -> String {
    let mut code = String::new();
    if style.has_value(attr::BORDER_COLOR) || style.has_value(attr::BORDER_WIDTH) {
        code.push('D');
    }
    if style.has_value(attr::FILL_COLOR) {
        code.push('F');
    }
    if code.is_empty() {
        code.push('D');
    }
    code
}

/// Pushes stroke state for outlined rectangles and fill color for filled
/// ones, each only when the translated code requests that component.
pub fn apply<B: PageBackend>(backend: &mut B, style: &Style) -> String {
    let code = translate(style);
    if code.contains('D') {
        backend.set_draw_color(style.color_or(attr::BORDER_COLOR, Color::BLACK));
        backend.set_line_width(style.number_or(attr::BORDER_WIDTH, DEFAULT_LINE_WIDTH));
    }
    if code.contains('F') {
        backend.set_fill_color(style.color_or(attr::FILL_COLOR, Color::BLACK));
    }
    code
}
