use vellum_backend::PageBackend;
use vellum_style::{attr, Style};
use vellum_types::Color;

/// Marker test order is fixed: bold, italic, underline.
const STYLE_MARKERS: [(&str, char); 3] = [("bold", 'B'), ("italic", 'I'), ("underline", 'U')];

/// A font-style string containing any combination of bold/italic/underline
/// markers becomes the concatenation of their codes in fixed order
/// ("bold underline" -> "BU", never "UB").
pub fn translate(font_style: &str) -> String {
    let lowered = font_style.to_lowercase();
    STYLE_MARKERS
        .iter()
        .filter(|(marker, _)| lowered.contains(marker))
        .map(|(_, code)| *code)
        .collect()
}

/// Pushes text color and font selection. Defaults: black text, empty family
/// (inherit the backend's current family), size 0 (leave unchanged).
pub fn apply<B: PageBackend>(backend: &mut B, style: &Style) {
    backend.set_text_color(style.color_or(attr::TEXT_COLOR, Color::BLACK));
    backend.set_font(
        style.str_or(attr::FONT_FAMILY, ""),
        &translate(style.str_or(attr::FONT_STYLE, "")),
        style.number_or(attr::FONT_SIZE, 0.0),
    );
}
