use super::DEFAULT_LINE_WIDTH;
use vellum_backend::PageBackend;
use vellum_style::{attr, Style};
use vellum_types::Color;

/// Stroke state for straight lines. Unlike borders this is unconditional:
/// lines are always drawn, so color and width are always pushed, falling
/// back to black and the default width.
pub fn apply<B: PageBackend>(backend: &mut B, style: &Style) {
    backend.set_draw_color(style.color_or(attr::LINE_COLOR, Color::BLACK));
    backend.set_line_width(style.number_or(attr::LINE_WIDTH, DEFAULT_LINE_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_backend::{Op, RecordingBackend};

    #[test]
    fn apply_is_unconditional() {
        let mut backend = RecordingBackend::new();
        apply(&mut backend, &Style::new());
        assert_eq!(
            backend.ops(),
            &[Op::SetDrawColor(Color::BLACK), Op::SetLineWidth(DEFAULT_LINE_WIDTH)]
        );
    }

    #[test]
    fn apply_honours_line_attributes() {
        let mut backend = RecordingBackend::new();
        let style = Style::new().with(attr::LINE_COLOR, "blue").with(attr::LINE_WIDTH, 1.5);
        apply(&mut backend, &style);
        assert_eq!(
            backend.ops(),
            &[Op::SetDrawColor(Color::new(0, 0, 255)), Op::SetLineWidth(1.5)]
        );
    }
}
