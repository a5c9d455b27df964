use super::DEFAULT_LINE_WIDTH;
use vellum_backend::PageBackend;
use vellum_style::{attr, Style};
use vellum_types::Color;

/// Translated border parameter: none, all four edges, or an explicit edge
/// combination.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderCode {
    None,
    All,
    Edges(String),
}

impl BorderCode {
    /// The literal backend value: `"0"`, `"1"`, or the edge letters.
    pub fn code(&self) -> &str {
        match self {
            BorderCode::None => "0",
            BorderCode::All => "1",
            BorderCode::Edges(edges) => edges,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            BorderCode::None => false,
            BorderCode::All => true,
            BorderCode::Edges(edges) => !edges.is_empty(),
        }
    }
}

/// Edge test order is fixed: bottom, left, right, top.
const EDGES: [(&str, char); 4] = [
    (attr::BORDER_BOTTOM, 'B'),
    (attr::BORDER_LEFT, 'L'),
    (attr::BORDER_RIGHT, 'R'),
    (attr::BORDER_TOP, 'T'),
];

/// Two addressing modes: the presence of any per-edge attribute selects
/// per-edge mode outright, even when every present edge is false; only a
/// style without per-edge attributes falls back to the single `border` flag.
pub fn translate(style: &Style) -> BorderCode {
    if EDGES.iter().any(|(name, _)| style.has_value(name)) {
        let edges = EDGES
            .iter()
            .filter(|(name, _)| style.truthy(name))
            .map(|(_, letter)| *letter)
            .collect();
        return BorderCode::Edges(edges);
    }

    if style.truthy(attr::BORDER) { BorderCode::All } else { BorderCode::None }
}

/// Pushes stroke state for a bordered cell; a borderless style leaves the
/// backend untouched.
pub fn apply<B: PageBackend>(backend: &mut B, style: &Style) {
    if translate(style).is_visible() {
        backend.set_line_width(style.number_or(attr::BORDER_WIDTH, DEFAULT_LINE_WIDTH));
        backend.set_draw_color(style.color_or(attr::BORDER_COLOR, Color::BLACK));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_backend::{Op, RecordingBackend};

    #[test]
    fn single_flag_selects_all_or_none() {
        assert_eq!(translate(&Style::new()), BorderCode::None);
        assert_eq!(translate(&Style::new().with(attr::BORDER, false)), BorderCode::None);
        assert_eq!(translate(&Style::new().with(attr::BORDER, true)), BorderCode::All);
        assert_eq!(translate(&Style::new().with(attr::BORDER, true)).code(), "1");
    }

    #[test]
    fn edges_follow_the_fixed_order() {
        let style = Style::new().with(attr::BORDER_BOTTOM, true);
        assert_eq!(translate(&style).code(), "B");

        let style = Style::new().with(attr::BORDER_TOP, true).with(attr::BORDER_LEFT, true);
        assert_eq!(translate(&style).code(), "LT");

        let style = Style::new()
            .with(attr::BORDER_TOP, true)
            .with(attr::BORDER_RIGHT, true)
            .with(attr::BORDER_LEFT, true)
            .with(attr::BORDER_BOTTOM, true);
        assert_eq!(translate(&style).code(), "BLRT");
    }

    #[test]
    fn false_edges_are_skipped_but_keep_per_edge_mode() {
        let style = Style::new()
            .with(attr::BORDER_BOTTOM, false)
            .with(attr::BORDER_LEFT, true)
            .with(attr::BORDER_TOP, true);
        assert_eq!(translate(&style).code(), "LT");
    }

    // Regression: any per-edge attribute bypasses the `border` flag
    // entirely, even when every present edge is false.
    #[test]
    fn per_edge_mode_wins_over_the_border_flag() {
        let style = Style::new().with(attr::BORDER, true).with(attr::BORDER_TOP, false);
        let code = translate(&style);
        assert_eq!(code, BorderCode::Edges(String::new()));
        assert!(!code.is_visible());
    }

    #[test]
    fn apply_sets_stroke_state_only_when_visible() {
        let mut backend = RecordingBackend::new();
        apply(&mut backend, &Style::new().with(attr::BORDER, false));
        assert!(backend.ops().is_empty());

        apply(&mut backend, &Style::new().with(attr::BORDER, true));
        assert_eq!(
            backend.ops(),
            &[Op::SetLineWidth(DEFAULT_LINE_WIDTH), Op::SetDrawColor(Color::BLACK)]
        );
    }

    #[test]
    fn apply_honours_width_and_color_attributes() {
        let mut backend = RecordingBackend::new();
        let style = Style::new()
            .with(attr::BORDER, true)
            .with(attr::BORDER_WIDTH, 0.5)
            .with(attr::BORDER_COLOR, "red");
        apply(&mut backend, &style);
        assert_eq!(
            backend.ops(),
            &[Op::SetLineWidth(0.5), Op::SetDrawColor(Color::new(255, 0, 0))]
        );
    }
}
