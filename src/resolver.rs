//! Selector cascade over layered stylesheets.

use vellum_style::{attr, Style, Stylesheet};
use vellum_types::Color;

/// The built-in rules every document starts from. User sheets layer on top
/// and win per attribute.
pub fn default_stylesheet() -> Stylesheet {
    let flowing = Style::new()
        .with(attr::CURSOR_PLACEMENT, "bottom-left")
        .with(attr::MULTILINE, true);

    Stylesheet::new()
        .with_rule(
            "body",
            Style::new()
                .with(attr::ALIGN, "left")
                .with(attr::FONT_FAMILY, "Arial")
                .with(attr::FONT_STYLE, "normal")
                .with(attr::FONT_SIZE, 11)
                .with(attr::TEXT_COLOR, Color::BLACK),
        )
        .with_rule(
            "cell",
            Style::new()
                .with(attr::BORDER, false)
                .with(attr::FILL, false)
                .with(attr::MULTILINE, false)
                .with(attr::CURSOR_PLACEMENT, "top-right"),
        )
        .with_rule("p", flowing.clone())
        .with_rule("h1", flowing.clone().with(attr::FONT_STYLE, "bold").with(attr::FONT_SIZE, 14))
        .with_rule("h2", flowing.with(attr::FONT_STYLE, "bold").with(attr::FONT_SIZE, 12))
        .with_rule(".align-right", Style::new().with(attr::ALIGN, "right"))
}

/// Resolves the effective style for a drawing operation: named selectors in
/// cascade order, inline style last.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    sheet: Stylesheet,
}

impl StyleResolver {
    /// A resolver seeded with the default rules.
    pub fn new() -> Self {
        StyleResolver { sheet: default_stylesheet() }
    }

    /// Layers another sheet on top; its rules win per attribute.
    pub fn add_stylesheet(&mut self, sheet: Stylesheet) {
        self.sheet.merge(sheet);
    }

    /// The cascaded rule for a single selector.
    pub fn style(&self, selector: &str) -> Style {
        self.sheet.get(selector)
    }

    pub fn resolve(&self, selectors: &[&str], inline: Option<&Style>) -> Style {
        self.sheet.resolve(selectors, inline)
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_seed_the_resolver() {
        let resolver = StyleResolver::new();
        let body = resolver.style("body");
        assert_eq!(body.get_str(attr::FONT_FAMILY), Some("Arial"));
        assert_eq!(body.number_or(attr::FONT_SIZE, 0.0), 11.0);

        let cell = resolver.style("cell");
        assert!(!cell.truthy(attr::BORDER));
        assert_eq!(cell.get_str(attr::CURSOR_PLACEMENT), Some("top-right"));

        let h1 = resolver.style("h1");
        assert!(h1.truthy(attr::MULTILINE));
        assert_eq!(h1.get_str(attr::CURSOR_PLACEMENT), Some("bottom-left"));
        assert_eq!(h1.number_or(attr::FONT_SIZE, 0.0), 14.0);
    }

    #[test]
    fn user_sheets_override_defaults_per_attribute() {
        let mut resolver = StyleResolver::new();
        resolver.add_stylesheet(
            Stylesheet::new().with_rule("body", Style::new().with(attr::FONT_SIZE, 9)),
        );

        let body = resolver.style("body");
        assert_eq!(body.number_or(attr::FONT_SIZE, 0.0), 9.0);
        // Untouched defaults survive the overlay.
        assert_eq!(body.get_str(attr::FONT_FAMILY), Some("Arial"));
    }

    #[test]
    fn element_cascade_ends_with_the_tag_rule() {
        let resolver = StyleResolver::new();
        let h2 = resolver.resolve(&["body", "cell", "h2"], None);
        assert_eq!(h2.number_or(attr::FONT_SIZE, 0.0), 12.0);
        assert_eq!(h2.get_str(attr::FONT_STYLE), Some("bold"));
        assert!(h2.truthy(attr::MULTILINE));
        assert_eq!(h2.get_str(attr::CURSOR_PLACEMENT), Some("bottom-left"));
    }

    #[test]
    fn inline_style_wins_over_every_rule() {
        let resolver = StyleResolver::new();
        let inline = Style::new().with(attr::FONT_SIZE, 30);
        let style = resolver.resolve(&["body", "cell", "h1"], Some(&inline));
        assert_eq!(style.number_or(attr::FONT_SIZE, 0.0), 30.0);
    }
}
