//! Named style rules and the cascade over them.

use crate::style::Style;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from selector name ("body", "cell", "p", ".align-right", ...)
/// to a [`Style`].
///
/// Lookup of an unknown selector yields an empty style, never an error.
/// Cascade order is controlled entirely by the selector list handed to
/// [`Stylesheet::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stylesheet {
    rules: HashMap<String, Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, selector: impl Into<String>, style: Style) -> Self {
        self.rules.insert(selector.into(), style);
        self
    }

    pub fn rule(&self, selector: &str) -> Option<&Style> {
        self.rules.get(selector)
    }

    /// The style for a selector; unknown selectors yield an empty style.
    pub fn get(&self, selector: &str) -> Style {
        self.rules.get(selector).cloned().unwrap_or_default()
    }

    /// Layers another sheet on top of this one, rule by rule. Rules present
    /// in both are merged with `other` winning per attribute.
    pub fn merge(&mut self, other: Stylesheet) {
        for (selector, style) in other.rules {
            match self.rules.get_mut(&selector) {
                Some(existing) => *existing = existing.merge(&style),
                None => {
                    self.rules.insert(selector, style);
                }
            }
        }
    }

    /// Cascaded lookup: fold the named selectors left to right, then overlay
    /// the inline style. Later sources win per attribute.
    pub fn resolve(&self, selectors: &[&str], inline: Option<&Style>) -> Style {
        let mut resolved = Style::new();
        for selector in selectors {
            if let Some(rule) = self.rules.get(*selector) {
                resolved = resolved.merge(rule);
            }
        }
        if let Some(inline) = inline {
            resolved = resolved.merge(inline);
        }
        resolved
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(String, Style)> for Stylesheet {
    fn from_iter<T: IntoIterator<Item = (String, Style)>>(iter: T) -> Self {
        Stylesheet { rules: iter.into_iter().collect() }
    }
}
