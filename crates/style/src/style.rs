//! The immutable named-attribute bag at the bottom of the cascade.

use crate::value::StyleValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vellum_types::Color;

/// An ordered set of (attribute-name, value) pairs.
///
/// Attribute names are not validated: unknown names are stored and simply
/// ignored by translators that do not recognize them. A `Style` is never
/// mutated after construction; [`Style::merge`] produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    values: BTreeMap<String, StyleValue>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<&StyleValue> {
        self.values.get(name)
    }

    /// Truthiness of an attribute; absent attributes are false.
    pub fn truthy(&self, name: &str) -> bool {
        self.value(name).is_some_and(StyleValue::is_truthy)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(StyleValue::as_str)
    }

    pub fn str_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get_str(name).unwrap_or(default)
    }

    pub fn number_or(&self, name: &str, default: f32) -> f32 {
        self.value(name).and_then(StyleValue::as_number).unwrap_or(default)
    }

    pub fn get_color(&self, name: &str) -> Option<Color> {
        self.value(name).and_then(StyleValue::as_color)
    }

    pub fn color_or(&self, name: &str, default: Color) -> Color {
        self.get_color(name).unwrap_or(default)
    }

    /// Per-attribute overlay: `other`'s attributes win, everything else is
    /// carried over from `self`.
    pub fn merge(&self, other: &Style) -> Style {
        let mut values = self.values.clone();
        for (name, value) in &other.values {
            values.insert(name.clone(), value.clone());
        }
        Style { values }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, StyleValue)> for Style {
    fn from_iter<T: IntoIterator<Item = (String, StyleValue)>>(iter: T) -> Self {
        Style { values: iter.into_iter().collect() }
    }
}
