//! The scalar value space for style attributes.

use serde::{Deserialize, Serialize};
use vellum_types::Color;

/// One attribute value. Absence of an attribute is modelled by absence from
/// the [`Style`](crate::Style) bag, never by a sentinel inside this space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f32),
    Color(Color),
    Text(String),
}

impl StyleValue {
    /// Loose truthiness, which the boolean-ish attributes (`border`,
    /// `fill`, `multiline`, the per-edge borders) rely on. Text follows the
    /// same keyword set the inline-declaration parser recognizes: empty,
    /// `"0"`, `"false"`, and `"off"` are false, any other text is true. Any
    /// color counts as set.
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Bool(b) => *b,
            StyleValue::Number(n) => *n != 0.0,
            StyleValue::Text(s) => {
                !matches!(s.to_lowercase().as_str(), "" | "0" | "false" | "off")
            }
            StyleValue::Color(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Color access with coercion: explicit colors pass through, text is
    /// parsed as a name or hex literal, numbers are greyscale.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            StyleValue::Text(s) => Color::parse(s).ok(),
            StyleValue::Number(n) => Some(Color::gray(n.clamp(0.0, 255.0) as u8)),
            StyleValue::Bool(_) => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Number(v)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        StyleValue::Number(v as f32)
    }
}

impl From<Color> for StyleValue {
    fn from(v: Color) -> Self {
        StyleValue::Color(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_the_attribute_conventions() {
        assert!(StyleValue::Bool(true).is_truthy());
        assert!(!StyleValue::Bool(false).is_truthy());
        assert!(StyleValue::Number(1.0).is_truthy());
        assert!(!StyleValue::Number(0.0).is_truthy());
        assert!(StyleValue::from("left").is_truthy());
        assert!(!StyleValue::from("").is_truthy());
        assert!(!StyleValue::from("0").is_truthy());
        assert!(StyleValue::Color(Color::BLACK).is_truthy());
    }

    // Text keywords must agree with what the inline parser produces for the
    // same words: "multiline: off" disables the feature whether the value
    // arrives as a parsed Bool or as raw text.
    #[test]
    fn text_keywords_match_the_inline_parser() {
        assert!(!StyleValue::from("off").is_truthy());
        assert!(!StyleValue::from("false").is_truthy());
        assert!(!StyleValue::from("OFF").is_truthy());
        assert!(StyleValue::from("on").is_truthy());
        assert!(StyleValue::from("true").is_truthy());
    }

    #[test]
    fn color_coercion() {
        assert_eq!(StyleValue::from("red").as_color(), Some(Color::new(255, 0, 0)));
        assert_eq!(StyleValue::from("#00ff00").as_color(), Some(Color::new(0, 255, 0)));
        assert_eq!(StyleValue::Number(30.0).as_color(), Some(Color::gray(30)));
        assert_eq!(StyleValue::from("not a color").as_color(), None);
    }

    #[test]
    fn deserializes_untagged_forms() {
        assert_eq!(serde_json::from_str::<StyleValue>("true").unwrap(), StyleValue::Bool(true));
        assert_eq!(serde_json::from_str::<StyleValue>("11").unwrap(), StyleValue::Number(11.0));
        assert_eq!(
            serde_json::from_str::<StyleValue>("[0, 0, 0]").unwrap(),
            StyleValue::Color(Color::BLACK)
        );
        assert_eq!(
            serde_json::from_str::<StyleValue>("\"left\"").unwrap(),
            StyleValue::Text("left".to_string())
        );
    }
}
