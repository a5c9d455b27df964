//! Geometry values: absolute lengths, percentages, and "auto".

use crate::parsers::{self, StyleParseError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A geometry parameter: an absolute length in page units, a percentage of
/// some enclosing span, or `Auto` (resolved by the caller, e.g. "current
/// cursor" or "fill to the far margin").
///
/// This is the tagged form of the "number or `NN%` string" overload: strings
/// are parsed once at the API boundary, and anything non-conforming is
/// rejected outright rather than truncated to a number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    Pt(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// Scales the value against the span it is relative to. `Auto` has no
    /// intrinsic value; the caller supplies its meaning.
    pub fn resolve_against(&self, span: f32) -> Option<f32> {
        match self {
            Dimension::Pt(v) => Some(*v),
            Dimension::Percent(p) => Some(span * p / 100.0),
            Dimension::Auto => None,
        }
    }
}

impl From<f32> for Dimension {
    fn from(v: f32) -> Self {
        Dimension::Pt(v)
    }
}

impl From<i32> for Dimension {
    fn from(v: i32) -> Self {
        Dimension::Pt(v as f32)
    }
}

impl FromStr for Dimension {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::run_parser(parsers::parse_dimension, s)
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Dimension::Pt(v) => serializer.serialize_f32(*v),
            Dimension::Percent(p) => serializer.serialize_str(&format!("{}%", p)),
            Dimension::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DimensionDef {
            Num(f32),
            Str(String),
        }

        match DimensionDef::deserialize(deserializer)? {
            DimensionDef::Num(v) => Ok(Dimension::Pt(v)),
            DimensionDef::Str(s) => s.parse().map_err(de::Error::custom),
        }
    }
}
