//! Low-level nom parser functions for CSS-like style values.
//!
//! Composable parsers for lengths, dimensions, colors, and inline
//! `"name: value; ..."` style declarations.

use crate::dimension::Dimension;
use crate::style::Style;
use crate::value::StyleValue;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{map, map_res, opt, recognize};
use nom::sequence::{pair, preceded};
use nom::{IResult, Parser};
use thiserror::Error;
use vellum_types::Color;

/// Errors that can occur during style value parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    opt((char('.'), take_while_m_n(1, 10, |c: char| c.is_ascii_digit()))),
                )),
                recognize((char('.'), take_while_m_n(1, 10, |c: char| c.is_ascii_digit()))),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Dimension Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("pt"), |_| 1.0),
        map(tag_no_case("px"), |_| 1.0), // Treat px as pt
        map(tag_no_case("in"), |_| 72.0),
        map(tag_no_case("cm"), |_| 28.35),
        map(tag_no_case("mm"), |_| 2.835),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, value * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a dimension value (length, percentage, or "auto").
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        map(tag("auto"), |_| Dimension::Auto),
        map(pair(parse_f32, char('%')), |(val, _)| Dimension::Percent(val)),
        map(parse_length, Dimension::Pt),
    ))
    .parse(input)
}

// --- Color Parsers ---

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), from_hex).parse(input)
}

fn hex_color_6(input: &str) -> IResult<&str, Color> {
    map((hex_primary, hex_primary, hex_primary), |(r, g, b)| Color { r, g, b }).parse(input)
}

fn hex_color_3(input: &str) -> IResult<&str, Color> {
    map(
        (
            take_while_m_n(1, 1, is_hex_digit),
            take_while_m_n(1, 1, is_hex_digit),
            take_while_m_n(1, 1, is_hex_digit),
        ),
        |(r_s, g_s, b_s): (&str, &str, &str)| Color {
            r: from_hex(&r_s.repeat(2)).unwrap(),
            g: from_hex(&g_s.repeat(2)).unwrap(),
            b: from_hex(&b_s.repeat(2)).unwrap(),
        },
    )
    .parse(input)
}

/// Parses a hex color (e.g., "#FF0000" or "#F00").
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    preceded(char('#'), alt((hex_color_6, hex_color_3))).parse(input)
}

/// Helper to run a nom parser over a complete input and convert its result
/// to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, P>(parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    let mut parser = parser;
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- Inline Style Declarations ---

/// Parses a single declaration value into the most specific [`StyleValue`]:
/// boolean keywords, numbers, hex colors, then free text.
pub fn parse_style_value(input: &str) -> StyleValue {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "true" | "on" => return StyleValue::Bool(true),
        "false" | "off" => return StyleValue::Bool(false),
        _ => {}
    }
    if let Ok(number) = input.parse::<f32>() {
        return StyleValue::Number(number);
    }
    if let Ok(color) = run_parser(parse_color, input) {
        return StyleValue::Color(color);
    }
    StyleValue::Text(input.to_string())
}

/// Parses an inline `"name: value; ..."` attribute into a [`Style`].
pub fn parse_inline_style(css: &str) -> Result<Style, StyleParseError> {
    let mut style = Style::new();
    for declaration in css.split(';') {
        if declaration.trim().is_empty() {
            continue;
        }
        let Some((name, value)) = declaration.split_once(':') else {
            return Err(StyleParseError::Parse(format!(
                "Expected 'name: value' declaration, got '{}'",
                declaration.trim()
            )));
        };
        style = style.with(name.trim(), parse_style_value(value));
    }
    Ok(style)
}
