//! Tokenizer for Lumen indicator configuration strings.
//!
//! Configuration strings are one of: a decimal literal, a hex color, a module
//! identifier, or a function call `name(arg, ...)` whose arguments are again
//! configuration strings. This crate recognizes those shapes; giving them
//! meaning is left to `lumen_eval`.

use nom::{Parser as _, combinator::all_consuming};

mod config;
mod expression;
pub mod token;
mod util;
mod value;

pub use config::Config;
pub use expression::ParsedExpression;
pub use util::strip_whitespace;
pub use value::ConfigValue;

use token::{
    error::TokenError,
    literal::{color, color_channels, number},
    naming::identifier,
};
use util::{InputSpan, Parser};

/// Parses `text` as a decimal number literal.
///
/// Whitespace is ignored. Returns `None` if anything other than a single
/// number is present.
///
/// # Examples
///
/// ```
/// use lumen_parser::parse_number;
///
/// assert_eq!(parse_number(" 2.5 "), Some(2.5));
/// assert_eq!(parse_number("-1e3"), Some(-1000.0));
/// assert_eq!(parse_number("fuel"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let stripped = strip_whitespace(text);
    let token = parse_complete(&stripped, number)?;
    token.lexeme().parse().ok()
}

/// Parses `text` as a hex color literal and returns its RGBA bytes.
///
/// # Examples
///
/// ```
/// use lumen_parser::parse_color;
///
/// assert_eq!(parse_color("#f00"), Some([255, 0, 0, 255]));
/// assert_eq!(parse_color("#00FF0080"), Some([0, 255, 0, 128]));
/// assert_eq!(parse_color("f00"), None);
/// ```
#[must_use]
pub fn parse_color(text: &str) -> Option<[u8; 4]> {
    let stripped = strip_whitespace(text);
    let token = parse_complete(&stripped, color)?;
    let digits = token.lexeme().strip_prefix('#')?;
    color_channels(digits)
}

/// Parses `text` as a module identifier.
///
/// # Examples
///
/// ```
/// use lumen_parser::parse_identifier;
///
/// assert_eq!(parse_identifier(" fuel "), Some("fuel".to_string()));
/// assert_eq!(parse_identifier("gt(fuel,1)"), None);
/// ```
#[must_use]
pub fn parse_identifier(text: &str) -> Option<String> {
    let stripped = strip_whitespace(text);
    let token = parse_complete(&stripped, identifier)?;
    Some(token.lexeme().to_string())
}

/// Runs `parser` over all of `input`, discarding any error.
fn parse_complete<'a, T>(input: &'a str, parser: impl Parser<'a, T, TokenError>) -> Option<T> {
    let input = InputSpan::new_extra(input, Config::default());
    all_consuming(parser)
        .parse(input)
        .ok()
        .map(|(_rest, value)| value)
}
