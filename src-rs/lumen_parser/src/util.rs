use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;

use super::config::Config;

/// A span of text in the input string.
///
/// The span contains both the text content and the configuration for the parser.
/// Offsets are measured in the whitespace-stripped text.
pub type InputSpan<'a> = LocatedSpan<&'a str, Config>;

/// A result type for parser operations.
///
/// This type alias wraps nom's `IResult` with our custom span type.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A trait for parser implementations that work with our custom span type.
///
/// This trait is automatically implemented for any type that implements nom's Parser trait
/// with our custom span type.
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}

/// Removes every whitespace character from `text`.
///
/// Whitespace is never significant in Lumen configuration strings, so every
/// entry point normalizes its input with this first.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
