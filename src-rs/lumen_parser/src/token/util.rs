use nom::{Parser as NomParser, combinator::recognize};

use crate::token::{
    InputSpan, Parser, Result,
    error::{ErrorHandlingParser, TokenError},
};

/// A lexical element of a configuration string.
///
/// The offset is measured in the whitespace-stripped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    lexeme_str: &'a str,
    offset: usize,
}

impl<'a> Token<'a> {
    /// Returns the matched text.
    #[must_use]
    pub const fn lexeme(&self) -> &'a str {
        self.lexeme_str
    }

    /// Returns the offset of the first character of the token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// Wraps a parser so that it returns the recognized text as a [`Token`].
///
/// Recoverable errors from `f` are passed through `convert_error`, which
/// gives them a more specific kind than the underlying nom error.
pub fn token<'a, O>(
    mut f: impl Parser<'a, O, TokenError>,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl Parser<'a, Token<'a>, TokenError> {
    move |input: InputSpan<'a>| -> Result<'a, Token<'a>, TokenError> {
        // capture the parser and convert the error function
        let f = |input| (&mut f).parse(input);
        let convert_error = |error| (&convert_error)(error);

        let (rest, lexeme) = recognize(f).convert_error_to(convert_error).parse(input)?;

        let token = Token {
            lexeme_str: *lexeme.fragment(),
            offset: lexeme.location_offset(),
        };

        Ok((rest, token))
    }
}
