//! Parsers for the symbols of the call grammar.

use nom::{Parser as _, character::complete::char};

use crate::token::{
    InputSpan, Result,
    error::{ExpectSymbol, TokenError},
    util::{Token, token},
};

/// Parses the '(' symbol token.
pub fn paren_left(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        char('('),
        TokenError::expected_symbol(ExpectSymbol::ParenLeft),
    )
    .parse(input)
}

/// Parses the ')' symbol token.
pub fn paren_right(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        char(')'),
        TokenError::expected_symbol(ExpectSymbol::ParenRight),
    )
    .parse(input)
}
