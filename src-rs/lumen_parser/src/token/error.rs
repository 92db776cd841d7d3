//! Error handling for token parsing

use std::fmt;

use nom::{Parser, error::ParseError};

use super::InputSpan;

/// An error that occurred during token parsing.
///
/// Contains both the kind of error and the offset (in the whitespace-stripped
/// text) where it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The specific kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the stripped text where the error occurred
    pub offset: usize,
}

/// The different kinds of errors that can occur during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Expected a specific token
    Expect(ExpectKind),
    /// A token was started but could not be completed
    Incomplete(IncompleteKind),
    /// Parentheses in an argument list do not pair up
    Unbalanced(UnbalancedKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The different kinds of tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected a hex color literal
    Color,
    /// Expected a function name
    FunctionName,
    /// Expected a module identifier
    Identifier,
    /// Expected a number
    Number,
    /// Expected a symbol
    Symbol(ExpectSymbol),
}

/// The different symbols that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectSymbol {
    /// Expected '(' symbol
    ParenLeft,
    /// Expected ')' symbol
    ParenRight,
}

/// The different kinds of incomplete tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// A color literal with a digit count other than 3, 4, 6 or 8
    InvalidColorLength {
        /// The offset of the `#`
        hash_offset: usize,
    },
    /// An exponent marker not followed by digits
    InvalidExponentPart {
        /// The offset of the exponent 'e' character
        e_offset: usize,
    },
}

/// The ways an argument list can have mismatched parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnbalancedKind {
    /// A `(` that is never closed
    UnclosedParen,
    /// A `)` with no matching `(`
    UnopenedParen,
}

impl TokenError {
    /// Creates a new `TokenError`
    const fn new(kind: TokenErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Updates the error kind
    ///
    /// This should only be happening if the error is a nom error, so it panics
    /// if it's not.
    fn update_kind(self, kind: TokenErrorKind) -> Self {
        let is_nom_error = matches!(self.kind, TokenErrorKind::NomError(_));
        assert!(
            is_nom_error,
            "Cannot update an error that is not a nom error! (attempting to update the kind {:?})",
            self.kind
        );

        Self { kind, ..self }
    }

    /// Creates a new `TokenError` instance for an expected color
    pub fn expected_color(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Color))
    }

    /// Creates a new `TokenError` instance for an expected function name
    pub fn expected_function_name(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::FunctionName))
    }

    /// Creates a new `TokenError` instance for an expected identifier
    pub fn expected_identifier(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Identifier))
    }

    /// Creates a new `TokenError` instance for an expected number
    pub fn expected_number(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Number))
    }

    /// Creates a new `TokenError` instance for an expected symbol
    pub fn expected_symbol(symbol: ExpectSymbol) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol(symbol)))
    }

    /// Creates a new `TokenError` instance for a color with the wrong digit count
    pub fn invalid_color_length(hash_offset: usize) -> impl Fn(Self) -> Self {
        move |error: Self| {
            error.update_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidColorLength { hash_offset },
            ))
        }
    }

    /// Creates a new `TokenError` instance for an invalid exponent part in a number
    pub fn invalid_exponent_part(e_span: InputSpan<'_>) -> impl Fn(Self) -> Self {
        move |error: Self| {
            let e_offset = e_span.location_offset();
            error.update_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidExponentPart { e_offset },
            ))
        }
    }

    /// Creates a new `TokenError` for a `(` at `offset` that is never closed
    #[must_use]
    pub const fn unclosed_paren(offset: usize) -> Self {
        Self::new(
            TokenErrorKind::Unbalanced(UnbalancedKind::UnclosedParen),
            offset,
        )
    }

    /// Creates a new `TokenError` for a `)` at `offset` with no matching `(`
    #[must_use]
    pub const fn unopened_paren(offset: usize) -> Self {
        Self::new(
            TokenErrorKind::Unbalanced(UnbalancedKind::UnopenedParen),
            offset,
        )
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenErrorKind::Expect(ExpectKind::Color) => write!(f, "expected a color"),
            TokenErrorKind::Expect(ExpectKind::FunctionName) => {
                write!(f, "expected a function name")
            }
            TokenErrorKind::Expect(ExpectKind::Identifier) => write!(f, "expected an identifier"),
            TokenErrorKind::Expect(ExpectKind::Number) => write!(f, "expected a number"),
            TokenErrorKind::Expect(ExpectKind::Symbol(symbol)) => {
                let symbol = match symbol {
                    ExpectSymbol::ParenLeft => "(",
                    ExpectSymbol::ParenRight => ")",
                };
                write!(f, "expected `{symbol}`")
            }
            TokenErrorKind::Incomplete(IncompleteKind::InvalidColorLength { .. }) => {
                write!(f, "color literals need 3, 4, 6 or 8 hex digits")
            }
            TokenErrorKind::Incomplete(IncompleteKind::InvalidExponentPart { .. }) => {
                write!(f, "exponent is missing its digits")
            }
            TokenErrorKind::Unbalanced(UnbalancedKind::UnclosedParen) => {
                write!(f, "unclosed `(` at offset {}", self.offset)
            }
            TokenErrorKind::Unbalanced(UnbalancedKind::UnopenedParen) => {
                write!(f, "unmatched `)` at offset {}", self.offset)
            }
            TokenErrorKind::NomError(kind) => {
                write!(f, "{} at offset {}", kind.description(), self.offset)
            }
        }
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self {
            kind: TokenErrorKind::NomError(kind),
            offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

/// Error conversion helpers for nom parsers.
pub trait ErrorHandlingParser<I, O, E>: Parser<I, Output = O, Error = E>
where
    E: ParseError<I>,
{
    /// Converts recoverable errors (`nom::Err::Error`) with `convert_error`,
    /// passing unrecoverable ones through `From`.
    fn convert_error_to<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Turns recoverable errors into failures, converting them with
    /// `convert_error`.
    ///
    /// Used once a token is committed, for example after the `e` of an
    /// exponent.
    fn or_fail_with<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Failure(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }
}

impl<I, O, E, P> ErrorHandlingParser<I, O, E> for P
where
    P: Parser<I, Output = O, Error = E>,
    E: ParseError<I>,
{
}
