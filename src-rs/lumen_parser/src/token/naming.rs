//! Parsers for function names and module identifiers.
//!
//! Function names are deliberately narrow (ASCII letters only) so that a
//! configuration string like `fuel_2(3)` is never mistaken for a call.
//! Identifiers name modules on a part and are more permissive.

use nom::{
    Parser as _,
    bytes::complete::take_while,
    character::complete::{alpha1, satisfy},
};

use crate::token::{
    InputSpan, Result,
    error::TokenError,
    util::{Token, token},
};

/// Parses a function name: one or more ASCII letters.
///
/// Examples of valid function names:
/// - `gt`, `between`
/// - `minimum`, `SQRT`
///
/// Examples of invalid function names:
/// - `max_2` (only the `max` prefix matches)
/// - `2max` (starts with a digit)
pub fn function_name(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(alpha1, TokenError::expected_function_name).parse(input)
}

/// Parses a module identifier (alphabetic or underscore, then alphanumeric,
/// underscore or dash).
///
/// Examples of valid identifiers:
/// - `fuel`, `m1`
/// - `_hidden`, `lamp-left`
///
/// Examples of invalid identifiers:
/// - `1fuel` (starts with digit)
/// - `fuel.level` (contains a dot)
pub fn identifier(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        |input| -> Result<_, TokenError> {
            let (rest, _) = satisfy::<_, _, TokenError>(|c: char| c.is_alphabetic() || c == '_')
                .parse(input)?;
            let (rest, _) = take_while::<_, _, TokenError>(|c: char| {
                c.is_alphanumeric() || c == '_' || c == '-'
            })
            .parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_identifier,
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Config,
        token::error::{ExpectKind, TokenErrorKind},
    };

    #[test]
    fn function_name_letters_only() {
        let input = InputSpan::new_extra("between(", Config::default());
        let (rest, matched) = function_name(input).expect("should parse function name");
        assert_eq!(matched.lexeme(), "between");
        assert_eq!(rest.fragment(), &"(");
    }

    #[test]
    fn function_name_stops_at_digit() {
        let input = InputSpan::new_extra("max2(", Config::default());
        let (rest, matched) = function_name(input).expect("should parse prefix");
        assert_eq!(matched.lexeme(), "max");
        assert_eq!(rest.fragment(), &"2(");
    }

    #[test]
    fn function_name_rejects_digit_start() {
        let input = InputSpan::new_extra("2max", Config::default());
        let error = function_name(input).expect_err("should not parse");
        let nom::Err::Error(error) = error else {
            panic!("expected a recoverable error, got {error:?}");
        };
        assert_eq!(
            error.kind,
            TokenErrorKind::Expect(ExpectKind::FunctionName)
        );
        assert_eq!(error.offset, 0);
    }

    #[test]
    fn identifier_with_dash_and_digits() {
        let input = InputSpan::new_extra("lamp-left2,", Config::default());
        let (rest, matched) = identifier(input).expect("should parse identifier");
        assert_eq!(matched.lexeme(), "lamp-left2");
        assert_eq!(rest.fragment(), &",");
    }

    #[test]
    fn identifier_with_underscore_start() {
        let input = InputSpan::new_extra("_fuel", Config::default());
        let (rest, matched) = identifier(input).expect("should parse identifier");
        assert_eq!(matched.lexeme(), "_fuel");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn identifier_rejects_digit_start() {
        let input = InputSpan::new_extra("1fuel", Config::default());
        let error = identifier(input).expect_err("should not parse");
        let nom::Err::Error(error) = error else {
            panic!("expected a recoverable error, got {error:?}");
        };
        assert_eq!(error.kind, TokenErrorKind::Expect(ExpectKind::Identifier));
    }
}
