//! Parsers for numeric and color literals.

use nom::{
    Parser as _,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, hex_digit1, one_of},
    combinator::{opt, verify},
};

use crate::token::{
    InputSpan, Result,
    error::{ErrorHandlingParser, TokenError},
    util::{Token, token},
};

/// Parses a decimal number literal with optional sign, fraction and exponent.
///
/// Every lexeme this parser accepts is also accepted by `f64::from_str`, so
/// callers may convert with `lexeme().parse::<f64>()`.
///
/// The parser handles the following number formats:
/// - Integers: `42`, `-17`, `+123`
/// - Decimals: `3.1415`, `-2.5`, `.5`, `5.`
/// - Exponents: `2.5e10`, `-1.2E-3`, `1e+5`
pub fn number(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    let opt_sign = opt(one_of("+-"));

    // "5", "5." and "5.25", or a bare fraction such as ".25"
    let mantissa = alt((
        (digit1, opt((tag("."), digit0))).map(|_| ()),
        (tag("."), digit1).map(|_| ()),
    ));

    let opt_exponent = opt(|input| -> Result<_, TokenError> {
        let (rest, e_span) = tag::<_, _, TokenError>("e")
            .or(tag("E"))
            .parse(input)?;
        let (rest, _) = opt(one_of::<_, _, TokenError>("+-")).parse(rest)?;
        let (rest, _) = digit1
            .or_fail_with(TokenError::invalid_exponent_part(e_span))
            .parse(rest)?;
        Ok((rest, ()))
    });

    token(
        (opt_sign, mantissa, opt_exponent),
        TokenError::expected_number,
    )
    .parse(input)
}

/// Parses a hex color literal: `#` followed by 3, 4, 6 or 8 hex digits.
///
/// The returned token includes the `#`.
pub fn color(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    let hash_offset = input.location_offset();
    token(
        |input| -> Result<_, TokenError> {
            let (rest, _) = char::<_, TokenError>('#').parse(input)?;
            let (rest, _) = verify(hex_digit1, |digits: &InputSpan<'_>| {
                matches!(digits.fragment().len(), 3 | 4 | 6 | 8)
            })
            .or_fail_with(TokenError::invalid_color_length(hash_offset))
            .parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_color,
    )
    .parse(input)
}

/// Converts the hex digits of a color literal (without `#`) to RGBA bytes.
///
/// Short forms repeat each digit (`f` becomes `ff`); a missing alpha channel
/// is fully opaque.
pub fn color_channels(digits: &str) -> Option<[u8; 4]> {
    let mut channels = [u8::MAX; 4];

    match digits.len() {
        3 | 4 => {
            for (channel, digit) in channels.iter_mut().zip(digits.chars()) {
                let nibble = u8::try_from(digit.to_digit(16)?).ok()?;
                *channel = nibble * 0x11;
            }
        }
        6 | 8 => {
            for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks(2)) {
                let pair = std::str::from_utf8(pair).ok()?;
                *channel = u8::from_str_radix(pair, 16).ok()?;
            }
        }
        _ => return None,
    }

    Some(channels)
}
