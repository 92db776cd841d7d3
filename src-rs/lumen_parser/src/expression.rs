//! Tokenizing of function-call configuration strings.
//!
//! A call looks like `name(arg0, arg1, ...)`. The tokenizer only finds the
//! function name and splits the argument list on top-level commas; what the
//! arguments mean is up to the evaluator that asked.
//!
//! # Examples
//!
//! ```
//! use lumen_parser::ParsedExpression;
//!
//! let expression = ParsedExpression::try_parse("gt( fuel, add(1, 2) )").unwrap();
//! assert_eq!(expression.function_name(), "gt");
//! assert_eq!(expression.arguments(), ["fuel", "add(1,2)"]);
//!
//! // not a call at all: the caller should try its next grammar
//! assert!(ParsedExpression::try_parse("fuel").is_none());
//! ```

use std::fmt;

use nom::{Parser as _, bytes::complete::take, combinator::all_consuming};
use tracing::{trace, warn};

use crate::{
    Config,
    token::{
        Token,
        error::TokenError,
        naming::function_name,
        symbol::{paren_left, paren_right},
    },
    util::{InputSpan, Result, strip_whitespace},
};

/// A function call split into its name and raw argument strings.
///
/// Arguments are whitespace-free and otherwise untouched, so nested calls
/// stay as text until an evaluator recurses into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    function_name: String,
    arguments: Vec<String>,
}

impl ParsedExpression {
    /// Tries to tokenize `text` as a function call using the default [`Config`].
    ///
    /// Returns `None` when `text` is not a call or its parentheses do not
    /// balance. See [`ParsedExpression::try_parse_with`].
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::try_parse_with(text, Config::default())
    }

    /// Tries to tokenize `text` as a function call.
    ///
    /// Whitespace is removed first. The remaining text must be an ASCII
    /// function name, `(`, an argument list and a final `)`. Not matching
    /// that shape is an ordinary outcome and is not logged; an argument list
    /// with mismatched parentheses is logged as a warning, since it usually
    /// means the configuration has a typo.
    #[must_use]
    pub fn try_parse_with(text: &str, config: Config) -> Option<Self> {
        let stripped = strip_whitespace(text);
        let input = InputSpan::new_extra(stripped.as_str(), config);

        let Ok((_rest, (name, arguments_span))) = call(input) else {
            trace!(text = %stripped, "not a function call");
            return None;
        };

        match split_arguments(arguments_span) {
            Ok(arguments) => Some(Self {
                function_name: name.lexeme().to_string(),
                arguments,
            }),
            Err(error) => {
                warn!(text = %stripped, "malformed function call: {error}");
                None
            }
        }
    }

    /// Returns the name of the called function.
    #[must_use]
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Returns the argument strings in order.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Returns the number of arguments.
    #[must_use]
    pub const fn argument_count(&self) -> usize {
        self.arguments.len()
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function_name, self.arguments.join(","))
    }
}

/// Matches `name(` ... `)` where the closing paren is the last character.
///
/// The argument list is returned unsplit.
fn call(input: InputSpan<'_>) -> Result<'_, (Token<'_>, InputSpan<'_>), TokenError> {
    let (rest, name) = function_name(input)?;
    let (rest, _) = paren_left(rest)?;

    // anything without a trailing `)` leaves zero characters for the
    // arguments, and the `)` check below rejects it
    let arguments_length = rest
        .fragment()
        .strip_suffix(')')
        .map_or(0, |arguments| arguments.chars().count());

    let (rest, arguments) = take::<_, _, TokenError>(arguments_length).parse(rest)?;
    let (rest, _) = all_consuming(paren_right).parse(rest)?;

    Ok((rest, (name, arguments)))
}

/// Splits an argument list on commas that are not nested in parentheses.
///
/// An empty list gives no arguments rather than one empty argument.
fn split_arguments(arguments: InputSpan<'_>) -> std::result::Result<Vec<String>, TokenError> {
    let text = *arguments.fragment();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let base_offset = arguments.location_offset();
    let mut open_parens = Vec::new();
    let mut split_arguments = Vec::new();
    let mut argument_start = 0;

    for (index, c) in text.char_indices() {
        match c {
            '(' => open_parens.push(index),
            ')' => {
                if open_parens.pop().is_none() {
                    return Err(TokenError::unopened_paren(base_offset + index));
                }
            }
            ',' if open_parens.is_empty() => {
                split_arguments.push(text[argument_start..index].to_string());
                argument_start = index + 1;
            }
            _ => {}
        }
    }

    if let Some(&outermost_open_paren) = open_parens.first() {
        return Err(TokenError::unclosed_paren(
            base_offset + outermost_open_paren,
        ));
    }

    split_arguments.push(text[argument_start..].to_string());
    Ok(split_arguments)
}
