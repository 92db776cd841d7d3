//! Classification of raw configuration strings.

use crate::{Config, ParsedExpression, parse_identifier, parse_number, util::strip_whitespace};

/// What a configuration string looks like, before any evaluator gives it
/// meaning.
///
/// A single configuration field may hold a literal, the identifier of another
/// module, or a nested call. Evaluators match on this instead of trying one
/// grammar after another.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Nothing but whitespace
    Empty,
    /// A decimal number
    Literal(f64),
    /// A bare identifier, such as the name of a module
    Reference(String),
    /// A function call
    Expression(ParsedExpression),
    /// Anything else, with whitespace removed
    Unrecognized(String),
}

impl ConfigValue {
    /// Classifies `text`.
    ///
    /// Numbers win over identifiers, so `1e5` is a literal. `true` and
    /// `false` are references here; the toggle evaluator treats them as
    /// keywords before classifying.
    #[must_use]
    pub fn classify(text: &str, config: Config) -> Self {
        let stripped = strip_whitespace(text);

        if stripped.is_empty() {
            return Self::Empty;
        }

        if let Some(number) = parse_number(&stripped) {
            return Self::Literal(number);
        }

        if let Some(expression) = ParsedExpression::try_parse_with(&stripped, config) {
            return Self::Expression(expression);
        }

        match parse_identifier(&stripped) {
            Some(identifier) => Self::Reference(identifier),
            None => Self::Unrecognized(stripped),
        }
    }
}
