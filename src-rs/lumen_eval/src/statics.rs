//! Eager numeric evaluation.
//!
//! A static expression is computed once, when the configuration is parsed.
//! It may read fields the owning module (or another module of the part)
//! registers as [`FieldExposure::Static`].

use lumen_parser::{ConfigValue, ParsedExpression, strip_whitespace};
use lumen_part::FieldExposure;
use tracing::debug;

use crate::{EvalError, Scope, function::Function};

/// Evaluates `text` to a number.
///
/// Accepts a numeric literal, `static(field)`, `static(field, module)`, or a
/// call to one of the numeric functions whose arguments are again static
/// expressions.
///
/// # Errors
///
/// Returns an error if `text` is not a static expression, calls an unknown
/// function or passes the wrong number of arguments, or references a field
/// that is missing or not exposed as static.
pub fn parse(scope: Scope<'_>, text: &str) -> Result<f64, EvalError> {
    let value = evaluate(scope, text)?;
    debug!(text, value, "evaluated static expression");
    Ok(value)
}

pub(crate) fn evaluate(scope: Scope<'_>, text: &str) -> Result<f64, EvalError> {
    match ConfigValue::classify(text, scope.config()) {
        ConfigValue::Literal(value) => Ok(value),
        ConfigValue::Expression(call) => evaluate_call(scope, &call),
        ConfigValue::Empty | ConfigValue::Reference(_) | ConfigValue::Unrecognized(_) => {
            Err(EvalError::InvalidExpression {
                text: strip_whitespace(text),
            })
        }
    }
}

fn evaluate_call(scope: Scope<'_>, call: &ParsedExpression) -> Result<f64, EvalError> {
    let name = call.function_name();

    if name == "static" {
        return scope
            .field(call, FieldExposure::Static)
            .map(|field| field.read());
    }

    let function = Function::lookup(name).ok_or_else(|| EvalError::UnknownFunction {
        name: name.to_string(),
    })?;
    function.arity().check(name, call.argument_count())?;

    let scope = scope.nested()?;
    let arguments = call
        .arguments()
        .iter()
        .map(|argument| evaluate(scope, argument))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(function.apply(arguments))
}
