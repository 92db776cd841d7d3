//! Lazy numeric evaluation.
//!
//! A scalar expression becomes a tree that recomputes its value from live
//! host state every time it is read. Nothing is cached.

use std::rc::Rc;

use lumen_parser::{ConfigValue, ParsedExpression, strip_whitespace};
use lumen_part::{Field, FieldExposure, Scalar, find_first};
use tracing::debug;

use crate::{EvalError, Scope, function::Function};

/// A node of a scalar expression tree.
#[derive(Debug)]
pub enum ScalarNode {
    /// A fixed number, including the value of a `static(...)` reference
    Literal(f64),
    /// A dynamic field of a module, read on every evaluation
    Field(Field),
    /// Another module's scalar capability
    Reference(Rc<dyn Scalar>),
    /// A numeric function applied to the values of its children
    Call {
        /// The function to apply
        function: Function,
        /// The argument subtrees, in call order
        arguments: Vec<ScalarNode>,
    },
}

impl Scalar for ScalarNode {
    fn scalar_value(&self) -> f64 {
        match self {
            Self::Literal(value) => *value,
            Self::Field(field) => field.read(),
            Self::Reference(scalar) => scalar.scalar_value(),
            Self::Call {
                function,
                arguments,
            } => function.apply(arguments.iter().map(Self::scalar_value)),
        }
    }
}

impl ScalarNode {
    pub(crate) fn into_shared(self) -> Rc<dyn Scalar> {
        match self {
            Self::Reference(scalar) => scalar,
            node => Rc::new(node),
        }
    }
}

/// Parses `text` into a scalar tree.
///
/// Accepts everything [`crate::statics::parse`] accepts, plus `scalar(field)`,
/// `scalar(field, module)`, and the bare identifier of a module with the
/// scalar capability. A bare identifier yields that module's own handle.
///
/// # Errors
///
/// Returns an error if `text` is not a scalar expression, calls an unknown
/// function or passes the wrong number of arguments, names no scalar module,
/// or references a field that is missing or not exposed the right way.
pub fn parse(scope: Scope<'_>, text: &str) -> Result<Rc<dyn Scalar>, EvalError> {
    let node = parse_node(scope, text)?;
    debug!(text, tree = ?node, "parsed scalar expression");
    Ok(node.into_shared())
}

pub(crate) fn parse_node(scope: Scope<'_>, text: &str) -> Result<ScalarNode, EvalError> {
    let invalid = || EvalError::InvalidExpression {
        text: strip_whitespace(text),
    };

    match ConfigValue::classify(text, scope.config()) {
        ConfigValue::Literal(value) => Ok(ScalarNode::Literal(value)),
        ConfigValue::Reference(identifier) => find_first::<dyn Scalar>(scope.part(), &identifier)
            .map(ScalarNode::Reference)
            .ok_or_else(invalid),
        ConfigValue::Expression(call) => parse_call(scope, &call),
        ConfigValue::Empty | ConfigValue::Unrecognized(_) => Err(invalid()),
    }
}

fn parse_call(scope: Scope<'_>, call: &ParsedExpression) -> Result<ScalarNode, EvalError> {
    match call.function_name() {
        "scalar" => scope
            .field(call, FieldExposure::Dynamic)
            .map(ScalarNode::Field),
        "static" => scope
            .field(call, FieldExposure::Static)
            .map(|field| ScalarNode::Literal(field.read())),
        name => {
            let function = Function::lookup(name).ok_or_else(|| EvalError::UnknownFunction {
                name: name.to_string(),
            })?;
            function.arity().check(name, call.argument_count())?;

            let scope = scope.nested()?;
            let arguments = call
                .arguments()
                .iter()
                .map(|argument| parse_node(scope, argument))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(ScalarNode::Call {
                function,
                arguments,
            })
        }
    }
}
