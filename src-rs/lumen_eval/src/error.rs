use std::fmt;

use lumen_part::FieldExposure;
use lumen_shared::error::{AsLumenError, Context};
use thiserror::Error;

use crate::function::{Arity, Function, builtin_functions};

/// Why a configuration string could not be turned into a value or tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The text matches no branch of the grammar.
    #[error("`{text}` is not a valid expression")]
    InvalidExpression {
        /// The offending text, whitespace removed
        text: String,
    },
    /// A well-formed call names no known function.
    #[error("unknown function `{name}`")]
    UnknownFunction {
        /// The function name as written
        name: String,
    },
    /// A function was called with the wrong number of arguments.
    #[error("`{function}` expects {arity} but was given {found}")]
    ArityMismatch {
        /// The function name as written
        function: String,
        /// The number of arguments the function accepts
        arity: Arity,
        /// The number of arguments given
        found: usize,
    },
    /// A `static(...)` or `scalar(...)` reference could not be resolved.
    #[error("cannot read field `{field}` of {}: {problem}", module_label(.module.as_deref()))]
    InvalidFieldReference {
        /// The field name as written
        field: String,
        /// The module identifier, or `None` for the owning module
        module: Option<String>,
        /// What went wrong
        problem: FieldProblem,
    },
    /// The text is not a toggle expression.
    #[error("`{text}` is not a valid toggle")]
    InvalidToggleSyntax {
        /// The offending text, whitespace removed
        text: String,
    },
    /// The text is not a color expression.
    #[error("`{text}` is not a valid color")]
    InvalidColor {
        /// The offending text, whitespace removed
        text: String,
    },
    /// Calls and `!` prefixes nest deeper than the configured limit.
    #[error("expression nests deeper than {max_depth} levels")]
    TooDeep {
        /// The configured limit
        max_depth: usize,
    },
}

/// What was wrong with a field reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    /// No module on the part has the given identifier.
    ModuleNotFound,
    /// The module registers no field with that name.
    Missing,
    /// The field is registered as hidden.
    NotExposed,
    /// The field is exposed, but not in the way the reference requires.
    WrongExposure {
        /// The exposure the reference requires
        expected: FieldExposure,
        /// The exposure the field was registered with
        found: FieldExposure,
    },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModuleNotFound => write!(f, "no such module"),
            Self::Missing => write!(f, "no such field"),
            Self::NotExposed => write!(f, "the field is not exposed"),
            Self::WrongExposure { expected, found } => {
                write!(f, "expected a {expected} field but the field is {found}")
            }
        }
    }
}

fn module_label(module: Option<&str>) -> String {
    module.map_or_else(
        || "the owning module".to_string(),
        |module| format!("module `{module}`"),
    )
}

const TOGGLE_FUNCTIONS: &str = "and, or, gt, lt, ge, le, between";

impl AsLumenError for EvalError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidExpression { .. } => vec![Context::Help(
                "expected a number, a scalar module identifier, or a call such as `add(1, 2)`"
                    .to_string(),
            )],
            Self::UnknownFunction { .. } => {
                let numeric = builtin_functions()
                    .keys()
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![
                    Context::Note(format!("numeric functions are {numeric}, static, scalar")),
                    Context::Note(format!("toggle functions are {TOGGLE_FUNCTIONS}")),
                    Context::Help("function names are case-sensitive".to_string()),
                ]
            }
            Self::ArityMismatch { function, .. } => {
                let aliases = Function::lookup(function)
                    .map(|function| function.names())
                    .filter(|names| names.len() > 1);
                aliases
                    .map(|names| {
                        Context::Note(format!(
                            "`{function}` is one of the names {}",
                            names.join(", ")
                        ))
                    })
                    .into_iter()
                    .collect()
            }
            Self::InvalidFieldReference {
                field,
                module,
                problem,
            } => vec![field_help(field, module.as_deref(), *problem)],
            Self::InvalidToggleSyntax { .. } => vec![Context::Help(format!(
                "expected `true`, `false`, `!` followed by a toggle, a toggle module identifier, \
                 or a call to one of {TOGGLE_FUNCTIONS}"
            ))],
            Self::InvalidColor { .. } => vec![Context::Help(
                "expected a hex color such as `#ff0000`, a color module identifier, \
                 or `toggle(condition, on, off)`"
                    .to_string(),
            )],
            Self::TooDeep { .. } => vec![Context::Help(
                "flatten the expression or raise `max_depth` in the parser configuration"
                    .to_string(),
            )],
        }
    }
}

fn field_help(field: &str, module: Option<&str>, problem: FieldProblem) -> Context {
    match problem {
        FieldProblem::ModuleNotFound => Context::Help(format!(
            "no module on the part has the identifier `{}`",
            module.unwrap_or_default()
        )),
        FieldProblem::Missing => Context::Help("field names are case-sensitive".to_string()),
        FieldProblem::NotExposed
        | FieldProblem::WrongExposure {
            found: FieldExposure::Hidden,
            ..
        } => Context::Note(format!(
            "`{field}` is registered as hidden and cannot be read by expressions"
        )),
        FieldProblem::WrongExposure {
            found: FieldExposure::Dynamic,
            ..
        } => Context::Help(format!("use `scalar({field})` to read a dynamic field")),
        FieldProblem::WrongExposure {
            found: FieldExposure::Static,
            ..
        } => Context::Help(format!("use `static({field})` to read a static field")),
    }
}
