//! Evaluators for Lumen indicator configuration strings.
//!
//! Each evaluator turns a configuration string into something the host can
//! poll:
//!
//! - [`statics`] computes a number once, at parse time
//! - [`scalars`] builds a numeric tree that re-reads live values on every call
//! - [`toggles`] builds a boolean tree over scalars and toggle modules
//! - [`colors`] picks a color source
//!
//! All of them parse against a [`Scope`]: the part to resolve identifiers in,
//! the module that owns the configuration string, and the parser [`Config`].
//!
//! [`Config`]: lumen_parser::Config

pub mod colors;
mod error;
pub mod function;
pub mod scalars;
mod scope;
pub mod statics;
pub mod toggles;

#[cfg(test)]
mod test;

pub use error::{EvalError, FieldProblem};
pub use scope::Scope;
