//! Token parsers for Lumen configuration strings.
//!
//! Input is always whitespace-stripped before it reaches these parsers, so
//! unlike a general-purpose lexer they never consume trailing whitespace.
//!
//! - `literal`: numeric and hex color literals
//! - `naming`: function names and module identifiers
//! - `symbol`: parentheses

use super::util::{InputSpan, Parser, Result};

pub mod error;
mod util;
pub use util::Token;

pub mod literal;
pub mod naming;
pub mod symbol;
