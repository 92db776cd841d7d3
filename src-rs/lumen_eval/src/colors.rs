//! Color source resolution.
//!
//! An indicator's color is a hex literal, the identifier of a module that
//! provides a color, or `toggle(condition, on[, off])`, which shows `on`
//! while the condition holds and `off` (black by default) otherwise.

use std::rc::Rc;

use lumen_parser::{ConfigValue, ParsedExpression, parse_color, strip_whitespace};
use lumen_part::{Color, ColorSource, Toggle, find_first};
use tracing::{debug, warn};

use crate::{EvalError, Scope, function::Arity, toggles};

/// A node of a color expression.
#[derive(Debug)]
pub enum ColorNode {
    /// A fixed color
    Constant(Color),
    /// One of two colors, chosen by a toggle on every read
    Switch {
        /// Which color to show
        condition: Rc<dyn Toggle>,
        /// Shown while `condition` is on
        on: Rc<dyn ColorSource>,
        /// Shown while `condition` is off
        off: Rc<dyn ColorSource>,
    },
}

impl ColorSource for ColorNode {
    fn output_color(&self) -> Color {
        match self {
            Self::Constant(color) => *color,
            Self::Switch { condition, on, off } => {
                if condition.toggle_status() {
                    on.output_color()
                } else {
                    off.output_color()
                }
            }
        }
    }
}

/// Parses `text` into a color source.
///
/// A bare identifier yields the color module's own handle.
///
/// # Errors
///
/// Returns an error if `text` is not a color expression, if the condition of
/// `toggle(...)` fails to parse, or if `toggle(...)` has the wrong number of
/// arguments.
pub fn parse(scope: Scope<'_>, text: &str) -> Result<Rc<dyn ColorSource>, EvalError> {
    let source = parse_source(scope, text)?;
    debug!(text, source = ?source, "parsed color expression");
    Ok(source)
}

/// Like [`parse`], but logs the error and returns `None`.
pub fn try_parse(scope: Scope<'_>, text: &str) -> Option<Rc<dyn ColorSource>> {
    parse(scope, text)
        .inspect_err(|error| warn!(text, %error, "invalid color expression"))
        .ok()
}

fn parse_source(scope: Scope<'_>, text: &str) -> Result<Rc<dyn ColorSource>, EvalError> {
    let stripped = strip_whitespace(text);

    if let Some(channels) = parse_color(&stripped) {
        return Ok(Rc::new(ColorNode::Constant(Color::from_rgba8(channels))));
    }

    let invalid = || EvalError::InvalidColor {
        text: stripped.clone(),
    };

    match ConfigValue::classify(&stripped, scope.config()) {
        ConfigValue::Reference(identifier) => {
            find_first::<dyn ColorSource>(scope.part(), &identifier).ok_or_else(invalid)
        }
        ConfigValue::Expression(call) => parse_call(scope, &call),
        ConfigValue::Empty | ConfigValue::Literal(_) | ConfigValue::Unrecognized(_) => {
            Err(invalid())
        }
    }
}

fn parse_call(scope: Scope<'_>, call: &ParsedExpression) -> Result<Rc<dyn ColorSource>, EvalError> {
    let name = call.function_name();
    if name != "toggle" {
        return Err(EvalError::UnknownFunction {
            name: name.to_string(),
        });
    }

    Arity::between(2, 3).check(name, call.argument_count())?;

    let scope = scope.nested()?;
    let arguments = call.arguments();
    let condition = toggles::require(scope, &arguments[0])?;
    let on = parse_source(scope, &arguments[1])?;
    let off = match arguments.get(2) {
        Some(off) => parse_source(scope, off)?,
        None => Rc::new(ColorNode::Constant(Color::BLACK)),
    };

    Ok(Rc::new(ColorNode::Switch { condition, on, off }))
}
