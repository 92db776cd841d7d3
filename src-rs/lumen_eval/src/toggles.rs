//! Lazy boolean evaluation.
//!
//! A toggle expression is resolved in this order:
//!
//! 1. `true` or `false`
//! 2. `!` followed by another toggle expression
//! 3. the identifier of a module with the toggle capability
//! 4. a call to `and`, `or`, `gt`, `lt`, `ge`, `le` or `between`
//!
//! Thresholds and bounds are static expressions, computed once. The values
//! they are compared against are scalar expressions, re-read on every call.

use std::rc::Rc;

use lumen_parser::{ConfigValue, ParsedExpression, strip_whitespace};
use lumen_part::{Scalar, Toggle, find_first};
use tracing::{debug, warn};

use crate::{EvalError, Scope, function::Arity, scalars, statics};

/// A threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `gt`: strictly greater than the threshold
    GreaterThan,
    /// `lt`: strictly less than the threshold
    LessThan,
    /// `ge`: greater than or equal to the threshold
    GreaterOrEqual,
    /// `le`: less than or equal to the threshold
    LessOrEqual,
}

impl Comparison {
    /// Looks up a comparison by its function name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "gt" => Some(Self::GreaterThan),
            "lt" => Some(Self::LessThan),
            "ge" => Some(Self::GreaterOrEqual),
            "le" => Some(Self::LessOrEqual),
            _ => None,
        }
    }

    /// Returns `true` if `value` compares to `threshold` this way.
    #[must_use]
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
            Self::GreaterOrEqual => value >= threshold,
            Self::LessOrEqual => value <= threshold,
        }
    }
}

/// A node of a toggle expression tree.
#[derive(Debug)]
pub enum ToggleNode {
    /// `true` or `false`
    Constant(bool),
    /// The negation of the child
    Inverter(Box<ToggleNode>),
    /// On when every child is on, checked in order
    And(Vec<ToggleNode>),
    /// On when any child is on, checked in order
    Or(Vec<ToggleNode>),
    /// A scalar compared against a fixed threshold
    Comparison {
        /// How to compare
        comparison: Comparison,
        /// The value, re-read on every evaluation
        input: Rc<dyn Scalar>,
        /// The threshold, computed at parse time
        threshold: f64,
    },
    /// A scalar checked against an inclusive range
    Between {
        /// The value, re-read on every evaluation
        input: Rc<dyn Scalar>,
        /// The lower bound, computed at parse time
        min: f64,
        /// The upper bound, computed at parse time
        max: f64,
    },
    /// Another module's toggle capability
    Reference(Rc<dyn Toggle>),
}

impl Toggle for ToggleNode {
    fn toggle_status(&self) -> bool {
        match self {
            Self::Constant(status) => *status,
            Self::Inverter(child) => !child.toggle_status(),
            Self::And(children) => children.iter().all(Self::toggle_status),
            Self::Or(children) => children.iter().any(Self::toggle_status),
            Self::Comparison {
                comparison,
                input,
                threshold,
            } => comparison.holds(input.scalar_value(), *threshold),
            Self::Between { input, min, max } => {
                let value = input.scalar_value();
                *min <= value && value <= *max
            }
            Self::Reference(toggle) => toggle.toggle_status(),
        }
    }
}

impl ToggleNode {
    /// Negates the node. Negating an inverter yields its child.
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            Self::Inverter(child) => *child,
            node => Self::Inverter(Box::new(node)),
        }
    }

    fn into_shared(self) -> Rc<dyn Toggle> {
        match self {
            Self::Reference(toggle) => toggle,
            node => Rc::new(node),
        }
    }
}

/// Parses `text` into a toggle tree.
///
/// If `text` is the bare identifier of a toggle module (possibly under an
/// even number of `!`), the module's own handle is returned.
///
/// # Errors
///
/// Returns an error if `text` is not a toggle expression, calls an unknown
/// function or passes the wrong number of arguments, or if one of the
/// scalar or static arguments fails to parse.
pub fn require(scope: Scope<'_>, text: &str) -> Result<Rc<dyn Toggle>, EvalError> {
    let node = parse_node(scope, text)?;
    debug!(text, tree = ?node, "parsed toggle expression");
    Ok(node.into_shared())
}

/// Like [`require`], but logs the error and returns `None`.
pub fn try_parse(scope: Scope<'_>, text: &str) -> Option<Rc<dyn Toggle>> {
    require(scope, text)
        .inspect_err(|error| warn!(text, %error, "invalid toggle expression"))
        .ok()
}

fn parse_node(scope: Scope<'_>, text: &str) -> Result<ToggleNode, EvalError> {
    let stripped = strip_whitespace(text);

    if let Some(operand) = stripped.strip_prefix('!') {
        return parse_node(scope.nested()?, operand).map(ToggleNode::invert);
    }

    let invalid = || EvalError::InvalidToggleSyntax {
        text: stripped.clone(),
    };

    match ConfigValue::classify(&stripped, scope.config()) {
        ConfigValue::Reference(identifier) if identifier.eq_ignore_ascii_case("true") => {
            Ok(ToggleNode::Constant(true))
        }
        ConfigValue::Reference(identifier) if identifier.eq_ignore_ascii_case("false") => {
            Ok(ToggleNode::Constant(false))
        }
        ConfigValue::Reference(identifier) => find_first::<dyn Toggle>(scope.part(), &identifier)
            .map(ToggleNode::Reference)
            .ok_or_else(invalid),
        ConfigValue::Expression(call) => parse_call(scope, &call),
        ConfigValue::Empty | ConfigValue::Literal(_) | ConfigValue::Unrecognized(_) => {
            Err(invalid())
        }
    }
}

fn parse_call(scope: Scope<'_>, call: &ParsedExpression) -> Result<ToggleNode, EvalError> {
    let name = call.function_name();
    match name {
        "and" => parse_combination(scope, call, ToggleNode::And),
        "or" => parse_combination(scope, call, ToggleNode::Or),
        "between" => parse_between(scope, call),
        _ => match Comparison::lookup(name) {
            Some(comparison) => parse_comparison(scope, call, comparison),
            None => Err(EvalError::UnknownFunction {
                name: name.to_string(),
            }),
        },
    }
}

fn parse_combination(
    scope: Scope<'_>,
    call: &ParsedExpression,
    combine: fn(Vec<ToggleNode>) -> ToggleNode,
) -> Result<ToggleNode, EvalError> {
    Arity::at_least(1).check(call.function_name(), call.argument_count())?;

    let scope = scope.nested()?;
    let children = call
        .arguments()
        .iter()
        .map(|argument| parse_node(scope, argument))
        .collect::<Result<Vec<_>, _>>()?;

    match <[ToggleNode; 1]>::try_from(children) {
        Ok([child]) => Ok(child),
        Err(children) => Ok(combine(children)),
    }
}

fn parse_comparison(
    scope: Scope<'_>,
    call: &ParsedExpression,
    comparison: Comparison,
) -> Result<ToggleNode, EvalError> {
    Arity::exactly(2).check(call.function_name(), call.argument_count())?;

    let scope = scope.nested()?;
    let arguments = call.arguments();
    let input = scalars::parse_node(scope, &arguments[0])?.into_shared();
    let threshold = statics::evaluate(scope, &arguments[1])?;

    Ok(ToggleNode::Comparison {
        comparison,
        input,
        threshold,
    })
}

fn parse_between(scope: Scope<'_>, call: &ParsedExpression) -> Result<ToggleNode, EvalError> {
    Arity::exactly(3).check(call.function_name(), call.argument_count())?;

    let scope = scope.nested()?;
    let arguments = call.arguments();
    let input = scalars::parse_node(scope, &arguments[0])?.into_shared();
    let min = statics::evaluate(scope, &arguments[1])?;
    let max = statics::evaluate(scope, &arguments[2])?;

    if min > max {
        warn!(
            expression = %call,
            min,
            max,
            "lower bound exceeds upper bound, toggle is always off"
        );
        return Ok(ToggleNode::Constant(false));
    }

    Ok(ToggleNode::Between { input, min, max })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use lumen_parser::Config;
    use lumen_part::FieldExposure;

    use super::*;
    use crate::test::{TestModule, TestPart, live_value};

    fn status(scope: Scope<'_>, text: &str) -> bool {
        require(scope, text)
            .expect("toggle should parse")
            .toggle_status()
    }

    #[test]
    fn constants() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        assert!(status(scope, "true"));
        assert!(!status(scope, " false "));
        assert!(status(scope, "True"));
        assert!(!status(scope, "!true"));
    }

    #[test]
    fn and_or() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        assert!(!status(scope, "and(true,false)"));
        assert!(status(scope, "and(true, true, true)"));
        assert!(status(scope, "and(true)"));
        assert!(status(scope, "or(false, true)"));
        assert!(!status(scope, "or(false)"));
        assert!(status(scope, "or(and(true, false), !false)"));
    }

    #[test]
    fn single_child_collapses() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        assert!(matches!(
            parse_node(scope, "and(or(true))"),
            Ok(ToggleNode::Constant(true))
        ));
    }

    #[test]
    fn empty_combination_is_arity_mismatch() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        for name in ["and", "or"] {
            assert_eq!(
                require(scope, &format!("{name}()")).map(|_| ()),
                Err(EvalError::ArityMismatch {
                    function: name.to_string(),
                    arity: Arity::at_least(1),
                    found: 0,
                })
            );
        }
    }

    #[test]
    fn and_short_circuits() {
        let reads = Rc::new(Cell::new(0));
        let mut part = TestPart::new();
        let owner = part.add(TestModule::new("owner").with_field(
            "probe",
            FieldExposure::Dynamic,
            {
                let reads = Rc::clone(&reads);
                move || {
                    reads.set(reads.get() + 1);
                    1.0
                }
            },
        ));
        let scope = Scope::new(&part, &*owner);

        let and = require(scope, "and(false, gt(scalar(probe), 0))").expect("should parse");
        assert!(!and.toggle_status());
        assert_eq!(reads.get(), 0);

        let or = require(scope, "or(true, gt(scalar(probe), 0))").expect("should parse");
        assert!(or.toggle_status());
        assert_eq!(reads.get(), 0);

        let or = require(scope, "or(false, gt(scalar(probe), 0))").expect("should parse");
        assert!(or.toggle_status());
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn double_negation_is_identity() {
        let mut part = TestPart::new();
        let lamp = part.add(TestModule::new("lamp").with_toggle(false));
        let scope = Scope::new(&part, &*lamp);

        let toggle = require(scope, "!!lamp").expect("should parse");
        assert!(std::ptr::addr_eq(Rc::as_ptr(&toggle), Rc::as_ptr(&lamp)));

        for state in [false, true] {
            lamp.set_toggle(state);
            assert_eq!(toggle.toggle_status(), state);
        }
    }

    #[test]
    fn double_negation_unwraps_inverter() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        assert!(matches!(
            parse_node(scope, "!!and(true, false)"),
            Ok(ToggleNode::And(_))
        ));
        assert!(matches!(
            parse_node(scope, "!!!true"),
            Ok(ToggleNode::Inverter(_))
        ));
    }

    #[test]
    fn module_reference() {
        let mut part = TestPart::new();
        let lamp = part.add(TestModule::new("lamp").with_toggle(true));
        let owner = part.add(TestModule::new("owner"));
        let scope = Scope::new(&part, &*owner);

        let toggle = require(scope, "lamp").expect("should parse");
        assert!(std::ptr::addr_eq(Rc::as_ptr(&toggle), Rc::as_ptr(&lamp)));

        let inverted = require(scope, "!lamp").expect("should parse");
        assert!(!inverted.toggle_status());
        lamp.set_toggle(false);
        assert!(inverted.toggle_status());
    }

    #[test]
    fn comparison_rereads_its_input() {
        let mut part = TestPart::new();
        let fuel = part.add(TestModule::new("fuel").with_scalar(5.0));
        let scope = Scope::new(&part, &*fuel);

        let gt = require(scope, "gt(fuel, 3)").expect("should parse");
        let lt = require(scope, "lt(fuel, 3)").expect("should parse");
        let ge = require(scope, "ge(fuel, 5)").expect("should parse");
        let le = require(scope, "le(fuel, 5)").expect("should parse");
        assert!(gt.toggle_status());
        assert!(!lt.toggle_status());
        assert!(ge.toggle_status());
        assert!(le.toggle_status());

        fuel.set_scalar(1.0);
        assert!(!gt.toggle_status());
        assert!(lt.toggle_status());
        assert!(!ge.toggle_status());
        assert!(le.toggle_status());
    }

    #[test]
    fn comparison_on_dynamic_field() {
        let (rate, reader) = live_value(0.0);
        let mut part = TestPart::new();
        let owner = part.add(TestModule::new("owner").with_field(
            "rate",
            FieldExposure::Dynamic,
            reader,
        ));
        let scope = Scope::new(&part, &*owner);

        let toggle = require(scope, "gt(multiply(scalar(rate), 2), 1)").expect("should parse");
        assert!(!toggle.toggle_status());
        rate.set(1.0);
        assert!(toggle.toggle_status());
    }

    #[test]
    fn between_is_inclusive() {
        let mut part = TestPart::new();
        let fuel = part.add(TestModule::new("fuel").with_scalar(0.0));
        let scope = Scope::new(&part, &*fuel);

        let toggle = require(scope, "between(fuel, 5, 10)").expect("should parse");
        let cases = [
            (4.9, false),
            (5.0, true),
            (7.5, true),
            (10.0, true),
            (10.1, false),
        ];
        for (value, expected) in cases {
            fuel.set_scalar(value);
            assert_eq!(toggle.toggle_status(), expected, "{value}");
        }
    }

    #[test]
    fn reversed_between_is_always_off() {
        let mut part = TestPart::new();
        let fuel = part.add(TestModule::new("fuel").with_scalar(0.0));
        let scope = Scope::new(&part, &*fuel);

        let toggle = require(scope, "between(fuel, 10, 5)").expect("should parse");
        for value in [-100.0, 0.0, 5.0, 7.5, 10.0, 100.0] {
            fuel.set_scalar(value);
            assert!(!toggle.toggle_status(), "{value}");
        }
    }

    #[test]
    fn fuel_threshold_scenario() {
        let mut part = TestPart::new();
        let m1 = part.add(TestModule::new("m1").with_value(
            "threshold",
            FieldExposure::Static,
            5.0,
        ));
        let fuel = part.add(TestModule::new("fuel").with_scalar(7.5));

        let toggle =
            require(Scope::new(&part, &*m1), "gt(fuel, static(threshold))").expect("should parse");
        assert!(toggle.toggle_status());

        fuel.set_scalar(3.0);
        assert!(!toggle.toggle_status());
    }

    #[test]
    fn fuel_threshold_scenario_from_other_module() {
        let mut part = TestPart::new();
        part.add(TestModule::new("m1").with_value("threshold", FieldExposure::Static, 5.0));
        let fuel = part.add(TestModule::new("fuel").with_scalar(7.5));
        let owner = part.add(TestModule::anonymous());

        let toggle = require(Scope::new(&part, &*owner), "gt(fuel, static(threshold, m1))")
            .expect("should parse");
        assert!(toggle.toggle_status());

        fuel.set_scalar(3.0);
        assert!(!toggle.toggle_status());
    }

    #[test]
    fn invalid_syntax() {
        let mut part = TestPart::new();
        let owner = part.add(TestModule::new("gauge").with_scalar(1.0));
        let scope = Scope::new(&part, &*owner);

        for (text, stripped) in [
            ("", ""),
            ("1", "1"),
            ("missing", "missing"),
            ("gauge", "gauge"),
            ("and(true", "and(true"),
            ("! ?", "?"),
        ] {
            assert_eq!(
                require(scope, text).map(|_| ()),
                Err(EvalError::InvalidToggleSyntax {
                    text: stripped.to_string()
                }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn unknown_function() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        assert_eq!(
            require(scope, "xor(true, false)").map(|_| ()),
            Err(EvalError::UnknownFunction {
                name: "xor".to_string()
            })
        );
    }

    #[test]
    fn argument_errors_propagate() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        assert_eq!(
            require(scope, "gt(1)").map(|_| ()),
            Err(EvalError::ArityMismatch {
                function: "gt".to_string(),
                arity: Arity::exactly(2),
                found: 1,
            })
        );
        assert_eq!(
            require(scope, "between(1, 2)").map(|_| ()),
            Err(EvalError::ArityMismatch {
                function: "between".to_string(),
                arity: Arity::exactly(3),
                found: 2,
            })
        );
        assert_eq!(
            require(scope, "gt(1, fuel)").map(|_| ()),
            Err(EvalError::InvalidExpression {
                text: "fuel".to_string()
            })
        );
        assert_eq!(
            require(scope, "and(true, 2)").map(|_| ()),
            Err(EvalError::InvalidToggleSyntax {
                text: "2".to_string()
            })
        );
    }

    #[test]
    fn try_parse_returns_none_on_error() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner);

        assert!(try_parse(scope, "nonsense(").is_none());
        assert!(try_parse(scope, "or(false, true)").is_some_and(|toggle| toggle.toggle_status()));
    }

    #[test]
    fn negation_depth_is_bounded() {
        let part = TestPart::new();
        let owner = TestModule::anonymous();
        let scope = Scope::new(&part, &owner).with_config(Config::new().with_max_depth(4));

        assert!(status(scope, "!!!!true"));
        assert!(!status(scope, "!!!true"));
        assert_eq!(
            require(scope, "!!!!!true").map(|_| ()),
            Err(EvalError::TooDeep { max_depth: 4 })
        );
    }
}
