//! The numeric functions shared by the static and scalar evaluators.

use std::fmt;

use indexmap::IndexMap;

use crate::EvalError;

/// A numeric function callable from a configuration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sum of two or more arguments
    Add,
    /// First argument minus the second
    Subtract,
    /// Product of two or more arguments
    Multiply,
    /// First argument divided by the second, with IEEE semantics
    Divide,
    /// Smallest of two or more arguments
    Minimum,
    /// Largest of two or more arguments
    Maximum,
    /// First argument clamped to the range given by the second and third
    Range,
    /// Square root of the single argument
    Sqrt,
}

/// Every name a numeric function may be called by, aliases included.
#[must_use]
pub fn builtin_functions() -> IndexMap<&'static str, Function> {
    Function::ALL
        .into_iter()
        .flat_map(|function| function.names().iter().map(move |name| (*name, function)))
        .collect()
}

impl Function {
    /// Every numeric function.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Minimum,
        Self::Maximum,
        Self::Range,
        Self::Sqrt,
    ];

    /// Looks up a function by any of its names.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.names().contains(&name))
    }

    /// The canonical name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Range => "range",
            Self::Sqrt => "sqrt",
        }
    }

    /// Every name this function may be called by, canonical name first.
    #[must_use]
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            Self::Add => &["add", "sum", "plus"],
            Self::Subtract => &["subtract", "minus", "difference"],
            Self::Multiply => &["multiply", "product", "times"],
            Self::Divide => &["divide", "quotient"],
            Self::Minimum => &["minimum", "min"],
            Self::Maximum => &["maximum", "max"],
            Self::Range => &["range", "clamp"],
            Self::Sqrt => &["sqrt"],
        }
    }

    /// The number of arguments this function accepts.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Multiply | Self::Minimum | Self::Maximum => Arity::at_least(2),
            Self::Subtract | Self::Divide => Arity::exactly(2),
            Self::Range => Arity::exactly(3),
            Self::Sqrt => Arity::exactly(1),
        }
    }

    /// A short description of what the function computes.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "sum of the arguments",
            Self::Subtract => "first argument minus the second",
            Self::Multiply => "product of the arguments",
            Self::Divide => "first argument divided by the second",
            Self::Minimum => "smallest argument",
            Self::Maximum => "largest argument",
            Self::Range => "first argument clamped between the second and third",
            Self::Sqrt => "square root of the argument",
        }
    }

    /// Applies the function to already evaluated arguments.
    ///
    /// The arguments must satisfy [`Function::arity`]. Missing arguments read
    /// as NaN.
    pub fn apply(self, arguments: impl IntoIterator<Item = f64>) -> f64 {
        let mut arguments = arguments.into_iter();
        match self {
            Self::Add => arguments.sum(),
            Self::Multiply => arguments.product(),
            Self::Minimum => arguments.reduce(f64::min).unwrap_or(f64::NAN),
            Self::Maximum => arguments.reduce(f64::max).unwrap_or(f64::NAN),
            Self::Subtract => {
                let [a, b] = take(&mut arguments);
                a - b
            }
            Self::Divide => {
                let [a, b] = take(&mut arguments);
                a / b
            }
            Self::Range => {
                let [value, min, max] = take(&mut arguments);
                if value < min {
                    min
                } else if value > max {
                    max
                } else {
                    value
                }
            }
            Self::Sqrt => {
                let [value] = take(&mut arguments);
                value.sqrt()
            }
        }
    }
}

fn take<const N: usize>(arguments: &mut impl Iterator<Item = f64>) -> [f64; N] {
    std::array::from_fn(|_| arguments.next().unwrap_or(f64::NAN))
}

/// How many arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    /// Exactly `count` arguments.
    #[must_use]
    pub const fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    /// `min` or more arguments.
    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Between `min` and `max` arguments, inclusive.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Returns `true` if `count` arguments are accepted.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self.max {
            Some(max) => self.min <= count && count <= max,
            None => self.min <= count,
        }
    }

    /// Checks `found` arguments passed to `function` against this arity.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::ArityMismatch`] if the count is not accepted.
    pub fn check(self, function: &str, found: usize) -> Result<(), EvalError> {
        if self.accepts(found) {
            Ok(())
        } else {
            Err(EvalError::ArityMismatch {
                function: function.to_string(),
                arity: self,
                found,
            })
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |count: usize| if count == 1 { "" } else { "s" };
        match self.max {
            Some(max) if max == self.min => write!(f, "exactly {max} argument{}", plural(max)),
            Some(max) => write!(f, "{} to {max} arguments", self.min),
            None => write!(f, "at least {} argument{}", self.min, plural(self.min)),
        }
    }
}
