//! Listing of the functions configuration strings may call

use anstream::println;
use lumen_eval::function::{Arity, Function};

use crate::stylesheet;

/// A function that is not numeric: it reads fields or builds a toggle or
/// color.
struct Builtin {
    names: &'static str,
    arity: Arity,
    description: &'static str,
}

const FIELD_FUNCTIONS: [Builtin; 2] = [
    Builtin {
        names: "static",
        arity: Arity::between(1, 2),
        description: "a static field, read once (optionally of another module)",
    },
    Builtin {
        names: "scalar",
        arity: Arity::between(1, 2),
        description: "a dynamic field, read on every update (optionally of another module)",
    },
];

const TOGGLE_FUNCTIONS: [Builtin; 4] = [
    Builtin {
        names: "and",
        arity: Arity::at_least(1),
        description: "on when every argument is on",
    },
    Builtin {
        names: "or",
        arity: Arity::at_least(1),
        description: "on when any argument is on",
    },
    Builtin {
        names: "gt, lt, ge, le",
        arity: Arity::exactly(2),
        description: "compares a scalar against a static threshold",
    },
    Builtin {
        names: "between",
        arity: Arity::exactly(3),
        description: "on while a scalar lies within two static bounds, inclusive",
    },
];

const COLOR_FUNCTIONS: [Builtin; 1] = [Builtin {
    names: "toggle",
    arity: Arity::between(2, 3),
    description: "the second argument while the toggle is on, else the third (black)",
}];

/// Prints every function, grouped by the kind of expression it belongs to.
pub fn print() {
    println!("numeric:");
    for function in Function::ALL {
        print_line(
            &function.names().join(", "),
            function.arity(),
            function.description(),
        );
    }

    for (heading, functions) in [
        ("fields:", FIELD_FUNCTIONS.as_slice()),
        ("toggle:", TOGGLE_FUNCTIONS.as_slice()),
        ("color:", COLOR_FUNCTIONS.as_slice()),
    ] {
        println!();
        println!("{heading}");
        for builtin in functions {
            print_line(builtin.names, builtin.arity, builtin.description);
        }
    }
}

fn print_line(names: &str, arity: Arity, description: &str) {
    let names = stylesheet::FUNCTION_NAME.style(names);
    println!("  {names} ({arity}): {description}");
}
