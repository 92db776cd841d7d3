//! Tree rendering of tokenized function calls

use anstream::println;
use lumen_parser::{Config, ParsedExpression};
use owo_colors::OwoColorize;

use crate::stylesheet;

/// Prints `expression` with every argument that is itself a call expanded
/// beneath it.
pub fn print(expression: &ParsedExpression, config: Config) {
    let tree = tree_to_string(expression, config);
    println!("{tree}");
}

/// Renders the tree. Calls nested deeper than `config.max_depth` are shown
/// as text.
fn tree_to_string(expression: &ParsedExpression, config: Config) -> String {
    let mut lines = vec![function_label(expression)];
    push_arguments(expression, config, 1, "", &mut lines);
    lines.join("\n")
}

fn push_arguments(
    expression: &ParsedExpression,
    config: Config,
    depth: usize,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    let last_index = expression.argument_count().saturating_sub(1);

    for (index, argument) in expression.arguments().iter().enumerate() {
        let (branch, indent) = if index == last_index {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let branch = stylesheet::TREE_BRANCH.style(branch);

        let call = (depth < config.max_depth)
            .then(|| ParsedExpression::try_parse_with(argument, config))
            .flatten();

        match call {
            Some(call) => {
                lines.push(format!("{prefix}{branch}{}", function_label(&call)));
                let prefix = format!("{prefix}{}", stylesheet::TREE_BRANCH.style(indent));
                push_arguments(&call, config, depth + 1, &prefix, lines);
            }
            None if argument.is_empty() => {
                lines.push(format!("{prefix}{branch}{}", "(empty)".dimmed()));
            }
            None => lines.push(format!("{prefix}{branch}{argument}")),
        }
    }
}

fn function_label(expression: &ParsedExpression) -> String {
    stylesheet::FUNCTION_NAME
        .style(expression.function_name())
        .to_string()
}
