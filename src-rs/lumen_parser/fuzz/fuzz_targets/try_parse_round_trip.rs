#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_parser::{ParsedExpression, strip_whitespace};

fuzz_target!(|text: &str| {
    let Some(expression) = ParsedExpression::try_parse(text) else {
        return;
    };

    assert!(
        expression
            .function_name()
            .chars()
            .all(|c| c.is_ascii_alphabetic()),
        "function name ({:?}) should only contain ASCII letters",
        expression.function_name(),
    );

    assert!(
        expression
            .arguments()
            .iter()
            .all(|argument| !argument.chars().any(char::is_whitespace)),
        "arguments ({:?}) should be whitespace-free",
        expression.arguments(),
    );

    let reconstructed = expression.to_string();
    assert_eq!(
        reconstructed,
        strip_whitespace(text),
        "reconstruction should match the stripped input",
    );

    let reparsed = ParsedExpression::try_parse(&reconstructed);
    assert_eq!(
        reparsed.as_ref(),
        Some(&expression),
        "reconstruction ({reconstructed:?}) should parse to the same expression",
    );
});
