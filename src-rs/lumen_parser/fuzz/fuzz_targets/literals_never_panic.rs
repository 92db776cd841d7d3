#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_parser::{
    Config, ConfigValue, ParsedExpression, parse_color, parse_identifier, parse_number,
};

fuzz_target!(|text: &str| {
    let color = parse_color(text);
    let identifier = parse_identifier(text);
    let number = parse_number(text);

    assert!(
        !(color.is_some() && identifier.is_some()),
        "{text:?} should not be both a color and an identifier",
    );
    assert!(
        !(color.is_some() && number.is_some()),
        "{text:?} should not be both a color and a number",
    );

    let _ = ParsedExpression::try_parse(text);
    let _ = ConfigValue::classify(text, Config::new().with_max_depth(1));
});
