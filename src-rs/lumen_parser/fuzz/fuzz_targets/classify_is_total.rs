#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_parser::{Config, ConfigValue, parse_number};

fuzz_target!(|text: &str| {
    let value = ConfigValue::classify(text, Config::default());

    if let Some(number) = parse_number(text) {
        assert!(
            matches!(value, ConfigValue::Literal(literal) if literal.to_bits() == number.to_bits()),
            "{text:?} parses as {number} but was classified as {value:?}",
        );
    }
});
