//! Printing of evaluated expressions

use anstream::println;
use lumen_part::{Color, FieldTable, Module};

use crate::stylesheet;

/// Prints a number.
pub fn print_number(value: f64) {
    println!("{value}");
}

/// Prints a toggle status as `on` or `off`.
pub fn print_toggle(status: bool) {
    println!("{}", toggle_to_string(status));
}

/// Prints a color as hex followed by its channels.
pub fn print_color(color: Color) {
    println!("{}", color_to_string(color));
}

/// Prints the fields `owner` registers, for `--print-debug`.
pub fn print_fields(owner: &dyn Module) {
    println!("{}", fields_to_string(owner));
}

fn toggle_to_string(status: bool) -> String {
    if status {
        stylesheet::TOGGLE_ON.style("on").to_string()
    } else {
        stylesheet::TOGGLE_OFF.style("off").to_string()
    }
}

fn color_to_string(color: Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    format!(
        "#{r:02x}{g:02x}{b:02x}{a:02x} (r={}, g={}, b={}, a={})",
        color.r, color.g, color.b, color.a
    )
}

fn fields_to_string(owner: &dyn Module) -> String {
    let name = owner.identifier().unwrap_or("(anonymous)");
    let Some(fields) = owner.fields().filter(|fields| !fields.is_empty()) else {
        return format!("owner {name} has no fields");
    };

    let mut lines = vec![format!("owner {name} has {}:", field_count(fields))];
    lines.extend(
        fields
            .iter()
            .map(|(field, value)| format!("  {field} = {} ({})", value.read(), value.exposure())),
    );
    lines.join("\n")
}

fn field_count(fields: &FieldTable) -> String {
    match fields.len() {
        1 => "1 field".to_string(),
        count => format!("{count} fields"),
    }
}

#[cfg(test)]
mod tests {
    use anstream::adapter::strip_str;
    use lumen_part::FieldExposure;

    use super::*;

    #[test]
    fn toggles() {
        assert_eq!(strip_str(&toggle_to_string(true)).to_string(), "on");
        assert_eq!(strip_str(&toggle_to_string(false)).to_string(), "off");
    }

    #[test]
    fn colors() {
        assert_eq!(
            color_to_string(Color::new(1.0, 0.0, 0.0, 1.0)),
            "#ff0000ff (r=1, g=0, b=0, a=1)"
        );
        assert_eq!(
            color_to_string(Color::new(0.0, 0.0, 0.0, 0.0)),
            "#00000000 (r=0, g=0, b=0, a=0)"
        );
    }

    #[derive(Debug)]
    struct Owner(Option<FieldTable>);

    impl Module for Owner {
        fn identifier(&self) -> Option<&str> {
            Some("m1")
        }

        fn fields(&self) -> Option<&FieldTable> {
            self.0.as_ref()
        }
    }

    #[test]
    fn fields_in_registration_order() {
        let owner = Owner(Some(
            FieldTable::new()
                .with("threshold", FieldExposure::Static, || 5.0)
                .with("rate", FieldExposure::Dynamic, || 2.5),
        ));
        assert_eq!(
            fields_to_string(&owner),
            "owner m1 has 2 fields:\n  threshold = 5 (static)\n  rate = 2.5 (dynamic)"
        );
    }

    #[test]
    fn no_fields() {
        assert_eq!(fields_to_string(&Owner(None)), "owner m1 has no fields");
        assert_eq!(
            fields_to_string(&Owner(Some(FieldTable::new()))),
            "owner m1 has no fields"
        );
    }
}
