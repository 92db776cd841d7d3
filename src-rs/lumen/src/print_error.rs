//! Error message formatting and display
//
//       error: `add` expects at least 2 arguments but was given 1
//        --> add(1)
//         = note: `add` is one of the names add, sum, plus

use anstream::eprintln;
use lumen_shared::error::{Context, LumenError};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints a formatted error message to standard error
pub fn print(error: &LumenError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(error);
        eprintln!("{error_string}");
    }
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &LumenError) -> String {
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, error.message());
    let source_line = get_source_line(error.source());
    let context_lines = error.context().iter().map(get_context_line);

    let mut lines = vec![message_line, source_line];
    lines.extend(context_lines);
    lines.join("\n")
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

/// Formats the line that shows the failing configuration string
fn get_source_line(source: &str) -> String {
    //  --> <source>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    format!(" {arrow} {source}")
}

fn get_context_line(context: &Context) -> String {
    //   = note: <message>
    let (equals, message_line) = match context {
        Context::Note(message) => (
            stylesheet::NOTE_COLOR.bold().style("="),
            get_message_line("note", stylesheet::NOTE_COLOR, message),
        ),
        Context::Help(message) => (
            stylesheet::HELP_COLOR.bold().style("="),
            get_message_line("help", stylesheet::HELP_COLOR, message),
        ),
    };
    format!("  {equals} {message_line}")
}
