//! Command line tool for checking Lumen indicator expressions

use std::process::ExitCode;

use anstream::println;
use clap::Parser;
use lumen_eval::{EvalError, Scope, colors, scalars, statics, toggles};
use lumen_parser::{Config, ConfigValue, parse_color};
use lumen_part::Color;
use lumen_shared::error::{AsLumenError, Context, LumenError};
use tracing_subscriber::EnvFilter;

use crate::{
    command::{CliCommand, Commands, ExpressionKind},
    host::CliPart,
};

mod command;
mod host;
mod print_error;
mod print_functions;
mod print_tree;
mod print_value;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();
    let no_colors = cli.command.no_colors();

    if no_colors {
        anstream::ColorChoice::Never.write_global();
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_colors)
        .init();

    match cli.command {
        Commands::Parse {
            text,
            print_debug,
            no_colors: _,
        } => {
            let result = describe(&text, print_debug);
            report(result, print_debug)
        }
        Commands::Eval {
            text,
            kind,
            modules,
            owner,
            max_depth,
            print_debug,
            no_colors: _,
        } => {
            let config = Config::new().with_max_depth(max_depth);
            let result = evaluate(&text, kind, &modules, owner.as_deref(), config, print_debug);
            report(result, print_debug)
        }
        Commands::Functions { no_colors: _ } => {
            print_functions::print();
            ExitCode::SUCCESS
        }
    }
}

fn report(result: Result<(), LumenError>, print_debug: bool) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error::print(&error, print_debug);
            ExitCode::FAILURE
        }
    }
}

/// Prints what `text` tokenizes to.
fn describe(text: &str, print_debug: bool) -> Result<(), LumenError> {
    let config = Config::new();

    if let Some(channels) = parse_color(text) {
        print_value::print_color(Color::from_rgba8(channels));
        return Ok(());
    }

    match ConfigValue::classify(text, config) {
        ConfigValue::Expression(expression) if print_debug => println!("{expression:#?}"),
        ConfigValue::Expression(expression) => print_tree::print(&expression, config),
        ConfigValue::Literal(value) => println!("number {value}"),
        ConfigValue::Reference(identifier) => println!("identifier `{identifier}`"),
        ConfigValue::Empty => return Err(LumenError::from_error(&NotACall::Empty, text)),
        ConfigValue::Unrecognized(stripped) => {
            return Err(LumenError::from_error(&NotACall::Unrecognized, stripped));
        }
    }

    Ok(())
}

/// Why `lumen parse` could not describe its input.
enum NotACall {
    Empty,
    Unrecognized,
}

impl AsLumenError for NotACall {
    fn message(&self) -> String {
        match self {
            Self::Empty => "the configuration string is empty".to_string(),
            Self::Unrecognized => "not a function call".to_string(),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Empty => vec![],
            Self::Unrecognized => vec![
                Context::Note("run with `RUST_LOG=lumen_parser=trace` to see why".to_string()),
                Context::Help(
                    "calls are written `name(argument, ...)` with balanced parentheses".to_string(),
                ),
            ],
        }
    }
}

/// Evaluates `text` against the modules in `specs` and prints the result.
fn evaluate(
    text: &str,
    kind: ExpressionKind,
    specs: &[String],
    owner: Option<&str>,
    config: Config,
    print_debug: bool,
) -> Result<(), LumenError> {
    let spec_error = |error: host::SpecError| LumenError::from_error(&error, error.source_text());
    let eval_error = |error: EvalError| LumenError::from_error(&error, text);

    let part = CliPart::from_specs(specs).map_err(spec_error)?;
    let owner = part.owner(owner).map_err(spec_error)?;
    let scope = Scope::new(&part, &*owner).with_config(config);

    if print_debug {
        print_value::print_fields(&*owner);
    }

    match kind {
        ExpressionKind::Static => {
            let value = statics::parse(scope, text).map_err(eval_error)?;
            print_value::print_number(value);
        }
        ExpressionKind::Scalar => {
            let scalar = scalars::parse(scope, text).map_err(eval_error)?;
            if print_debug {
                println!("{scalar:#?}");
            }
            print_value::print_number(scalar.scalar_value());
        }
        ExpressionKind::Toggle => {
            let toggle = toggles::require(scope, text).map_err(eval_error)?;
            if print_debug {
                println!("{toggle:#?}");
            }
            print_value::print_toggle(toggle.toggle_status());
        }
        ExpressionKind::Color => {
            let source = colors::parse(scope, text).map_err(eval_error)?;
            if print_debug {
                println!("{source:#?}");
            }
            print_value::print_color(source.output_color());
        }
    }

    Ok(())
}
