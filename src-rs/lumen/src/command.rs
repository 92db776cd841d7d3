use clap::{Parser, Subcommand, ValueEnum};
use lumen_parser::Config;

/// Lumen indicator expression CLI
#[derive(Parser)]
#[command(name = "lumen")]
#[command(version, about = "Lumen indicator expression tooling", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print how a configuration string splits into calls and arguments
    Parse {
        /// The configuration string
        #[arg(value_name = "TEXT")]
        text: String,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Evaluate a configuration string against modules described on the
    /// command line
    Eval {
        /// The configuration string
        #[arg(value_name = "TEXT")]
        text: String,

        /// How to read the configuration string
        #[arg(long = "as", value_enum, default_value_t = ExpressionKind::Toggle)]
        kind: ExpressionKind,

        /// A module of the part, written
        /// `id[:capability=value][,field=value[@static|@dynamic|@hidden]]...`
        #[arg(long = "module", value_name = "SPEC")]
        modules: Vec<String>,

        /// Identifier of the module that owns the string; defaults to the
        /// first module
        #[arg(long)]
        owner: Option<String>,

        /// Deepest nesting of calls and `!` prefixes accepted
        #[arg(long, default_value_t = Config::DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// List the functions available in expressions
    Functions {
        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpressionKind {
    /// A number computed once
    Static,
    /// A number read live from the part
    Scalar,
    /// An on/off state
    Toggle,
    /// A color
    Color,
}

impl Commands {
    /// Returns `true` if the command was asked not to style its output.
    pub const fn no_colors(&self) -> bool {
        match self {
            Self::Parse { no_colors, .. }
            | Self::Eval { no_colors, .. }
            | Self::Functions { no_colors } => *no_colors,
        }
    }
}
