/// Configuration for parsing Lumen expressions.
///
/// The tokenizer carries this alongside its input; the evaluators read
/// `max_depth` to bound how deeply calls and `!` prefixes may nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The deepest nesting of function calls and `!` prefixes accepted
    pub max_depth: usize,
}

impl Config {
    /// The nesting limit used by [`Config::new`].
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Creates a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Returns a copy of this configuration with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
