use crate::error::Context;

/// Trait for types that can be converted to Lumen error messages.
///
/// Library crates implement this for their error enums so that front ends
/// (the CLI, or a host's log window) can render them uniformly.
pub trait AsLumenError {
    /// Returns the primary error message.
    ///
    /// This should be a concise description of what went wrong, without a
    /// trailing period.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
