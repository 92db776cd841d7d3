//! Errors for the Lumen indicator expression engine

mod context;
mod traits;

pub use context::Context;
pub use traits::AsLumenError;

/// Unified error representation for Lumen
///
/// This struct represents errors in a format suitable for display to users.
/// It keeps the configuration string that failed, a human-readable message,
/// and any context the originating error provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumenError {
    /// The configuration string that was being parsed
    source: String,
    /// Human-readable error message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl LumenError {
    /// Creates a new `LumenError` from an error that implements `AsLumenError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lumen_shared::error::{AsLumenError, LumenError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsLumenError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("unknown function `foo`".to_string());
    /// let lumen_error = LumenError::from_error(&error, "foo(1)");
    /// assert_eq!(lumen_error.message(), "unknown function `foo`");
    /// assert_eq!(lumen_error.source(), "foo(1)");
    /// ```
    pub fn from_error(error: &impl AsLumenError, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the configuration string the error was reported against
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
