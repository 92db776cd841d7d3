/// Additional information attached to an error message.
///
/// Evaluators use this to tell the user what the grammar expected, so that a
/// misconfigured indicator can be fixed without reading the source.
///
/// # Examples
///
/// ```rust
/// use lumen_shared::error::Context;
///
/// let note = Context::Note("`between` bounds are evaluated once".to_string());
/// let help = Context::Help("`gt` takes exactly 2 arguments".to_string());
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary details about the error, such as which module was
    /// searched or which subexpression failed.
    Note(String),

    /// An actionable suggestion for fixing the configuration string.
    Help(String),
}
