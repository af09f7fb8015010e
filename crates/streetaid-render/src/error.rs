use thiserror::Error;

/// Errors raised while rendering a template into the document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template element is registered under the given id.
    #[error("template element not found: {0}")]
    TemplateMissing(String),

    /// No output element is registered under the given id.
    #[error("output element not found: {0}")]
    OutputMissing(String),

    /// The template source is malformed.
    #[error("template syntax error: {detail}")]
    Syntax { detail: String },
}
