//! Error taxonomy for the engine's contracts

use thiserror::Error;

/// Errors arising from tool registration, validation, or dispatch.
///
/// None of these abort an agent run: the dispatcher folds them into
/// error-marker observations so the model sees what went wrong on the
/// next turn. `DuplicateTool` is the exception, surfacing at registry
/// construction time.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with the same name is already registered.
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),

    /// The call names a tool not present in the registry. Checked
    /// before argument validation.
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    /// The call's arguments do not satisfy the tool's declared signature.
    #[error("invalid arguments for '{tool}': parameter '{parameter}' {reason}")]
    InvalidArguments {
        tool: String,
        parameter: String,
        reason: String,
    },

    /// The tool body returned an error.
    #[error("tool '{tool}' failed: {message}")]
    Execution { tool: String, message: String },
}

/// Fatal errors for an agent run. Only a failed model invocation
/// surfaces to the caller unrecovered.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("model invocation failed: {0:#}")]
    Model(#[source] anyhow::Error),
}
