//! # Weld Core Toolchain Errors
//!
//! [`ToolchainError`] covers the two ways an external toolchain command can
//! fail: the process never starts, or it exits unsuccessfully. The
//! command's own diagnostics have already been streamed to the caller's
//! terminal by then, so the error only names the command.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' exited with {}", .exit_code.map(|c| format!("status {}", c)).unwrap_or_else(|| "a signal".into()))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
    },
}
