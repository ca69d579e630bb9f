//! # Weld Core Kernel Errors
//!
//! Defines the crate-wide error type.
//!
//! [`Error`] aggregates the subsystem errors ([`ToolchainError`],
//! [`AssetError`], [`ConfigError`]) through `#[from]` conversions, so every
//! stage of the build pipeline can return the same [`Result`] and the
//! orchestrator can hand the first failure back to the caller untouched.
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::assets::error::AssetError;
use crate::config::ConfigError;
use crate::toolchain::error::ToolchainError;

/// Error type for every fallible operation in the build pipeline
#[derive(Debug, ThisError)]
pub enum Error {
    /// Filesystem failure with the operation and path that caused it
    #[error("I/O error during operation '{operation}' on path '{}': {source}", .path.display())]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External build toolchain failure
    #[error("Toolchain error: {0}")]
    Toolchain(#[from] ToolchainError),

    /// Asset bundle failure
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration loading failure
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failure while encoding generated content
    #[error("Serialization to '{format}' failed: {source}")]
    Serialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl Error {
    /// Wrap an I/O error with the operation and path it happened on
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            source,
            operation: operation.into(),
            path: path.into(),
        }
    }

    pub fn serialization<E>(format: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Serialization {
            format: format.into(),
            source: Box::new(source),
        }
    }
}
