//! # Weld Core Asset Errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}
