//! # Weld Core Assets
//!
//! Static assets of the base application, exposed as a read-only tree and
//! copied into the build workspace before compilation.

pub mod error;
pub mod installer;
pub mod source;

pub use error::AssetError;
pub use installer::install_assets;
pub use source::{AssetEntry, AssetKind, AssetSource, DirAssetSource, MemoryAssetSource};
