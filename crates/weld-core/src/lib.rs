//! # Weld Core
//!
//! Builds a new application binary from a fixed base application plus a
//! caller-chosen set of plugin modules.
pub mod assets;
pub mod codegen;
pub mod config;
pub mod i18n;
pub mod kernel;
pub mod plugin_system;
pub mod stage_manager;
pub mod toolchain;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key public types for the binary
pub use assets::{AssetSource, DirAssetSource, MemoryAssetSource};
pub use config::BuildConfig;
pub use kernel::error::Error as KernelError;
pub use kernel::{BinaryBuilder, BuildFailure, BuildReport, BuildRequest};
pub use plugin_system::PluginSpec;
pub use stage_manager::{BuildState, VersionInfo};
pub use toolchain::{GoToolchain, Toolchain};
