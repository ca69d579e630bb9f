//! # Weld Core Plugin System
//!
//! Plugins are external modules linked statically into the composed binary
//! through side-effect imports. This module turns the caller's descriptors
//! into structured [`PluginSpec`]s and computes the import path each plugin
//! is pulled in under.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`descriptor`]**: best-effort parsing of `<module>[@<version>][=<localPath>]`.
//! - **[`version`]**: semantic import versioning of module paths.
pub mod descriptor;
pub mod version;

pub use descriptor::PluginSpec;
pub use version::{clean_module_path, versioned_module_path};

// Test module declaration
#[cfg(test)]
mod tests;
