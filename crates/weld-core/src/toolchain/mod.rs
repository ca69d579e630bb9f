//! # Weld Core Toolchain
//!
//! The build toolchain is an external collaborator. [`Toolchain`] names the
//! three things the pipeline needs from it, so builds can run against the
//! real [`GoToolchain`] or a test double.
use std::fmt::{self, Debug};
use std::path::Path;

use crate::codegen::Replacement;
use crate::kernel::error::Result;
use crate::stage_manager::context::VersionInfo;

pub mod error;
pub mod go;

pub use error::ToolchainError;
pub use go::GoToolchain;

/// Operations the build pipeline performs through the external toolchain.
/// Every call runs with `workspace` as its working directory and blocks
/// until the toolchain finishes.
pub trait Toolchain: Debug {
    /// Get the name of this toolchain
    fn name(&self) -> &str;

    /// Record a module replacement directive in the workspace manifest
    fn apply_replacement(&self, workspace: &Path, replacement: &Replacement) -> Result<()>;

    /// Lock dependencies and vendor them into the workspace
    fn resolve_dependencies(&self, workspace: &Path) -> Result<()>;

    /// Compile the workspace into `output`, injecting `constants`
    fn compile(&self, workspace: &Path, output: &Path, constants: &LinkConstants) -> Result<()>;
}

/// Named string constants injected into a package at link time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConstants {
    package: String,
    values: Vec<(String, String)>,
}

impl LinkConstants {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            values: Vec::new(),
        }
    }

    /// The Version, Revision and Time constants of a build
    pub fn from_version_info(package: impl Into<String>, info: &VersionInfo) -> Self {
        Self::new(package)
            .with("Version", &info.version)
            .with("Revision", &info.revision)
            .with("Time", &info.time)
    }

    pub fn with(mut self, symbol: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((symbol.into(), value.into()));
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }

    /// Render as linker flags, e.g. `-X pkg.Version=1.0.0 -X pkg.Time=...`
    pub fn ldflags(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LinkConstants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "-X {}.{}={}", self.package, symbol, value)?;
        }
        Ok(())
    }
}
