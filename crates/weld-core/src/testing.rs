//! Test doubles shared by the unit tests of several modules
use std::cell::RefCell;
use std::rc::Rc;
use std::path::{Path, PathBuf};

use crate::codegen::Replacement;
use crate::kernel::error::Result;
use crate::toolchain::{LinkConstants, Toolchain, ToolchainError};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainOp {
    Replace,
    Resolve,
    Compile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainCall {
    Replace(String),
    Resolve,
    Compile { output: PathBuf, ldflags: String },
}

/// Toolchain that records every call instead of running anything.
/// Clones share one call log.
///
/// Resolving writes the configured vendored files into the workspace;
/// compiling writes a placeholder output file.
#[derive(Debug, Clone, Default)]
pub struct RecordingToolchain {
    calls: Rc<RefCell<Vec<ToolchainCall>>>,
    fail_on: Option<ToolchainOp>,
    vendored_files: Vec<(String, String)>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, op: ToolchainOp) -> Self {
        self.fail_on = Some(op);
        self
    }

    /// File written relative to the workspace when dependencies are resolved
    pub fn with_vendored_file(mut self, relative: &str, contents: &str) -> Self {
        self.vendored_files.push((relative.to_string(), contents.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<ToolchainCall> {
        self.calls.borrow().clone()
    }

    fn check(&self, op: ToolchainOp) -> Result<()> {
        if self.fail_on == Some(op) {
            return Err(ToolchainError::CommandFailed {
                command: format!("recording {:?}", op),
                exit_code: Some(1),
            }
            .into());
        }
        Ok(())
    }
}

impl Toolchain for RecordingToolchain {
    fn name(&self) -> &str {
        "recording"
    }

    fn apply_replacement(&self, _workspace: &Path, replacement: &Replacement) -> Result<()> {
        self.calls.borrow_mut().push(ToolchainCall::Replace(replacement.to_string()));
        self.check(ToolchainOp::Replace)
    }

    fn resolve_dependencies(&self, workspace: &Path) -> Result<()> {
        self.calls.borrow_mut().push(ToolchainCall::Resolve);
        self.check(ToolchainOp::Resolve)?;
        for (relative, contents) in &self.vendored_files {
            utils::write_file(workspace.join(relative), contents)?;
        }
        Ok(())
    }

    fn compile(&self, _workspace: &Path, output: &Path, constants: &LinkConstants) -> Result<()> {
        self.calls.borrow_mut().push(ToolchainCall::Compile {
            output: output.to_path_buf(),
            ldflags: constants.ldflags(),
        });
        self.check(ToolchainOp::Compile)?;
        utils::write_file(output, "binary")
    }
}
