use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use crate::codegen::Replacement;
use crate::kernel::constants;
use crate::kernel::error::Result;
use crate::toolchain::error::ToolchainError;
use crate::toolchain::{LinkConstants, Toolchain};

/// The Go toolchain, driven through its command-line subcommands.
///
/// Child processes inherit this process's stdout and stderr, so their
/// diagnostics reach the user as they are produced.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    program: PathBuf,
}

impl GoToolchain {
    pub fn new() -> Self {
        Self::with_program(constants::DEFAULT_TOOLCHAIN_PROGRAM)
    }

    /// Use a specific executable instead of `go` from `PATH`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Render a command line for logs and error messages
    fn render(&self, args: &[OsString]) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(args.iter().map(|a| a.as_os_str()))
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run one subcommand in `workspace` and wait for it
    fn run(&self, workspace: &Path, args: Vec<OsString>) -> Result<()> {
        let command = self.render(&args);
        info!("[build] {}", command);

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(workspace)
            .status()
            .map_err(|source| ToolchainError::Spawn { command: command.clone(), source })?;

        if !status.success() {
            return Err(ToolchainError::CommandFailed {
                command,
                exit_code: status.code(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new()
    }
}

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

impl Toolchain for GoToolchain {
    fn name(&self) -> &str {
        "go"
    }

    fn apply_replacement(&self, workspace: &Path, replacement: &Replacement) -> Result<()> {
        let directive = replacement.to_string();
        self.run(workspace, os_args(&["mod", "edit", "-replace", &directive]))
    }

    fn resolve_dependencies(&self, workspace: &Path) -> Result<()> {
        self.run(workspace, os_args(&["mod", "tidy"]))?;
        self.run(workspace, os_args(&["mod", "vendor"]))
    }

    fn compile(&self, workspace: &Path, output: &Path, constants: &LinkConstants) -> Result<()> {
        let mut args = os_args(&["build", "-ldflags", &constants.ldflags(), "-o"]);
        args.push(output.as_os_str().to_os_string());
        args.push(OsString::from("."));
        self.run(workspace, args)
    }
}
