pub mod context;
pub mod core_stages;
pub mod pipeline;

use crate::kernel::error::Result;
use std::fmt;

/// Where a build currently is. Stages run in declaration order; `Failed`
/// is reachable from any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    Init,
    GenerateEntryPoint,
    ResolveDependencies,
    InstallAssets,
    MergeResources,
    Compile,
    Cleanup,
    Done,
    Failed,
}

impl BuildState {
    /// Whether no further stage will run
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildState::Done | BuildState::Failed)
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildState::Init => "init",
            BuildState::GenerateEntryPoint => "generate entry point",
            BuildState::ResolveDependencies => "resolve dependencies",
            BuildState::InstallAssets => "install assets",
            BuildState::MergeResources => "merge resources",
            BuildState::Compile => "compile",
            BuildState::Cleanup => "cleanup",
            BuildState::Done => "done",
            BuildState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Core trait that all build stages implement
pub trait Stage {
    /// The unique identifier of the stage
    fn id(&self) -> &str;

    /// The human-readable name of the stage
    fn name(&self) -> &str;

    /// The description of what this stage does
    fn description(&self) -> &str;

    /// The build state entered while this stage runs
    fn state(&self) -> BuildState;

    /// Execute the stage with the given context
    fn execute(&self, context: &mut StageContext<'_>) -> Result<()>;

    /// Generate a description of what this stage would do in dry run mode
    fn dry_run_description(&self, _context: &StageContext<'_>) -> String {
        format!("Would execute stage: {}", self.name())
    }
}

// Re-export important types
pub use context::{BuildMaterial, ExecutionMode, StageContext, VersionInfo};
pub use pipeline::StagePipeline;

// Test module declaration
#[cfg(test)]
mod tests;
