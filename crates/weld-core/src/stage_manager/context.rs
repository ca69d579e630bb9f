use std::path::{Path, PathBuf};

use crate::assets::AssetSource;
use crate::config::BuildConfig;
use crate::plugin_system::PluginSpec;
use crate::stage_manager::BuildState;
use crate::toolchain::Toolchain;

/// Execution mode for stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Live mode - actually execute operations
    Live,
    /// Dry run mode - describe operations without executing them
    DryRun,
}

impl ExecutionMode {
    /// Check if this is dry run mode
    pub fn is_dry_run(&self) -> bool {
        matches!(self, ExecutionMode::DryRun)
    }

    /// Check if this is live mode
    pub fn is_live(&self) -> bool {
        matches!(self, ExecutionMode::Live)
    }
}

/// Version metadata stamped into the output binary. Values are opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub revision: String,
    pub time: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>, revision: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            revision: revision.into(),
            time: time.into(),
        }
    }
}

/// Everything one build works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMaterial {
    /// Plugins in input order
    pub plugins: Vec<PluginSpec>,
    pub output: PathBuf,
    /// Ephemeral directory owned by this build
    pub workspace: PathBuf,
    /// Local source replacing the whole base module
    pub base_module_replacement: Option<PathBuf>,
    pub version_info: VersionInfo,
}

/// Context provided to stages during execution
pub struct StageContext<'a> {
    /// The execution mode
    pub mode: ExecutionMode,

    pub material: BuildMaterial,

    config: &'a BuildConfig,
    toolchain: &'a dyn Toolchain,
    assets: &'a dyn AssetSource,

    state: BuildState,
    failed_at: Option<BuildState>,
}

impl<'a> StageContext<'a> {
    fn new(
        mode: ExecutionMode,
        material: BuildMaterial,
        config: &'a BuildConfig,
        toolchain: &'a dyn Toolchain,
        assets: &'a dyn AssetSource,
    ) -> Self {
        Self {
            mode,
            material,
            config,
            toolchain,
            assets,
            state: BuildState::Init,
            failed_at: None,
        }
    }

    /// Create a new context in live mode
    pub fn new_live(
        material: BuildMaterial,
        config: &'a BuildConfig,
        toolchain: &'a dyn Toolchain,
        assets: &'a dyn AssetSource,
    ) -> Self {
        Self::new(ExecutionMode::Live, material, config, toolchain, assets)
    }

    /// Create a new context in dry run mode
    pub fn new_dry_run(
        material: BuildMaterial,
        config: &'a BuildConfig,
        toolchain: &'a dyn Toolchain,
        assets: &'a dyn AssetSource,
    ) -> Self {
        Self::new(ExecutionMode::DryRun, material, config, toolchain, assets)
    }

    pub fn config(&self) -> &'a BuildConfig {
        self.config
    }

    pub fn toolchain(&self) -> &'a dyn Toolchain {
        self.toolchain
    }

    pub fn assets(&self) -> &'a dyn AssetSource {
        self.assets
    }

    pub fn workspace(&self) -> &Path {
        &self.material.workspace
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// The stage state that was active when the build failed
    pub fn failed_at(&self) -> Option<BuildState> {
        self.failed_at
    }

    /// Check if dry run mode is active
    pub fn is_dry_run(&self) -> bool {
        self.mode.is_dry_run()
    }

    pub(crate) fn enter(&mut self, state: BuildState) {
        self.state = state;
    }

    pub(crate) fn fail(&mut self) {
        self.failed_at = Some(self.state);
        self.state = BuildState::Failed;
    }

    pub(crate) fn finish(&mut self) {
        self.state = BuildState::Done;
    }
}
