use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::assets::AssetSource;
use crate::config::BuildConfig;
use crate::kernel::constants;
use crate::kernel::error::{Error, Result};
use crate::plugin_system::PluginSpec;
use crate::stage_manager::{BuildMaterial, BuildState, StageContext, StagePipeline, VersionInfo};
use crate::toolchain::Toolchain;

/// What to build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
    /// Output binary path. Defaults to `<workspace_parent>/<default_output_name>`.
    pub output: Option<PathBuf>,
    /// Plugin descriptors, `name[@version][=localPath]`
    pub plugins: Vec<String>,
    pub version_info: VersionInfo,
}

impl BuildRequest {
    pub fn new<I, S>(plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plugins: plugins.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_version_info(mut self, version_info: VersionInfo) -> Self {
        self.version_info = version_info;
        self
    }
}

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    /// The removed workspace
    pub workspace: PathBuf,
    pub state: BuildState,
}

/// A build that stopped early. `source` is the error of the stage that failed.
#[derive(Debug, Error)]
#[error("build failed during {state}: {source}")]
pub struct BuildFailure {
    /// The state that was active when the build failed
    pub state: BuildState,
    /// The workspace left on disk, if one was created
    pub workspace: Option<PathBuf>,
    #[source]
    pub source: Error,
}

/// Builds a new binary from the base application plus a set of plugins
#[derive(Debug)]
pub struct BinaryBuilder {
    config: BuildConfig,
    toolchain: Box<dyn Toolchain>,
    assets: Box<dyn AssetSource>,
    pipeline: StagePipeline,
}

impl BinaryBuilder {
    pub fn new(config: BuildConfig, toolchain: Box<dyn Toolchain>, assets: Box<dyn AssetSource>) -> Self {
        Self {
            config,
            toolchain,
            assets,
            pipeline: StagePipeline::standard(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn toolchain(&self) -> &dyn Toolchain {
        self.toolchain.as_ref()
    }

    pub fn pipeline(&self) -> &StagePipeline {
        &self.pipeline
    }

    /// Run every stage in order against a fresh workspace.
    ///
    /// On failure the workspace is left in place and reported in the
    /// returned [`BuildFailure`].
    pub fn build(&self, request: BuildRequest) -> std::result::Result<BuildReport, BuildFailure> {
        info!(
            "{} v{}: building with {} plugin(s)",
            constants::APP_NAME,
            constants::APP_VERSION,
            request.plugins.len()
        );

        let material = self.prepare(request).map_err(|source| BuildFailure {
            state: BuildState::Init,
            workspace: None,
            source,
        })?;
        let workspace = material.workspace.clone();
        let output = material.output.clone();
        info!("build workspace: {}", workspace.display());

        let mut context = StageContext::new_live(material, &self.config, self.toolchain(), self.assets.as_ref());
        match self.pipeline.execute(&mut context) {
            Ok(()) => Ok(BuildReport {
                output,
                workspace,
                state: context.state(),
            }),
            Err(source) => Err(BuildFailure {
                state: context.failed_at().unwrap_or(BuildState::Failed),
                workspace: Some(workspace),
                source,
            }),
        }
    }

    /// Describe each stage of a build without touching the filesystem or
    /// the toolchain
    pub fn plan(&self, request: BuildRequest) -> Result<Vec<String>> {
        let parent = self.workspace_parent()?;
        let workspace = parent.join(format!("{}*", self.config.workspace_prefix));
        let material = self.material(request, &parent, workspace)?;

        let context = StageContext::new_dry_run(material, &self.config, self.toolchain(), self.assets.as_ref());
        Ok(self.pipeline.plan(&context))
    }

    /// Init: resolve paths and create the workspace
    fn prepare(&self, request: BuildRequest) -> Result<BuildMaterial> {
        let parent = self.workspace_parent()?;
        let workspace = tempfile::Builder::new()
            .prefix(&self.config.workspace_prefix)
            .tempdir_in(&parent)
            .map_err(|e| Error::io(e, "create_workspace", &parent))?
            .keep();
        self.material(request, &parent, workspace)
    }

    fn material(&self, request: BuildRequest, parent: &Path, workspace: PathBuf) -> Result<BuildMaterial> {
        let output = match request.output {
            None => parent.join(&self.config.default_output_name),
            Some(path) => absolute(&path)?,
        };

        let mut plugins = PluginSpec::parse_all(&request.plugins);
        for plugin in plugins.iter_mut().filter(|p| p.is_local()) {
            plugin.local_path = absolute(Path::new(&plugin.local_path))?
                .to_string_lossy()
                .into_owned();
        }
        let base_module_replacement = match &self.config.base_module_replacement {
            Some(path) => Some(absolute(path)?),
            None => None,
        };

        Ok(BuildMaterial {
            plugins,
            output,
            workspace,
            base_module_replacement,
            version_info: request.version_info,
        })
    }

    fn workspace_parent(&self) -> Result<PathBuf> {
        absolute(&self.config.workspace_parent()?)
    }
}

/// The toolchain runs inside the workspace, so relative output, plugin and
/// replacement paths are anchored to the current directory first
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::path::absolute(path).map_err(|e| Error::io(e, "absolute_path", path))
}
