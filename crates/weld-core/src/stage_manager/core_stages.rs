use std::fs;

use log::{info, warn};

use crate::assets::install_assets;
use crate::codegen::{EntryPoint, Replacement};
use crate::i18n::merge_translations;
use crate::kernel::constants;
use crate::kernel::error::Result;
use crate::stage_manager::{BuildState, Stage, StageContext};
use crate::toolchain::LinkConstants;

/// Writes the composition entry point and manifest, then registers a
/// replacement for every locally overridden plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateEntryPointStage;

impl Stage for GenerateEntryPointStage {
    fn id(&self) -> &str { "core::generate_entry_point" }
    fn name(&self) -> &str { "Generate Entry Point" }
    fn description(&self) -> &str { "Writes the entry point and manifest that import every plugin." }
    fn state(&self) -> BuildState { BuildState::GenerateEntryPoint }

    fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        let entry_point = EntryPoint::generate(&context.material.plugins, context.config());
        info!("generate main file");
        entry_point.write_to(context.workspace())?;

        let toolchain = context.toolchain();
        for replacement in &entry_point.replacements {
            toolchain.apply_replacement(context.workspace(), replacement)?;
        }
        Ok(())
    }

    fn dry_run_description(&self, context: &StageContext<'_>) -> String {
        let local = context.material.plugins.iter().filter(|p| p.is_local()).count();
        format!(
            "Would write {} and {} importing {} plugin(s) into {}, with {} local replacement(s)",
            constants::ENTRY_POINT_FILE,
            constants::MANIFEST_FILE,
            context.material.plugins.len(),
            context.workspace().display(),
            local
        )
    }
}

/// Applies the base module replacement, if any, then locks and vendors
/// every dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveDependenciesStage;

impl Stage for ResolveDependenciesStage {
    fn id(&self) -> &str { "core::resolve_dependencies" }
    fn name(&self) -> &str { "Resolve Dependencies" }
    fn description(&self) -> &str { "Fetches and vendors the dependencies of the composition module." }
    fn state(&self) -> BuildState { BuildState::ResolveDependencies }

    fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        let toolchain = context.toolchain();
        if let Some(path) = &context.material.base_module_replacement {
            let replacement = Replacement::whole_module(&context.config().base_module, path);
            toolchain.apply_replacement(context.workspace(), &replacement)?;
        }
        toolchain.resolve_dependencies(context.workspace())
    }

    fn dry_run_description(&self, context: &StageContext<'_>) -> String {
        match &context.material.base_module_replacement {
            Some(path) => format!(
                "Would replace {} with {} and vendor dependencies using {}",
                context.config().base_module,
                path.display(),
                context.toolchain().name()
            ),
            None => format!("Would vendor dependencies using {}", context.toolchain().name()),
        }
    }
}

/// Copies the base application's static assets into the vendored tree
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallAssetsStage;

impl Stage for InstallAssetsStage {
    fn id(&self) -> &str { "core::install_assets" }
    fn name(&self) -> &str { "Install Assets" }
    fn description(&self) -> &str { "Copies the static UI assets into the vendored base module." }
    fn state(&self) -> BuildState { BuildState::InstallAssets }

    fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        let target = context.config().asset_dir(context.workspace());
        info!("copy ui files to {}", target.display());
        install_assets(context.assets(), &target)?;
        Ok(())
    }

    fn dry_run_description(&self, context: &StageContext<'_>) -> String {
        format!(
            "Would copy {} assets to {}",
            context.assets().name(),
            context.config().asset_dir(context.workspace()).display()
        )
    }
}

/// Appends plugin translations to the base application's resource files
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeResourcesStage;

impl Stage for MergeResourcesStage {
    fn id(&self) -> &str { "core::merge_resources" }
    fn name(&self) -> &str { "Merge Resources" }
    fn description(&self) -> &str { "Merges plugin translations into the base resource files." }
    fn state(&self) -> BuildState { BuildState::MergeResources }

    fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        let summary = merge_translations(&context.material.plugins, context.workspace(), context.config())?;
        info!(
            "merged plugin translations into {} file(s), skipped {}",
            summary.extended.len(),
            summary.skipped.len()
        );
        Ok(())
    }

    fn dry_run_description(&self, context: &StageContext<'_>) -> String {
        format!(
            "Would merge '{}' translations into {}",
            context.config().resource_namespace,
            context.config().base_resource_dir(context.workspace()).display()
        )
    }
}

/// Compiles the workspace into the output binary with version constants
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileStage;

impl CompileStage {
    fn link_constants(context: &StageContext<'_>) -> LinkConstants {
        LinkConstants::from_version_info(context.config().command_package(), &context.material.version_info)
    }
}

impl Stage for CompileStage {
    fn id(&self) -> &str { "core::compile" }
    fn name(&self) -> &str { "Compile" }
    fn description(&self) -> &str { "Builds the output binary with version metadata injected." }
    fn state(&self) -> BuildState { BuildState::Compile }

    fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        let constants = Self::link_constants(context);
        context
            .toolchain()
            .compile(context.workspace(), &context.material.output, &constants)
    }

    fn dry_run_description(&self, context: &StageContext<'_>) -> String {
        format!(
            "Would build {} with ldflags \"{}\"",
            context.material.output.display(),
            Self::link_constants(context)
        )
    }
}

/// Removes the ephemeral workspace. Failures are logged and ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupStage;

impl Stage for CleanupStage {
    fn id(&self) -> &str { "core::cleanup" }
    fn name(&self) -> &str { "Clean Up" }
    fn description(&self) -> &str { "Removes the build workspace." }
    fn state(&self) -> BuildState { BuildState::Cleanup }

    fn execute(&self, context: &mut StageContext<'_>) -> Result<()> {
        let workspace = context.workspace();
        if let Err(e) = fs::remove_dir_all(workspace) {
            warn!("failed to remove build workspace {}: {}", workspace.display(), e);
        }
        Ok(())
    }

    fn dry_run_description(&self, context: &StageContext<'_>) -> String {
        format!("Would remove {}", context.workspace().display())
    }
}
