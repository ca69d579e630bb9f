mod pipeline_tests;

use std::path::Path;

use crate::plugin_system::PluginSpec;
use crate::stage_manager::{BuildMaterial, VersionInfo};

/// Build material for `plugins` with its workspace at `workspace`
pub(super) fn material(workspace: &Path, plugins: &[&str]) -> BuildMaterial {
    BuildMaterial {
        plugins: PluginSpec::parse_all(plugins.iter().copied()),
        output: workspace.parent().unwrap_or(workspace).join("new_answer"),
        workspace: workspace.to_path_buf(),
        base_module_replacement: None,
        version_info: VersionInfo::new("1.2.0", "abc123", "2024-01-01T00:00:00Z"),
    }
}
