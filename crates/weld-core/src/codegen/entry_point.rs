use std::fmt::Write as _;
use std::path::Path;

use crate::codegen::replacement::Replacement;
use crate::config::BuildConfig;
use crate::kernel::constants;
use crate::kernel::error::Result;
use crate::plugin_system::{versioned_module_path, PluginSpec};
use crate::utils;

/// Generated sources of the composition module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Import paths of plugins fetched remotely, in input order
    pub remote_imports: Vec<String>,
    /// Import paths of plugins built from local directories, in input order
    pub local_imports: Vec<String>,
    /// Entry point source (`main.go`)
    pub source: String,
    /// Dependency manifest (`go.mod`)
    pub manifest: String,
    /// Directives for plugins with a local override
    pub replacements: Vec<Replacement>,
}

impl EntryPoint {
    /// Generate the entry point, manifest and replacement directives for
    /// `plugins`. Remote plugins are imported under their versioned module
    /// path, local ones under the composition module's own namespace.
    pub fn generate(plugins: &[PluginSpec], config: &BuildConfig) -> Self {
        let mut remote_imports = Vec::new();
        let mut local_imports = Vec::new();
        let mut replacements = Vec::new();

        for plugin in plugins {
            if plugin.is_local() {
                local_imports.push(format!("{}/{}", config.entry_module, plugin.name));
                replacements.push(Replacement::local(&plugin.name, &plugin.version, &plugin.local_path));
            } else {
                remote_imports.push(versioned_module_path(&plugin.name, &plugin.version));
            }
        }

        let source = render_source(config, &remote_imports, &local_imports);
        let manifest = render_manifest(config);

        Self {
            remote_imports,
            local_imports,
            source,
            manifest,
            replacements,
        }
    }

    /// Write `main.go` and `go.mod` into `workspace`
    pub fn write_to(&self, workspace: &Path) -> Result<()> {
        utils::write_file(workspace.join(constants::ENTRY_POINT_FILE), &self.source)?;
        utils::write_file(workspace.join(constants::MANIFEST_FILE), &self.manifest)
    }
}

fn render_source(config: &BuildConfig, remote: &[String], local: &[String]) -> String {
    // Writing into a String cannot fail
    let mut out = String::new();
    out.push_str("package main\n\nimport (\n");
    let _ = writeln!(out, "\t{} \"{}\"", config.command_alias, config.command_package());

    if !remote.is_empty() {
        out.push_str("\n\t// remote plugins\n");
        for path in remote {
            let _ = writeln!(out, "\t_ \"{}\"", path);
        }
    }
    if !local.is_empty() {
        out.push_str("\n\t// local plugins\n");
        for path in local {
            let _ = writeln!(out, "\t_ \"{}\"", path);
        }
    }

    out.push_str(")\n\nfunc main() {\n");
    let _ = writeln!(out, "\t{}.Main()", config.command_alias);
    out.push_str("}\n");
    out
}

fn render_manifest(config: &BuildConfig) -> String {
    format!("module {}\n\ngo {}\n", config.entry_module, config.toolchain_version)
}
