//! # Weld Core Build Configuration
//!
//! [`BuildConfig`] carries every knob of a build that is not a per-invocation
//! input: which base application is extended, where the workspace lives,
//! which toolchain runs, and an optional override for the base module's
//! source. It can be loaded from JSON, YAML, or TOML (the latter behind the
//! `toml-config` feature); every field has a default.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kernel::constants;
use crate::kernel::error::{Error, Result};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml)
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported configuration format for path: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {format} configuration '{}': {message}", .path.display())]
    Parse {
        format: &'static str,
        path: PathBuf,
        message: String,
    },
}

/// Construction-time configuration of a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Import path of the base application
    pub base_module: String,
    /// Module name of the generated composition module
    pub entry_module: String,
    /// Language version directive of the generated manifest
    pub toolchain_version: String,
    /// Package receiving the link-time version constants, `<base_module>/cmd` when unset
    pub command_package: Option<String>,
    /// Import alias of the command package in the entry point
    pub command_alias: String,
    /// Local source replacing the whole base module
    pub base_module_replacement: Option<PathBuf>,
    /// Directory the workspace is created under, the current directory when unset
    pub workspace_parent: Option<PathBuf>,
    pub workspace_prefix: String,
    pub default_output_name: String,
    /// Toolchain executable
    pub toolchain_program: String,
    /// Top-level key plugin translations are nested under
    pub resource_namespace: String,
    /// Directory providing the static asset bundle
    pub ui_dir: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_module: constants::DEFAULT_BASE_MODULE.to_string(),
            entry_module: constants::DEFAULT_ENTRY_MODULE.to_string(),
            toolchain_version: constants::DEFAULT_TOOLCHAIN_VERSION.to_string(),
            command_package: None,
            command_alias: constants::DEFAULT_COMMAND_ALIAS.to_string(),
            base_module_replacement: None,
            workspace_parent: None,
            workspace_prefix: constants::DEFAULT_WORKSPACE_PREFIX.to_string(),
            default_output_name: constants::DEFAULT_OUTPUT_NAME.to_string(),
            toolchain_program: constants::DEFAULT_TOOLCHAIN_PROGRAM.to_string(),
            resource_namespace: constants::DEFAULT_RESOURCE_NAMESPACE.to_string(),
            ui_dir: None,
        }
    }
}

impl BuildConfig {
    /// Load a configuration file, picking the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(e, "read_config", path))?;
        Self::parse(&contents, format, path)
    }

    /// Parse configuration text in the given format
    pub fn parse(contents: &str, format: ConfigFormat, path: &Path) -> Result<Self> {
        let parse_error = |message: String| ConfigError::Parse {
            format: format.extension(),
            path: path.to_path_buf(),
            message,
        };
        let config: BuildConfig = match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))?,
            ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))?,
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| parse_error(e.to_string()))?,
        };
        Ok(config)
    }

    /// Package the version constants are injected into
    pub fn command_package(&self) -> String {
        self.command_package
            .clone()
            .unwrap_or_else(|| format!("{}/cmd", self.base_module))
    }

    /// Directory the workspace is created under
    pub fn workspace_parent(&self) -> Result<PathBuf> {
        match &self.workspace_parent {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| Error::io(e, "current_dir", ".")),
        }
    }

    /// Where the vendored copy of `module` lands inside `workspace`
    pub fn vendored_module_dir(&self, workspace: &Path, module: &str) -> PathBuf {
        workspace.join(constants::VENDOR_DIR).join(module)
    }

    /// Base application's resource directory inside `workspace`
    pub fn base_resource_dir(&self, workspace: &Path) -> PathBuf {
        self.vendored_module_dir(workspace, &self.base_module).join(constants::I18N_DIR)
    }

    /// Target of the asset bundle inside `workspace`
    pub fn asset_dir(&self, workspace: &Path) -> PathBuf {
        self.vendored_module_dir(workspace, &self.base_module).join(constants::UI_DIR)
    }
}
