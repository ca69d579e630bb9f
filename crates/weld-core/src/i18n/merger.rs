use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::BuildConfig;
use crate::i18n::bundle::{decode_namespace, TranslationBundle};
use crate::kernel::constants;
use crate::kernel::error::Result;
use crate::plugin_system::PluginSpec;
use crate::utils;

/// What a merge did to the base resource set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Base files that had plugin translations appended
    pub extended: Vec<String>,
    /// Plugin resource files that could not be read or decoded
    pub skipped: Vec<PathBuf>,
    /// Plugin resource files with no base counterpart
    pub dropped: Vec<String>,
}

/// Whether `path` has a text-resource extension
fn is_resource_file(path: &Path) -> bool {
    utils::has_extension(path, constants::RESOURCE_EXTENSIONS)
}

fn file_name_of(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Accumulate the translations of every plugin, in input order, from the
/// vendored `<workspace>/vendor/<plugin>/i18n` directories.
///
/// Plugins without a resource directory contribute nothing. Files that
/// cannot be read or decoded are logged and reported in `skipped`.
pub fn collect_plugin_translations(
    plugins: &[PluginSpec],
    workspace: &Path,
    config: &BuildConfig,
    skipped: &mut Vec<PathBuf>,
) -> Result<TranslationBundle> {
    let mut bundle = TranslationBundle::new();

    for plugin in plugins {
        let i18n_dir = config
            .vendored_module_dir(workspace, &plugin.name)
            .join(constants::I18N_DIR);
        debug!("i18n dir: {}", i18n_dir.display());
        if !i18n_dir.is_dir() {
            continue;
        }

        for path in utils::list_files(&i18n_dir)? {
            if !is_resource_file(&path) {
                continue;
            }
            let Some(file_name) = file_name_of(&path) else {
                continue;
            };

            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => {
                    debug!("read translation file failed: {} {}", path.display(), e);
                    skipped.push(path.clone());
                    continue;
                }
            };
            match decode_namespace(&contents, &config.resource_namespace) {
                Ok(translations) => bundle.merge_file(file_name, translations),
                Err(e) => {
                    debug!("unmarshal translation file failed: {} {}", path.display(), e);
                    skipped.push(path.clone());
                }
            }
        }
    }

    Ok(bundle)
}

/// Append each bundle entry to the base resource file of the same name.
///
/// Only regular files in `base_dir` with a resource extension, plus the
/// index resource, are considered. The entry is appended as a separate
/// block after a blank line; base files are never rewritten and missing
/// ones are never created. Returns the names of the extended files.
pub fn apply_bundle(bundle: &TranslationBundle, base_dir: &Path, namespace: &str) -> Result<Vec<String>> {
    let mut extended = Vec::new();

    for path in utils::list_files(base_dir)? {
        let Some(file_name) = file_name_of(&path) else {
            continue;
        };
        if !is_resource_file(&path) && file_name != constants::INDEX_RESOURCE {
            continue;
        }
        let Some(encoded) = bundle.encode(file_name, namespace)? else {
            continue;
        };

        utils::append_to_file(&path, format!("\n{}", encoded))?;
        extended.push(file_name.to_string());
    }

    Ok(extended)
}

/// Merge plugin translations into the base application's resource files
/// inside `workspace`
pub fn merge_translations(plugins: &[PluginSpec], workspace: &Path, config: &BuildConfig) -> Result<MergeSummary> {
    info!("try to merge i18n files");

    let mut summary = MergeSummary::default();
    let bundle = collect_plugin_translations(plugins, workspace, config, &mut summary.skipped)?;

    let base_dir = config.base_resource_dir(workspace);
    summary.extended = apply_bundle(&bundle, &base_dir, &config.resource_namespace)?;
    summary.dropped = bundle
        .file_names()
        .filter(|name| !summary.extended.iter().any(|e| e == name))
        .map(str::to_string)
        .collect();

    for name in &summary.dropped {
        debug!("no base resource file for plugin translations '{}', dropping", name);
    }
    Ok(summary)
}
