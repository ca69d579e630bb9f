use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::assets::error::AssetError;
use crate::assets::source::{AssetKind, AssetSource};
use crate::kernel::error::{Error, Result};
use crate::utils::create_dir_all;

/// Convert a `/`-separated asset path into a path relative to the install target.
///
/// Returns `None` for the tree root.
fn relative_target(path: &str) -> Result<Option<PathBuf>> {
    if path.starts_with('/') || path.starts_with('\\') {
        return Err(AssetError::InvalidPath {
            path: path.to_string(),
            reason: "absolute paths are not allowed".to_string(),
        }
        .into());
    }

    let mut relative = PathBuf::new();
    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                return Err(AssetError::InvalidPath {
                    path: path.to_string(),
                    reason: "parent components are not allowed".to_string(),
                }
                .into());
            }
            name => relative.push(name),
        }
    }

    if relative.as_os_str().is_empty() {
        Ok(None)
    } else {
        Ok(Some(relative))
    }
}

/// Copy every entry of `source` below `target`, overwriting existing files.
///
/// Returns the number of files written.
pub fn install_assets(source: &dyn AssetSource, target: &Path) -> Result<usize> {
    create_dir_all(target)?;

    let mut copied = 0;
    for entry in source.walk()? {
        let Some(relative) = relative_target(&entry.path)? else {
            continue;
        };
        let destination = target.join(relative);

        match entry.kind {
            AssetKind::Dir => create_dir_all(&destination)?,
            AssetKind::File => {
                if let Some(parent) = destination.parent() {
                    create_dir_all(parent)?;
                }
                let mut reader = source.open(&entry.path)?;
                let mut file = File::create(&destination)
                    .map_err(|e| Error::io(e, "create_asset", &destination))?;
                io::copy(&mut reader, &mut file).map_err(|e| Error::io(e, "copy_asset", &destination))?;
                copied += 1;
            }
        }
    }

    debug!("Installed {} asset files from {} source into {}", copied, source.name(), target.display());
    Ok(copied)
}
