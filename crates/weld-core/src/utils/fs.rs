use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::kernel::error::{Error, Result};

/// Create a directory and all of its parents
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| Error::io(e, "create_dir_all", path))
}

/// Write a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, contents).map_err(|e| Error::io(e, "write_file", path))
}

/// Append bytes to the end of an existing file
pub fn append_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<()> {
    let path = path.as_ref();
    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::io(e, "open_append", path))?;

    file.write_all(content.as_ref())
        .map_err(|e| Error::io(e, "append", path))
}

/// List the regular files directly inside `dir`, sorted by name.
/// Subdirectories are not descended into.
pub fn list_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(e, "read_dir", dir))? {
        let entry = entry.map_err(|e| Error::io(e, "read_dir_entry", dir))?;
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io(e, "file_type", entry.path()))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Case-sensitive extension check against a set of extensions (without dots)
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
