use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::fs::{self, File};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use crate::assets::error::AssetError;
use crate::kernel::error::{Error, Result};

/// Kind of an entry in an asset tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    File,
    Dir,
}

/// One entry of an asset tree, addressed by a `/`-separated relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub path: String,
    pub kind: AssetKind,
}

impl AssetEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: AssetKind::File }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: AssetKind::Dir }
    }
}

/// Read-only virtual file tree holding the base application's static assets
pub trait AssetSource: Debug {
    /// Get the name of this source
    fn name(&self) -> &str;

    /// Every entry of the tree, parents listed before their children
    fn walk(&self) -> Result<Vec<AssetEntry>>;

    /// Open a file entry for reading
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>>;
}

/// Asset tree backed by a directory on disk
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn walk_dir(&self, dir: &Path, prefix: &str, entries: &mut Vec<AssetEntry>) -> Result<()> {
        let mut children = fs::read_dir(dir)
            .map_err(|e| Error::io(e, "read_dir", dir))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::io(e, "read_dir_entry", dir))?;
        children.sort_by_key(|entry| entry.file_name());

        for child in children {
            let name = child.file_name().to_string_lossy().into_owned();
            let path = if prefix.is_empty() { name } else { format!("{}/{}", prefix, name) };
            let child_path = child.path();
            let metadata = fs::metadata(&child_path).map_err(|e| Error::io(e, "metadata", &child_path))?;
            if metadata.is_dir() {
                entries.push(AssetEntry::dir(path.clone()));
                self.walk_dir(&child_path, &path, entries)?;
            } else {
                entries.push(AssetEntry::file(path));
            }
        }
        Ok(())
    }
}

impl AssetSource for DirAssetSource {
    fn name(&self) -> &str {
        "dir"
    }

    fn walk(&self) -> Result<Vec<AssetEntry>> {
        let mut entries = Vec::new();
        self.walk_dir(&self.root, "", &mut entries)?;
        Ok(entries)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        let full_path = self.root.join(path);
        let file = File::open(&full_path).map_err(|e| Error::io(e, "open_asset", &full_path))?;
        Ok(Box::new(file))
    }
}

/// Asset tree held in memory. Directories are implied by file paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetSource for MemoryAssetSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn walk(&self) -> Result<Vec<AssetEntry>> {
        let mut dirs = BTreeSet::new();
        for path in self.files.keys() {
            let mut end = 0;
            while let Some(pos) = path[end..].find('/') {
                end += pos;
                dirs.insert(path[..end].to_string());
                end += 1;
            }
        }

        let mut entries: Vec<AssetEntry> = dirs.into_iter().map(AssetEntry::dir).collect();
        entries.extend(self.files.keys().cloned().map(AssetEntry::file));
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>> {
        let contents = self
            .files
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        Ok(Box::new(Cursor::new(contents.as_slice())))
    }
}
