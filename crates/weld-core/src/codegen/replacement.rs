use std::fmt;
use std::path::PathBuf;

/// A module replacement directive: builds resolve `module` from `path`
/// instead of fetching it.
///
/// Renders as `<module>@v<version>=<path>` when pinned to a version, and as
/// `<module>=<path>` when it covers every version of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub module: String,
    /// Version without its `v` prefix; `None` replaces all versions
    pub version: Option<String>,
    pub path: PathBuf,
}

impl Replacement {
    /// Replacement for a plugin built from a local directory
    pub fn local(module: impl Into<String>, version: &str, path: impl Into<PathBuf>) -> Self {
        let version = version.strip_prefix('v').unwrap_or(version);
        Self {
            module: module.into(),
            version: (!version.is_empty()).then(|| version.to_string()),
            path: path.into(),
        }
    }

    /// Replacement covering every version of `module`
    pub fn whole_module(module: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            module: module.into(),
            version: None,
            path: path.into(),
        }
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@v{}={}", self.module, version, self.path.display()),
            None => write!(f, "{}={}", self.module, self.path.display()),
        }
    }
}
