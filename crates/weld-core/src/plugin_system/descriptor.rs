use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A plugin to be linked into the composed binary.
///
/// Built from a descriptor of the form `<module>[@<version>][=<localPath>]`,
/// e.g. `github.com/answerdev/github-connector@v1.2.0=/src/connector`.
/// Empty fields mean "use the default": the latest remote version, and no
/// local override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginSpec {
    /// Module reference, e.g. `github.com/answerdev/github-connector`
    pub name: String,
    /// Requested version, empty for the latest remote version
    pub version: String,
    /// Local source directory; when set it wins over any remote fetch
    pub local_path: String,
}

impl PluginSpec {
    /// Parse a descriptor. Never fails: missing parts come back empty.
    pub fn parse(descriptor: &str) -> Self {
        let descriptor = descriptor.trim();
        let (rest, local_path) = descriptor.split_once('=').unwrap_or((descriptor, ""));
        let (name, version) = rest.split_once('@').unwrap_or((rest, ""));
        Self {
            name: name.to_string(),
            version: version.to_string(),
            local_path: local_path.to_string(),
        }
    }

    /// Parse a list of descriptors, keeping their order
    pub fn parse_all<I, S>(descriptors: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        descriptors
            .into_iter()
            .map(|d| Self::parse(d.as_ref()))
            .collect()
    }

    /// Whether the plugin is built from a local directory
    pub fn is_local(&self) -> bool {
        !self.local_path.is_empty()
    }
}

impl FromStr for PluginSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PluginSpec::parse(s))
    }
}

impl fmt::Display for PluginSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.version.is_empty() {
            write!(f, "@{}", self.version)?;
        }
        if !self.local_path.is_empty() {
            write!(f, "={}", self.local_path)?;
        }
        Ok(())
    }
}
