use semver::Version;

/// Computes the import path of `module_path` at `module_version`, following
/// semantic import versioning: majors above 1 get a `/vN` suffix.
///
/// An empty version, or one that is not a strict `MAJOR.MINOR.PATCH`
/// semantic version once a leading `v` is dropped, leaves the module path
/// untouched. The fallback is silent, so a mistyped version builds against
/// the unqualified path.
pub fn versioned_module_path(module_path: &str, module_version: &str) -> String {
    if module_version.is_empty() {
        return module_path.to_string();
    }

    let raw = module_version.strip_prefix('v').unwrap_or(module_version);
    let version = match Version::parse(raw) {
        Ok(version) => version,
        Err(e) => {
            log::debug!(
                "Version '{}' of '{}' is not a semantic version ({}), using unqualified path",
                module_version, module_path, e
            );
            return module_path.to_string();
        }
    };

    let mut path = module_path.to_string();
    if version.major > 1 {
        path.push_str(&format!("/v{}", version.major));
    }
    clean_module_path(&path)
}

/// Lexically normalizes a slash-separated path: repeated separators collapse,
/// `.` elements vanish, `..` removes the preceding element, and trailing
/// slashes are dropped. An empty result becomes `.`.
pub fn clean_module_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for element in path.split('/') {
        match element {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
