use crate::plugin_system::version::{clean_module_path, versioned_module_path};

#[test]
fn test_empty_version_returns_module_unchanged() {
    assert_eq!(versioned_module_path("example.com/m", ""), "example.com/m");
    assert_eq!(versioned_module_path("example.com//odd/", ""), "example.com//odd/");
}

#[test]
fn test_major_two_gets_suffix() {
    assert_eq!(versioned_module_path("example.com/m", "v2.0.0"), "example.com/m/v2");
    assert_eq!(versioned_module_path("example.com/m", "3.1.4"), "example.com/m/v3");
}

#[test]
fn test_major_zero_and_one_get_no_suffix() {
    assert_eq!(versioned_module_path("example.com/m", "v1.5.0"), "example.com/m");
    assert_eq!(versioned_module_path("example.com/m", "v0.9.1"), "example.com/m");
}

#[test]
fn test_unparseable_version_falls_back_silently() {
    assert_eq!(versioned_module_path("example.com/m", "not-a-version"), "example.com/m");
    assert_eq!(versioned_module_path("example.com/m", "latest"), "example.com/m");
    // Strict parsing: partial versions are rejected
    assert_eq!(versioned_module_path("example.com/m", "v2.0"), "example.com/m");
}

#[test]
fn test_prerelease_versions_are_accepted() {
    assert_eq!(versioned_module_path("example.com/m", "v4.0.0-rc.1"), "example.com/m/v4");
}

#[test]
fn test_result_is_normalized() {
    assert_eq!(versioned_module_path("example.com//m/", "v2.0.0"), "example.com/m/v2");
    assert_eq!(versioned_module_path("example.com/./m", "v1.0.0"), "example.com/m");
}

#[test]
fn test_clean_module_path() {
    assert_eq!(clean_module_path(""), ".");
    assert_eq!(clean_module_path("a//b/./c/"), "a/b/c");
    assert_eq!(clean_module_path("a/b/../c"), "a/c");
    assert_eq!(clean_module_path("../a"), "../a");
    assert_eq!(clean_module_path("/../a"), "/a");
    assert_eq!(clean_module_path("/"), "/");
    assert_eq!(clean_module_path("a/.."), ".");
}
