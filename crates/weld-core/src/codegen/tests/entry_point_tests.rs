use std::fs;

use tempfile::tempdir;

use crate::codegen::EntryPoint;
use crate::config::BuildConfig;
use crate::plugin_system::PluginSpec;

#[test]
fn test_mixed_remote_and_local_plugins() {
    let plugins = PluginSpec::parse_all(["a.com/p1@v2.3.0", "a.com/p2=/local/p2"]);
    let entry = EntryPoint::generate(&plugins, &BuildConfig::default());

    assert_eq!(entry.remote_imports, vec!["a.com/p1/v2"]);
    assert_eq!(entry.local_imports, vec!["answer/a.com/p2"]);
    assert!(entry.source.contains("\t_ \"a.com/p1/v2\"\n"));
    assert!(entry.source.contains("\t_ \"answer/a.com/p2\"\n"));

    assert_eq!(entry.replacements.len(), 1);
    let directive = entry.replacements[0].to_string();
    assert!(directive.contains("/local/p2"), "directive was {}", directive);
    assert!(directive.starts_with("a.com/p2"));
}

#[test]
fn test_source_layout() {
    let plugins = PluginSpec::parse_all(["github.com/answerdev/github-connector"]);
    let entry = EntryPoint::generate(&plugins, &BuildConfig::default());

    let expected = "package main\n\
                    \n\
                    import (\n\
                    \tanswercmd \"github.com/answerdev/answer/cmd\"\n\
                    \n\
                    \t// remote plugins\n\
                    \t_ \"github.com/answerdev/github-connector\"\n\
                    )\n\
                    \n\
                    func main() {\n\
                    \tanswercmd.Main()\n\
                    }\n";
    assert_eq!(entry.source, expected);
}

#[test]
fn test_imports_follow_input_order() {
    let plugins = PluginSpec::parse_all(["z.com/last", "a.com/first@v3.0.0", "m.com/mid"]);
    let entry = EntryPoint::generate(&plugins, &BuildConfig::default());
    assert_eq!(entry.remote_imports, vec!["z.com/last", "a.com/first/v3", "m.com/mid"]);

    let z = entry.source.find("z.com/last").unwrap();
    let a = entry.source.find("a.com/first/v3").unwrap();
    assert!(z < a);
}

#[test]
fn test_no_plugins_still_imports_command_package() {
    let entry = EntryPoint::generate(&[], &BuildConfig::default());
    assert!(entry.remote_imports.is_empty());
    assert!(entry.replacements.is_empty());
    assert!(entry.source.contains("answercmd \"github.com/answerdev/answer/cmd\""));
    assert!(!entry.source.contains("plugins"));
}

#[test]
fn test_manifest_uses_config() {
    let config = BuildConfig {
        entry_module: "composed".to_string(),
        toolchain_version: "1.21".to_string(),
        ..BuildConfig::default()
    };
    let entry = EntryPoint::generate(&[], &config);
    assert_eq!(entry.manifest, "module composed\n\ngo 1.21\n");
}

#[test]
fn test_write_to_workspace() {
    let workspace = tempdir().unwrap();
    let plugins = PluginSpec::parse_all(["a.com/p1@v1.0.0"]);
    let entry = EntryPoint::generate(&plugins, &BuildConfig::default());

    entry.write_to(workspace.path()).unwrap();
    assert_eq!(fs::read_to_string(workspace.path().join("main.go")).unwrap(), entry.source);
    assert_eq!(fs::read_to_string(workspace.path().join("go.mod")).unwrap(), "module answer\n\ngo 1.19\n");
}
