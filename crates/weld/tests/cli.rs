use assert_cmd::Command; // Bring Command into scope
use predicates::prelude::*; // Bring predicate traits into scope
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_lists_subcommands() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("weld")?;
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("plan"));

    Ok(())
}

#[test]
fn test_plan_prints_every_stage() -> Result<(), Box<dyn std::error::Error>> {
    let parent = tempdir()?;
    let config = parent.path().join("weld.json");
    fs::write(&config, format!(r#"{{"workspace_parent": {:?}}}"#, parent.path().display().to_string()))?;

    let mut cmd = Command::cargo_bin("weld")?;
    cmd.env_remove("ANSWER_MODULE")
        .args(["plan", "--with", "a.com/p1@v2.3.0", "--with", "a.com/p2=/local/p2", "--stamp-version", "9.9.9"])
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. Would write main.go and go.mod importing 2 plugin(s)"))
        .stdout(predicate::str::contains("cmd.Version=9.9.9"))
        .stdout(predicate::str::contains("6. Would remove"));

    // Planning creates no workspace
    assert_eq!(fs::read_dir(parent.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_plan_reads_base_replacement_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("weld")?;
    cmd.env("ANSWER_MODULE", "/src/answer").args(["plan", "--with", "a.com/p1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Would replace github.com/answerdev/answer with /src/answer"));

    Ok(())
}

#[test]
fn test_build_with_missing_toolchain_fails() -> Result<(), Box<dyn std::error::Error>> {
    let parent = tempdir()?;
    let config = parent.path().join("weld.yaml");
    fs::write(
        &config,
        format!(
            "toolchain_program: /definitely/not/a/toolchain\nworkspace_parent: {}\n",
            parent.path().display()
        ),
    )?;

    let mut cmd = Command::cargo_bin("weld")?;
    cmd.env_remove("ANSWER_MODULE")
        .args(["build", "--with", "a.com/p1"])
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("build failed during resolve dependencies"))
        .stderr(predicate::str::contains("Build workspace kept at"));

    assert!(!parent.path().join("new_answer").exists());
    Ok(())
}

#[test]
fn test_unsupported_config_format_fails() -> Result<(), Box<dyn std::error::Error>> {
    let parent = tempdir()?;
    let config = parent.path().join("weld.ini");
    fs::write(&config, "toolchain_program = go\n")?;

    let mut cmd = Command::cargo_bin("weld")?;
    cmd.args(["build", "--config"]).arg(&config);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));

    Ok(())
}
