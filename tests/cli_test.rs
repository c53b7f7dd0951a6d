//! Integration tests for the command-line binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command in an empty project directory with a fixed identity and no
/// account/region variables.
fn infra(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("landing-infra"));
    cmd.current_dir(temp.path())
        .env("USER", "alice")
        .env("NO_COLOR", "1")
        .env_remove("CDK_DEFAULT_ACCOUNT")
        .env_remove("CDK_DEFAULT_REGION")
        .env_remove("RUST_LOG");
    cmd
}

fn setup_project(cdk_json: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cdk.json"), cdk_json).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deployment topology"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn no_args_synthesizes_identity_preview() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("topology: standalone"))
        .stdout(predicate::str::contains(
            "stackId: NextLandingFrontend-preview-alice",
        ))
        .stdout(predicate::str::contains("terminationProtection: false"))
        .stdout(predicate::str::contains("region: us-east-1"));
    Ok(())
}

#[test]
fn prod_environment_is_protected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args(["synth", "--json", "-c", "environment=prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"stackId\": \"NextLandingFrontend-prod\"",
        ))
        .stdout(predicate::str::contains("\"terminationProtection\": true"))
        .stdout(predicate::str::contains("\"Environment\": \"prod\""));
    Ok(())
}

#[test]
fn code_connection_selects_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args([
            "synth",
            "--json",
            "--context",
            "codeConnectionArn=arn:aws:codeconnections:us-east-1:123456789012:connection/abc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"topology\": \"pipeline\""))
        .stdout(predicate::str::contains(
            "\"stackId\": \"NextLandingPipelineStack\"",
        ))
        .stdout(predicate::str::contains(
            "PawRush/Next-JS-Landing-Page-Starter-Template",
        ))
        .stdout(predicate::str::contains("NextLandingFrontend").not())
        .stdout(predicate::str::contains("\"Environment\"").not());
    Ok(())
}

#[test]
fn nested_repository_path_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args([
            "synth",
            "--json",
            "-c",
            "codeConnectionArn=arn:x",
            "-c",
            "repositoryName=acme-group/web/landing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"repositoryName\": \"acme-group/web/landing\"",
        ));
    Ok(())
}

#[test]
fn verbose_synth_reports_resolution_on_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args(["-v", "synth", "--json", "-c", "buildPath=../dist"])
        .assert()
        .success()
        .stderr(predicate::str::contains("identity via $USER"))
        .stderr(predicate::str::contains("(--context)"))
        .stdout(predicate::str::contains("identity via").not());

    infra(&temp)
        .args(["synth", "--json", "-c", "buildPath=../dist"])
        .assert()
        .success()
        .stderr(predicate::str::contains("identity via").not())
        .stderr(predicate::str::contains("(--context)").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn identity_falls_back_to_whoami() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::process::Command::new("whoami")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_default();
    let expected = if name.is_empty() {
        "preview-local".to_string()
    } else {
        format!("preview-{name}")
    };

    let temp = TempDir::new()?;
    let output = infra(&temp)
        .env_remove("USER")
        .args(["context", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["context"]["environment"], expected.as_str());
    if expected != "preview-local" {
        assert_eq!(value["sources"]["environment"], "identity via `whoami`");
    }
    Ok(())
}

#[test]
fn env_vars_set_account_and_region() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .env("CDK_DEFAULT_ACCOUNT", "123456789012")
        .env("CDK_DEFAULT_REGION", "eu-central-1")
        .args(["synth", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"account\": \"123456789012\""))
        .stdout(predicate::str::contains("\"region\": \"eu-central-1\""));
    Ok(())
}

#[test]
fn cdk_json_context_is_used() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "context": { "environment": "staging", "buildPath": "../dist" } }"#);
    infra(&temp)
        .args(["synth", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NextLandingFrontend-staging"))
        .stdout(predicate::str::contains("\"buildOutputPath\": \"../dist\""));
    Ok(())
}

#[test]
fn cli_context_overrides_cdk_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "context": { "environment": "staging" } }"#);
    infra(&temp)
        .args(["synth", "-c", "environment=qa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NextLandingFrontend-qa"));
    Ok(())
}

#[test]
fn project_flag_points_at_other_directory() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project(r#"{ "context": { "environment": "demo" } }"#);
    let elsewhere = TempDir::new()?;
    infra(&elsewhere)
        .arg("--project")
        .arg(project.path())
        .arg("synth")
        .assert()
        .success()
        .stdout(predicate::str::contains("NextLandingFrontend-demo"));
    Ok(())
}

#[test]
fn synth_writes_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args(["synth", "--output", "cdk.out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest.json"));

    let manifest = fs::read_to_string(temp.path().join("cdk.out").join("manifest.json"))?;
    assert!(manifest.contains("NextLandingFrontend-preview-alice"));
    Ok(())
}

#[test]
fn empty_branch_for_pipeline_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args([
            "synth",
            "--output",
            "cdk.out",
            "-c",
            "codeConnectionArn=arn:x",
            "-c",
            "branchName=",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("branchName"));

    assert!(!temp.path().join("cdk.out").exists());
    Ok(())
}

#[test]
fn invalid_identity_stack_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .env("USER", "john.doe")
        .arg("synth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NextLandingFrontend-preview-john.doe"));
    Ok(())
}

#[test]
fn malformed_context_pair_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args(["-c", "environment"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
    Ok(())
}

#[test]
fn malformed_cdk_json_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("{ not json");
    infra(&temp)
        .arg("synth")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cdk.json"));
    Ok(())
}

#[test]
fn context_command_reports_sources() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{ "context": { "buildPath": "../dist" } }"#);
    infra(&temp)
        .args(["context", "-c", "branchName=main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cdk.json)"))
        .stdout(predicate::str::contains("(--context)"))
        .stdout(predicate::str::contains("preview-alice"))
        .stdout(predicate::str::contains("identity via $USER"));
    Ok(())
}

#[test]
fn context_command_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = infra(&temp).args(["context", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["context"]["environment"], "preview-alice");
    assert_eq!(value["sources"]["region"], "default");
    assert!(value["context"]["account"].is_null());
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    infra(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("landing-infra"));
    Ok(())
}
