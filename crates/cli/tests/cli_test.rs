//! Integration test for the swagmark binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SPEC: &str = r#"openapi: 3.0.0
info:
  title: Ping
  version: "1"
paths:
  /ping:
    get:
      tags: [health]
      summary: Ping the service
      responses:
        200:
          description: Pong
    post:
      tags: [health]
      summary: Report status
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                status: {type: string}
      responses:
        202:
          description: Accepted
"#;

fn swagmark(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swagmark"))
        .args(args)
        .env_remove("SWAGMARK_OUTPUT")
        .env_remove("SWAGMARK_TEMPLATE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run swagmark")
}

fn write_spec(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("ping.yaml");
    fs::write(&path, SPEC).unwrap();
    path
}

#[test]
fn test_version_flag() {
    let output = swagmark(&[Path::new("-V")]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("swagmark {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_converts_into_output_dir() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir);
    let out = dir.path().join("docs/api");

    let output = swagmark(&[&input, Path::new("-o"), &out]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let md = fs::read_to_string(out.join("ping.md")).unwrap();
    assert!(md.contains("https://badgers.space/badge/_/GET/blue"));
    assert!(md.contains("https://badgers.space/badge/_/POST/green"));

    let readme = fs::read_to_string(out.join("README.md")).unwrap();
    assert!(readme.contains("> 1 sections / 2 endpoints"));
    assert!(readme.contains("## [health](./ping.md)"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ping.md ("));
    assert!(stdout.contains("Converted 1 file(s) + index"));
}

#[test]
fn test_no_index_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir);
    let out = dir.path().join("out");

    let output = swagmark(&[&input, Path::new("--output"), &out, Path::new("--no-index")]);
    assert!(output.status.success());
    assert!(out.join("ping.md").exists());
    assert!(!out.join("README.md").exists());
}

#[test]
fn test_missing_input_argument_is_usage_error() {
    let output = swagmark(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_errors_are_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");

    let output = swagmark(&[&missing, Path::new("-o"), &dir.path().join("out")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Input not found: "), "{}", stderr);
}

#[test]
fn test_empty_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let specs = dir.path().join("specs");
    fs::create_dir(&specs).unwrap();

    let output = swagmark(&[&specs, Path::new("-o"), &dir.path().join("out")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No YAML files found"));
}
