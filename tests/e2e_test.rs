/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Lays out `third_party/sbom` and `third_party/licenses` as the defaults expect.
fn create_workspace(dir: &Path) {
    let fixtures = fixtures_path();
    let third_party = dir.join("third_party");
    fs::create_dir_all(third_party.join("licenses")).unwrap();
    fs::copy(fixtures.join("sample.cdx.json"), third_party.join("sbom")).unwrap();
    for name in ["MIT.txt", "Apache-2.0.txt"] {
        fs::copy(
            fixtures.join("licenses").join(name),
            third_party.join("licenses").join(name),
        )
        .unwrap();
    }
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("sbom-notice").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("sbom-notice").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("sbom-notice")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("sbom-notice")
            .args(["-f", "markdown"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - missing SBOM
    #[test]
    fn test_exit_code_missing_sbom() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("SBOM file not found"));
    }

    /// Exit code 3: Application error - invalid filter pattern
    #[test]
    fn test_exit_code_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        create_workspace(dir.path());

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .args(["--exclude-purl", "(unclosed"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid purlRegex filter pattern"));

        assert!(!dir.path().join("third_party/NOTICE").exists());
    }
}

#[test]
fn test_e2e_default_outputs() {
    let dir = TempDir::new().unwrap();
    create_workspace(dir.path());

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .args(["-n", "sample-app"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Detected 4 component(s)"));

    let notice = fs::read_to_string(dir.path().join("third_party/NOTICE")).unwrap();
    assert!(notice.contains("sample-app includes the third-party software listed below."));
    assert!(notice.contains("serde 1.0.200"));
    assert!(notice.contains("  License: MIT, Apache-2.0\n"));
    assert!(notice.contains("Permission is hereby granted"));
    assert!(notice.contains("All rights reserved by Acme Corp."));

    let html = fs::read_to_string(dir.path().join("third_party/licenses.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("https://www.npmjs.com/package/left-pad/v/1.3.0"));
}

#[test]
fn test_e2e_exclusion_flags() {
    let dir = TempDir::new().unwrap();
    create_workspace(dir.path());

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .args([
            "--exclude-purl",
            "^pkg:npm/",
            "--exclude-supplier",
            "^Acme",
            "--exclude-supplier",
            "^Nobody$",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Excluded 2 component(s)"))
        .stderr(predicate::str::contains(
            "Exclude pattern '^Nobody$' did not match any components.",
        ));

    let notice = fs::read_to_string(dir.path().join("third_party/NOTICE")).unwrap();
    assert!(!notice.contains("left-pad"));
    assert!(!notice.contains("internal-lib"));
    assert!(!notice.contains("WTFPL"));
    assert!(notice.contains("requests 2.31.0"));
}

#[test]
fn test_e2e_stdout_notice() {
    let dir = TempDir::new().unwrap();
    create_workspace(dir.path());

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .args(["-f", "notice", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "THIRD-PARTY SOFTWARE NOTICES AND INFORMATION",
        ))
        .stderr(predicate::str::contains("LICENSE OVERVIEW").not());

    assert!(!dir.path().join("third_party/NOTICE").exists());
}

#[test]
fn test_e2e_stdout_requires_single_format() {
    let dir = TempDir::new().unwrap();
    create_workspace(dir.path());

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .arg("--stdout")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--stdout needs a single format"));
}

#[test]
fn test_e2e_custom_paths_and_template() {
    let dir = TempDir::new().unwrap();
    let fixtures = fixtures_path();

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .arg("-s")
        .arg(fixtures.join("sample.cdx.json"))
        .arg("-l")
        .arg(fixtures.join("licenses"))
        .arg("--notice-template")
        .arg(fixtures.join("templates/notice.tpl"))
        .args(["-o", "dist/attribution", "-n", "sample-app", "-f", "notice"])
        .assert()
        .success();

    let notice = fs::read_to_string(dir.path().join("dist/attribution/NOTICE")).unwrap();
    assert!(notice.starts_with("NOTICE for sample-app\n"));
    assert!(notice.contains("-- end of notice ("));
    assert!(!dir.path().join("dist/attribution/licenses.html").exists());
}

#[test]
fn test_e2e_template_without_marker() {
    let dir = TempDir::new().unwrap();
    create_workspace(dir.path());

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .arg("--html-template")
        .arg(fixtures_path().join("templates/no_marker.tpl"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not contain"));
}

#[test]
fn test_e2e_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    create_workspace(dir.path());

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration validated"));

    assert!(!dir.path().join("third_party/NOTICE").exists());
    assert!(!dir.path().join("third_party/licenses.html").exists());
}

#[test]
fn test_e2e_invalid_sbom() {
    let dir = TempDir::new().unwrap();
    let sbom_path = dir.path().join("bom.json");
    fs::write(&sbom_path, "{ this is not json").unwrap();

    cargo_bin_cmd!("sbom-notice")
        .current_dir(dir.path())
        .args(["-s", "bom.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse SBOM file"));
}
