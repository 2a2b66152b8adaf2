/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from a config file on disk through CLI
/// invocation to the generated artifacts, using `assert_cmd` and `tempfile`
/// for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy the sample SBOM to `<dir>/<relative>`.
fn write_sbom(dir: &Path, relative: &str) {
    let target = dir.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::copy(fixtures_path().join("sample.cdx.json"), target).unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_filters() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "third_party/sbom");

        write_config(
            &dir.path().join("sbom-notice.config.yml"),
            r#"
repo_name: discovered-app
filters:
  purlRegex:
    - "^pkg:cargo/"
"#,
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .args(["-f", "notice"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Excluded 1 component(s)"));

        let notice = fs::read_to_string(dir.path().join("third_party/NOTICE")).unwrap();
        assert!(notice.contains("discovered-app includes"));
        assert!(!notice.contains("serde"));
        assert!(notice.contains("left-pad"));
    }

    #[test]
    fn test_auto_discovery_out_dir_moves_defaults() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "vendor/sbom");

        write_config(&dir.path().join("sbom-notice.config.yml"), "out_dir: vendor\n");

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .success();

        assert!(dir.path().join("vendor/NOTICE").exists());
        assert!(dir.path().join("vendor/licenses.html").exists());
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "third_party/sbom");

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .success();

        assert!(dir.path().join("third_party/NOTICE").exists());
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "boms/app.cdx.json");

        let config_path = dir.path().join("attribution.yml");
        write_config(
            &config_path,
            r#"
sbom_path: boms/app.cdx.json
out_dir: dist
format: html
spdx_version: v3.26.0
"#,
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success();

        let html = fs::read_to_string(dir.path().join("dist/licenses.html")).unwrap();
        assert!(html.contains("SPDX License List v3.26.0"));
        assert!(!dir.path().join("dist/NOTICE").exists());
    }

    #[test]
    fn test_explicit_config_missing() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .args(["--config", "missing.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-notice.config.yml"),
            "filters: [[[broken",
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_pattern_in_config() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "third_party/sbom");
        write_config(
            &dir.path().join("sbom-notice.config.yml"),
            "filters:\n  suppliers:\n    - \"(\"\n",
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid suppliers filter pattern"));

        assert!(!dir.path().join("third_party/NOTICE").exists());
    }

    #[test]
    fn test_misspelled_filter_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "third_party/sbom");
        write_config(
            &dir.path().join("sbom-notice.config.yml"),
            "filters:\n  purl_regexes:\n    - \"^pkg:npm/\"\n",
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("unknown field `purl_regexes`"));

        assert!(!dir.path().join("third_party/NOTICE").exists());
    }

    #[test]
    fn test_unknown_fields_warn() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "third_party/sbom");
        write_config(
            &dir.path().join("sbom-notice.config.yml"),
            "repo_name: app\nexclude_packages:\n  - foo\n",
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'exclude_packages' will be ignored.",
            ));
    }
}

// ============================================================================
// CLI / Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config_values() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "third_party/sbom");
        write_config(
            &dir.path().join("sbom-notice.config.yml"),
            "repo_name: from-config\nformat: html\n",
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .args(["-n", "from-cli", "-f", "notice"])
            .assert()
            .success();

        let notice = fs::read_to_string(dir.path().join("third_party/NOTICE")).unwrap();
        assert!(notice.contains("from-cli includes"));
        assert!(!dir.path().join("third_party/licenses.html").exists());
    }

    #[test]
    fn test_cli_filters_append_to_config_filters() {
        let dir = TempDir::new().unwrap();
        write_sbom(dir.path(), "third_party/sbom");
        write_config(
            &dir.path().join("sbom-notice.config.yml"),
            "filters:\n  purl_regex:\n    - \"^pkg:cargo/\"\n",
        );

        cargo_bin_cmd!("sbom-notice")
            .current_dir(dir.path())
            .args(["-f", "notice", "--exclude-purl", "^pkg:pypi/"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Excluded 2 component(s)"));

        let notice = fs::read_to_string(dir.path().join("third_party/NOTICE")).unwrap();
        assert!(!notice.contains("serde"));
        assert!(!notice.contains("requests"));
        assert!(notice.contains("left-pad"));
    }
}
