//! Configuration for sbom-notice.
//!
//! `AttributionConfig` is the explicit configuration value a run works with.
//! It starts from built-in defaults, is overlaid by an optional YAML
//! `sbom-notice.config.yml` file, and finally by command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::attribution::domain::Filters;
use crate::attribution::services::ExcludeComponents;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-notice.config.yml";

const DEFAULT_OUT_DIR: &str = "third_party";
const DEFAULT_SPDX_VERSION: &str = "v3.27.0";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repo_name: Option<String>,
    pub sbom_path: Option<PathBuf>,
    pub html_template_path: Option<PathBuf>,
    pub notice_template_path: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub out_licenses_dir: Option<PathBuf>,
    pub spdx_version: Option<String>,
    pub format: Option<String>,
    pub filters: Option<Filters>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; `None` leaves the configured value.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub repo_name: Option<String>,
    pub sbom_path: Option<PathBuf>,
    pub html_template_path: Option<PathBuf>,
    pub notice_template_path: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub out_licenses_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// Appended to the configured filters
    pub filters: Filters,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionConfig {
    pub repo_name: String,
    pub sbom_path: PathBuf,
    pub html_template_path: Option<PathBuf>,
    pub notice_template_path: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub out_licenses_dir: PathBuf,
    pub spdx_version: String,
    pub format: OutputFormat,
    pub filters: Filters,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        let out_dir = PathBuf::from(DEFAULT_OUT_DIR);
        Self {
            repo_name: String::new(),
            sbom_path: out_dir.join("sbom"),
            html_template_path: None,
            notice_template_path: None,
            out_licenses_dir: out_dir.join("licenses"),
            out_dir,
            spdx_version: DEFAULT_SPDX_VERSION.to_string(),
            format: OutputFormat::All,
            filters: Filters::default(),
        }
    }
}

impl AttributionConfig {
    /// Layers a config file and command-line overrides over the defaults.
    ///
    /// Command-line values win over file values. `sbom_path` and
    /// `out_licenses_dir` default to paths inside the resolved `out_dir`.
    /// Command-line filters are appended to the file's filters.
    pub fn resolve(file: Option<ConfigFile>, overrides: ConfigOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();

        let out_dir = overrides
            .out_dir
            .or(file.out_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

        let format = match (overrides.format, file.format) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(&format)
                .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e))?,
            (None, None) => OutputFormat::All,
        };

        let mut filters = file.filters.unwrap_or_default();
        filters.extend(overrides.filters);

        let config = Self {
            repo_name: overrides.repo_name.or(file.repo_name).unwrap_or_default(),
            sbom_path: overrides
                .sbom_path
                .or(file.sbom_path)
                .unwrap_or_else(|| out_dir.join("sbom")),
            html_template_path: overrides.html_template_path.or(file.html_template_path),
            notice_template_path: overrides
                .notice_template_path
                .or(file.notice_template_path),
            out_licenses_dir: overrides
                .out_licenses_dir
                .or(file.out_licenses_dir)
                .unwrap_or_else(|| out_dir.join("licenses")),
            out_dir,
            spdx_version: file
                .spdx_version
                .unwrap_or_else(|| DEFAULT_SPDX_VERSION.to_string()),
            format,
            filters,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.out_dir.as_os_str().is_empty() {
            bail!(
                "Invalid config: out_dir must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default \"{}\" directory.",
                DEFAULT_OUT_DIR
            );
        }
        if self.sbom_path.as_os_str().is_empty() {
            bail!("Invalid config: sbom_path must not be empty.");
        }
        ExcludeComponents::compile(&self.filters).context("Invalid config: filters")?;
        Ok(())
    }

    /// Path of an artifact inside the output directory
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    /// Template configured for the given single-artifact format
    pub fn template_path(&self, format: OutputFormat) -> Option<&Path> {
        match format {
            OutputFormat::Notice => self.notice_template_path.as_deref(),
            OutputFormat::Html => self.html_template_path.as_deref(),
            OutputFormat::All => None,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration file on its own.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref filters) = config.filters {
        ExcludeComponents::compile(filters).context("Invalid config: filters")?;
    }
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: format: {}", e);
        }
    }
    if let Some(ref spdx_version) = config.spdx_version {
        if spdx_version.trim().is_empty() {
            bail!(
                "Invalid config: spdx_version must not be empty.\n\n\
                 💡 Hint: Use an SPDX license list release tag such as \"{}\".",
                DEFAULT_SPDX_VERSION
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
