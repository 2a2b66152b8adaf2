use crate::ports::outbound::OutputPresenter;
use crate::shared::error::AttributionError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing an artifact into the output directory
///
/// Missing parent directories (e.g. `third_party/`) are created on demand.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn ensure_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| AttributionError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!(
                        "Failed to create output directory {}: {}",
                        parent.display(),
                        e
                    ),
                })?;
            }
        }
        Ok(())
    }

    /// Refuses to write through a symbolic link or onto a directory
    fn validate_output_security(&self) -> Result<()> {
        if fs::symlink_metadata(&self.output_path).is_err() {
            // Nothing there yet
            return Ok(());
        }

        validate_not_symlink(&self.output_path, "write").map_err(|e| {
            AttributionError::SecurityError {
                path: self.output_path.clone(),
                reason: e.to_string(),
                hint: "Remove the link or choose a different output directory".to_string(),
            }
        })?;

        if self.output_path.is_dir() {
            return Err(AttributionError::FileWriteError {
                path: self.output_path.clone(),
                details: "Output path is a directory".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_output_security()?;
        self.ensure_parent_directory()?;

        fs::write(&self.output_path, content).map_err(|e| AttributionError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing an artifact to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
