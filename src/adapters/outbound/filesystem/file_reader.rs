use super::cyclonedx_document::Bom;
use crate::attribution::domain::Component;
use crate::ports::outbound::formatter::CONTENT_MARKER;
use crate::ports::outbound::{SbomReader, TemplateReader};
use crate::shared::error::AttributionError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading SBOMs and templates from disk
///
/// Every read goes through `read_regular_file`, which rejects symbolic
/// links, non-regular files and files over the size limit.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_components(&self, sbom_path: &Path) -> Result<Vec<Component>> {
        if !sbom_path.exists() {
            return Err(AttributionError::SbomNotFound {
                path: sbom_path.to_path_buf(),
                suggestion: "Generate a CycloneDX JSON SBOM first, or point to it with the --sbom option or the sbom_path config field.".to_string(),
            }
            .into());
        }

        let content = read_regular_file(sbom_path, "SBOM").map_err(|e| {
            AttributionError::FileReadError {
                path: sbom_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let bom = Bom::from_json(&content).map_err(|e| AttributionError::SbomParseError {
            path: sbom_path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(bom.into_components())
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, path: &Path) -> Result<String> {
        let template =
            read_regular_file(path, "template").map_err(|e| AttributionError::TemplateError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !template.contains(CONTENT_MARKER) {
            return Err(AttributionError::TemplateError {
                path: path.to_path_buf(),
                reason: format!("Template does not contain the {} marker", CONTENT_MARKER),
            }
            .into());
        }

        Ok(template)
    }
}
