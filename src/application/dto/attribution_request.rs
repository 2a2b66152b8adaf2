use crate::attribution::domain::Filters;
use std::path::PathBuf;

/// AttributionRequest - Request DTO for the attribution use case
#[derive(Debug, Clone)]
pub struct AttributionRequest {
    /// Path to the CycloneDX JSON SBOM
    pub sbom_path: PathBuf,
    /// Exclusion rules applied before the model is built
    pub filters: Filters,
    /// Validate filters and parse the SBOM without building the model
    pub dry_run: bool,
}

impl AttributionRequest {
    pub fn new(sbom_path: PathBuf) -> Self {
        Self {
            sbom_path,
            filters: Filters::default(),
            dry_run: false,
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
