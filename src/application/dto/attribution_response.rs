use crate::attribution::domain::AttributionModel;

/// AttributionResponse - Response DTO from the attribution use case
#[derive(Debug, Clone)]
pub struct AttributionResponse {
    /// Render-ready model; `None` for a dry run
    pub model: Option<AttributionModel>,
    /// Number of components parsed from the SBOM
    pub component_count: usize,
    /// Number of components removed by the exclusion rules
    pub excluded_count: usize,
    /// Exclusion patterns that matched no component
    pub unmatched_patterns: Vec<String>,
}

impl AttributionResponse {
    pub fn is_dry_run(&self) -> bool {
        self.model.is_none()
    }
}
