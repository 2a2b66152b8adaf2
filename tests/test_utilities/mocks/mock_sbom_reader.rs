use sbom_notice::prelude::*;
use std::path::Path;

/// Mock SbomReader for testing
pub struct MockSbomReader {
    pub components: Vec<Component>,
    pub should_fail: bool,
}

impl MockSbomReader {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            components: Vec::new(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_components(&self, _sbom_path: &Path) -> Result<Vec<Component>> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM read failure");
        }
        Ok(self.components.clone())
    }
}
