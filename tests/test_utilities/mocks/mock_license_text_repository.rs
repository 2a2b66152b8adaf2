use sbom_notice::prelude::*;
use std::collections::HashMap;

/// Mock LicenseTextRepository for testing
#[derive(Default)]
pub struct MockLicenseTextRepository {
    texts: HashMap<String, String>,
    failing: Vec<String>,
}

impl MockLicenseTextRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, license_id: &str, text: &str) -> Self {
        self.texts.insert(license_id.to_string(), text.to_string());
        self
    }

    pub fn with_failure(mut self, license_id: &str) -> Self {
        self.failing.push(license_id.to_string());
        self
    }
}

impl LicenseTextRepository for MockLicenseTextRepository {
    fn find_license_text(&self, license_id: &str) -> Result<Option<String>> {
        if self.failing.iter().any(|id| id == license_id) {
            anyhow::bail!("Mock license text failure for {}", license_id);
        }
        Ok(self.texts.get(license_id).cloned())
    }
}
