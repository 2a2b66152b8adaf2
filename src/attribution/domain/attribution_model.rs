//! Output model handed to the NOTICE and HTML formatters
//!
//! These structs are flat, render-ready views. They are produced once per run
//! by `AttributionModelBuilder` and not modified after license texts have been
//! resolved.

/// A surviving component as listed in the NOTICE section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutComponent {
    pub name: String,
    pub version: String,
    pub purl: String,
    /// Registry page derived from the purl; empty when none is known
    pub url: String,
    /// License keys in the order the SBOM lists them, without duplicates
    pub license_ids: Vec<String>,
    pub copyright: String,
}

/// All components distributed under one license key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseBlock {
    pub id: String,
    pub name: String,
    pub text: String,
    pub used_by: Vec<OutComponent>,
}

impl LicenseBlock {
    /// Name for display, falling back to the id when no name was supplied
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Summary row: how many components use a license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewItem {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// A license entry skipped because it had neither an expression nor an id/name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLicenseChoice {
    pub component: String,
    pub version: String,
    /// Position of the entry in the component's license list
    pub index: usize,
}

/// The complete attribution model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionModel {
    /// RFC 3339 build timestamp
    pub generated_at: String,
    pub overview: Vec<OverviewItem>,
    /// Sorted by id (ordinal byte order)
    pub licenses: Vec<LicenseBlock>,
    /// Surviving components in SBOM order
    pub notices: Vec<OutComponent>,
    pub malformed_licenses: Vec<MalformedLicenseChoice>,
}

impl AttributionModel {
    pub fn license(&self, id: &str) -> Option<&LicenseBlock> {
        self.licenses.iter().find(|block| block.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
