use crate::attribution::domain::Component;
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading components from an SBOM document
///
/// This port abstracts where the SBOM comes from and how it is decoded.
/// The attribution core only ever sees the resulting component list.
pub trait SbomReader {
    /// Reads and decodes the SBOM at `sbom_path`
    ///
    /// # Returns
    /// The components in document order. A document without a `components`
    /// array yields an empty list.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The SBOM file does not exist or cannot be read
    /// - The content is not a CycloneDX JSON document
    fn read_components(&self, sbom_path: &Path) -> Result<Vec<Component>>;
}
