use crate::shared::Result;

/// LicenseTextRepository port for looking up full license texts
///
/// License texts are not part of the attribution model builder's input;
/// they are attached afterwards for blocks whose SBOM entries carried none.
pub trait LicenseTextRepository {
    /// Finds the full text for a license key
    ///
    /// # Returns
    /// `Ok(None)` when no text is stored for `license_id`
    ///
    /// # Errors
    /// Returns an error if a stored text exists but cannot be read
    fn find_license_text(&self, license_id: &str) -> Result<Option<String>>;
}
