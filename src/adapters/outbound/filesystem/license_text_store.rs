use crate::ports::outbound::LicenseTextRepository;
use crate::shared::error::AttributionError;
use crate::shared::security::{is_safe_file_stem, read_regular_file};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Extension tried first when looking up a license text
const LICENSE_TEXT_EXTENSION: &str = "txt";

/// FileSystemLicenseTextStore adapter serving license texts from a directory
///
/// A text for license `ID` is stored as `<dir>/ID.txt` or `<dir>/ID`, the
/// layout of the `third_party/licenses` directory.
pub struct FileSystemLicenseTextStore {
    licenses_dir: PathBuf,
}

impl FileSystemLicenseTextStore {
    pub fn new(licenses_dir: PathBuf) -> Self {
        Self { licenses_dir }
    }

    pub fn licenses_dir(&self) -> &Path {
        &self.licenses_dir
    }

    fn candidates(&self, license_id: &str) -> [PathBuf; 2] {
        [
            self.licenses_dir
                .join(format!("{}.{}", license_id, LICENSE_TEXT_EXTENSION)),
            self.licenses_dir.join(license_id),
        ]
    }
}

impl LicenseTextRepository for FileSystemLicenseTextStore {
    fn find_license_text(&self, license_id: &str) -> Result<Option<String>> {
        if !is_safe_file_stem(license_id) {
            return Ok(None);
        }

        for path in self.candidates(license_id) {
            if !path.exists() {
                continue;
            }
            let text = read_regular_file(&path, "license text").map_err(|e| {
                AttributionError::FileReadError {
                    path: path.clone(),
                    details: e.to_string(),
                }
            })?;
            return Ok(Some(text));
        }

        Ok(None)
    }
}
