use crate::shared::Result;
use std::path::Path;

/// TemplateReader port for loading user-supplied output templates
pub trait TemplateReader {
    /// Reads the template at `path`
    ///
    /// # Errors
    /// Returns an error if the template cannot be read or lacks the
    /// `{{content}}` marker
    fn read_template(&self, path: &Path) -> Result<String>;
}
