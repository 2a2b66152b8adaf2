use crate::shared::Result;

/// OutputPresenter port for delivering a rendered artifact
///
/// This port abstracts the destination (a file under the output directory,
/// stdout, etc.) of the NOTICE text or the HTML report.
pub trait OutputPresenter {
    /// Delivers the rendered artifact
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the destination fails
    /// - The destination is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
