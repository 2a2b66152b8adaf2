/// ProgressReporter port for user-facing status output
///
/// All diagnostics of a run (progress, per-record warnings, completion) go
/// through this port so generated artifacts on stdout stay clean.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through a batch of work
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning about a single record that was degraded, not fatal
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
