use crate::adapters::outbound::formatters::{HtmlFormatter, NoticeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::AttributionFormatter;

/// Factory for creating attribution formatters
///
/// Selects the formatter adapter for an output format. `OutputFormat::All`
/// has no single formatter; callers expand it with `OutputFormat::artifacts`.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for a single-artifact format
    ///
    /// # Examples
    /// ```
    /// use sbom_notice::application::dto::OutputFormat;
    /// use sbom_notice::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html).unwrap();
    /// assert_eq!(formatter.file_name(), "licenses.html");
    /// ```
    pub fn create(format: OutputFormat) -> Option<Box<dyn AttributionFormatter>> {
        match format {
            OutputFormat::Notice => Some(Box::new(NoticeFormatter::new())),
            OutputFormat::Html => Some(Box::new(HtmlFormatter::new())),
            OutputFormat::All => None,
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Notice => "📝 Rendering NOTICE file...",
            OutputFormat::Html => "📝 Rendering HTML license report...",
            OutputFormat::All => "📝 Rendering attribution artifacts...",
        }
    }
}
