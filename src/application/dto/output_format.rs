/// Output format enumeration for attribution artifacts
///
/// Shared by the CLI (format selection) and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plaintext NOTICE file
    Notice,
    /// HTML license report
    Html,
    /// Both artifacts (default)
    All,
}

impl OutputFormat {
    /// Expands the selection into the single-artifact formats it covers
    pub fn artifacts(self) -> Vec<OutputFormat> {
        match self {
            OutputFormat::All => vec![OutputFormat::Notice, OutputFormat::Html],
            single => vec![single],
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notice" | "txt" => Ok(OutputFormat::Notice),
            "html" => Ok(OutputFormat::Html),
            "all" => Ok(OutputFormat::All),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'notice', 'html' or 'all'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Notice => write!(f, "notice"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::All => write!(f, "all"),
        }
    }
}
