use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Attribution artifacts were generated
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad filter pattern, unreadable SBOM, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Which filter list a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Purl,
    Supplier,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Purl => write!(f, "purlRegex"),
            FilterField::Supplier => write!(f, "suppliers"),
        }
    }
}

/// Application-specific errors for attribution generation.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("Invalid {field} filter pattern: '{pattern}'\nDetails: {details}\n\n💡 Hint: Filter patterns are regular expressions; escape literal characters such as '.' or '+'")]
    InvalidFilterPattern {
        field: FilterField,
        pattern: String,
        details: String,
    },

    #[error("Too many {field} filter patterns: {count} (maximum: {max})")]
    TooManyFilterPatterns {
        field: FilterField,
        count: usize,
        max: usize,
    },

    #[error("{field} filter pattern is too long: {length} chars (maximum: {max})")]
    FilterPatternTooLong {
        field: FilterField,
        length: usize,
        max: usize,
    },

    #[error("SBOM file not found: {path}\n\n💡 Hint: {suggestion}")]
    SbomNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a CycloneDX JSON document")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid template: {path}\nReason: {reason}\n\n💡 Hint: Templates must contain a {{{{content}}}} marker")]
    TemplateError { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
