//! Error types for ingestion, analysis, and report output.
//!
//! Analysis itself never fails: malformed quoting, non-numeric cells and
//! empty inputs all degrade to well-defined values. The errors here cover the
//! edges of the pipeline, where files enter (unsupported kinds), where a report
//! is requested (nothing to report on), and where output touches the disk.
//!
//! ```
//! use datareport::error::ReportError;
//!
//! fn describe(err: &ReportError) -> &'static str {
//!     match err {
//!         ReportError::UnsupportedFileType { .. } => "rejected at upload",
//!         ReportError::NoFiles => "nothing to analyse",
//!         _ => "other",
//!     }
//! }
//! ```

use std::fmt;

/// Main error type for datareport operations.
#[derive(Debug)]
pub enum ReportError {
    /// File is neither `.csv`/`.txt` nor declared as `text/csv`/`text/plain`.
    UnsupportedFileType {
        name: String,
        declared_kind: Option<String>,
    },

    /// A report was requested for an empty upload collection.
    NoFiles,

    /// I/O errors (reading uploads, writing reports)
    Io(std::io::Error),

    /// Configuration errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFileType {
                name,
                declared_kind: Some(kind),
            } => write!(
                f,
                "Unsupported file type: {name} ({kind}); only .txt and .csv files are accepted"
            ),
            Self::UnsupportedFileType {
                name,
                declared_kind: None,
            } => write!(
                f,
                "Unsupported file type: {name}; only .txt and .csv files are accepted"
            ),
            Self::NoFiles => write!(
                f,
                "No files uploaded; add at least one file to generate a report"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for ReportError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for datareport operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ReportError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: ReportError = e.into();
            ReportError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: ReportError = e.into();
            ReportError::Other(format!("{}: {}", f(), err))
        })
    }
}
