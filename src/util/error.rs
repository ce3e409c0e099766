// logtab - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error carries the path it relates to so the top-level message is
// actionable without a backtrace.

use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Top-level error type for all logtab operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogTabError {
    /// Log file parsing failed.
    Parse(ParseError),

    /// Writing the summary failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogTabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogTabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors related to log file parsing.
#[derive(Debug)]
pub enum ParseError {
    /// A result line matched, but its instance path does not end in a
    /// parseable `_<number>` segment.
    MalformedInstance {
        file: PathBuf,
        line_number: u64,
        instance_path: String,
        token: String,
        source: Option<ParseIntError>,
    },

    /// File encoding is not valid UTF-8.
    InvalidEncoding {
        file: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInstance {
                file,
                line_number,
                instance_path,
                token,
                source,
            } => {
                write!(
                    f,
                    "'{}' line {line_number}: malformed instance '{instance_path}': \
                     cannot derive instance number from '{token}'",
                    file.display()
                )?;
                if let Some(e) = source {
                    write!(f, " ({e})")?;
                }
                Ok(())
            }
            Self::InvalidEncoding { file, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", file.display())
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedInstance { source, .. } => {
                source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
            }
            Self::InvalidEncoding { source, .. } => Some(source),
        }
    }
}

impl From<ParseError> for LogTabError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing the CSV summary.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for LogTabError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for logtab results.
pub type Result<T> = std::result::Result<T, LogTabError>;
