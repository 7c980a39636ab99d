//! Error types for the conversion pipeline.

use std::io;
use std::path::PathBuf;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can end a conversion run
///
/// Every variant is unrecoverable at the point of detection: there is no
/// fallback font, no partial export and no retry. Callers match on the
/// variant to pick their own exit-code and messaging policy.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The configured font could not be opened or parsed
    #[error("failed to load font {}: {reason}", .path.display())]
    FontUnavailable { path: PathBuf, reason: String },

    /// The input produced zero non-empty glyphs, so there is nothing to export
    #[error("no valid characters to create mesh")]
    EmptyResult,

    /// The STL writer failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn font(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::FontUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: &std::path::Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
