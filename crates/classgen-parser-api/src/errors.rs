use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting class descriptors
///
/// Only [`ExtractError::NoClassFound`] and the file-level variants reach
/// callers of the extraction entry points. `MalformedClassName` and
/// `UnresolvedDeclarator` describe fragments that are dropped during a scan
/// and recorded in [`ExtractionMetrics`](crate::ExtractionMetrics).
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The buffer contains no parseable class or struct
    #[error("No class or struct found")]
    NoClassFound,

    /// A candidate declaration has unbalanced or misordered angle brackets
    #[error("Malformed class name: {0}")]
    MalformedClassName(String),

    /// A member line could not be split into a type and declarator names
    #[error("Unresolved declarator: {line}")]
    UnresolvedDeclarator {
        /// The offending declaration text
        line: String,
    },

    /// Failed to read a source file
    #[error("IO error reading {0}: {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// Source file exceeds the configured size limit
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    SourceTooLarge(PathBuf, usize),
}

impl ExtractError {
    pub fn unresolved(line: impl Into<String>) -> Self {
        Self::UnresolvedDeclarator { line: line.into() }
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
