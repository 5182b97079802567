//! Error types for document access.
//!
//! The document model never fails on malformed text. These errors signal a
//! caller asking for something the document does not have.

use std::fmt;

/// Errors returned by [`Document`](super::Document) accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A line index at or beyond the line count was requested.
    LineOutOfRange {
        /// The requested zero-based line index
        index: usize,
        /// Number of lines in the document
        line_count: usize,
    },
}

impl DocumentError {
    /// Returns the line index associated with this error.
    pub fn line(&self) -> usize {
        match self {
            DocumentError::LineOutOfRange { index, .. } => *index,
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::LineOutOfRange { index, line_count } => {
                write!(
                    f,
                    "Line index {} is out of range for a document with {} lines",
                    index, line_count
                )
            }
        }
    }
}

impl std::error::Error for DocumentError {}
