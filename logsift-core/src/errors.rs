//! errors.rs - Custom error types for the logsift-core library.
//!
//! This module defines a structured error enum for the library, covering
//! the two fatal load conditions (missing input, unparseable input) that a
//! caller can handle programmatically.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

/// This enum represents all possible error types in the `logsift-core`
/// library.
///
/// `#[non_exhaustive]` reserves the right to add variants in future
/// versions; consumers must keep a wildcard arm when matching.
///
/// Note that malformed *individual records* are deliberately absent from
/// this taxonomy: they degrade to empty-field defaults at decode time and
/// never abort an analysis.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("Input capture not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to parse capture file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
