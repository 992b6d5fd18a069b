//! Error types for plotassist.
//!
//! One unified error enum built with `thiserror`; all failures are synchronous
//! and surfaced to the immediate caller — there is no retry or recovery path.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for plotassist operations.
pub type Result<T> = std::result::Result<T, PlotAssistError>;

/// Errors that can occur in plotassist.
#[derive(Debug, Error)]
pub enum PlotAssistError {
    /// The backing data file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The backing data file exists but could not be opened.
    #[error("failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The MAT parser rejected the file contents.
    #[error("MAT-file error: {0}")]
    MatParse(String),

    /// A variable was requested that the data file does not provide.
    #[error("variable '{name}' not found in {path}")]
    VariableNotFound { name: String, path: PathBuf },

    /// Declared dimensions are inconsistent with the stored data.
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// A label key was added twice.
    #[error("key {key} already exists")]
    DuplicateKey { key: String },

    /// A label key was looked up but never added.
    #[error("key {key} not found")]
    KeyNotFound { key: String },

    /// Malformed add-time input (e.g. empty label text).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An auto-assignment pool has been depleted of unique values.
    #[error("argument pool '{name}' has no remaining values")]
    PoolExhausted { name: String },
}

impl PlotAssistError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a VariableNotFound error.
    pub fn variable_not_found(name: impl Into<String>, path: PathBuf) -> Self {
        Self::VariableNotFound {
            name: name.into(),
            path,
        }
    }

    /// Create a DuplicateKey error from any debug-printable key.
    pub fn duplicate_key(key: &impl std::fmt::Debug) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }

    /// Create a KeyNotFound error from any debug-printable key.
    pub fn key_not_found(key: &impl std::fmt::Debug) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a PoolExhausted error.
    pub fn pool_exhausted(name: impl Into<String>) -> Self {
        Self::PoolExhausted { name: name.into() }
    }
}

impl From<matfile::Error> for PlotAssistError {
    fn from(err: matfile::Error) -> Self {
        Self::MatParse(err.to_string())
    }
}
