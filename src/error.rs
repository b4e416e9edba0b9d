//! Validation error taxonomy
//!
//! Every error in this module is recoverable: [`crate::FileProcessor`] catches
//! it, reports it through the sink and returns normally.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons a processing request is rejected before the file is opened
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// The file name is absent or falsy
    #[error("File name is missing.")]
    MissingName,

    /// The file data is not a string
    #[error("File data must be a string.")]
    InvalidType,

    /// The file data is a string containing only whitespace
    #[error("File data cannot be empty.")]
    EmptyData,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingName => ErrorKind::MissingName,
            ValidationError::InvalidType => ErrorKind::InvalidType,
            ValidationError::EmptyData => ErrorKind::EmptyData,
        }
    }
}

/// Stable names for each validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "MissingNameError")]
    MissingName,
    #[serde(rename = "InvalidTypeError")]
    InvalidType,
    #[serde(rename = "EmptyDataError")]
    EmptyData,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingName => "MissingNameError",
            ErrorKind::InvalidType => "InvalidTypeError",
            ErrorKind::EmptyData => "EmptyDataError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
