//! Ordered input checks
//!
//! The checks run in a fixed order and the first failure wins:
//!
//! 1. the file name must be truthy ([`is_truthy`])
//! 2. the file data must be a string
//! 3. the file data must not be blank after trimming

use crate::error::ValidationError;
use crate::input::{display_value, is_truthy};
use serde_json::Value;

/// Inputs that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    /// File name as it appears in report lines
    pub name: String,
    /// File content, untrimmed
    pub data: String,
}

pub fn validate(
    file_name: Option<&Value>,
    file_data: Option<&Value>,
) -> Result<ValidatedInput, ValidationError> {
    let name = match file_name {
        Some(value) if is_truthy(Some(value)) => display_value(value),
        _ => return Err(ValidationError::MissingName),
    };

    let data = match file_data {
        Some(Value::String(s)) => s,
        _ => return Err(ValidationError::InvalidType),
    };

    if data.trim().is_empty() {
        return Err(ValidationError::EmptyData);
    }

    Ok(ValidatedInput {
        name,
        data: data.clone(),
    })
}
