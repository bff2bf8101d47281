//! Shared input validation helpers.
//!
//! DTOs derive [`validator::Validate`] for per-field rules; handlers call
//! [`validate_input`] to turn failures into [`CoreError::Validation`].

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Run the derived field validations for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}

/// Field validator rejecting empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Trim every value, drop empty ones and remove duplicates, keeping the
/// first occurrence of each.
pub fn dedup_trimmed<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() || out.iter().any(|v| v == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

/// Trim an optional free-text value, mapping blank input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
