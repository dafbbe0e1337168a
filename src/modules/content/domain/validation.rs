//
// ──────────────────────────────────────────────────────────
// Input validation
// ──────────────────────────────────────────────────────────
// Runs at the input boundary, before anything reaches the store.
// Enum fields are checked by serde while decoding the request body;
// this module covers what the type system can't (ranges, blank strings).
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Same as [`require_non_empty`] but only when the field was supplied.
pub fn non_empty_if_present(
    field: &'static str,
    value: Option<&String>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_non_empty(field, v),
        None => Ok(()),
    }
}

pub fn require_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}
