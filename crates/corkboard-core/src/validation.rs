//! Input validation shared by the store and its callers.
//!
//! The presentation layer is expected to reject empty names before calling
//! the store; the store independently tolerates them as no-ops. Both sides
//! use the same trim rule, defined here.

/// Error type for name/title validation failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Trims `input` and rejects whitespace-only values.
///
/// `field` names the field for the error message (e.g. "board name").
pub fn validated_name<'a>(field: &'static str, input: &'a str) -> Result<&'a str, NameError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty(field));
    }
    Ok(trimmed)
}
