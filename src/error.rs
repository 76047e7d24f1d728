//! Validation errors for theme resolution and settings construction.

use thiserror::Error;

/// Error returned when a raw name matches no theme variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no matching variant for theme name '{value}'")]
pub struct NoMatchingVariant {
    /// The raw value that failed to resolve.
    pub value: String,
}

/// Error returned when settings construction rejects a field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}' for field '{field}': {reason}")]
pub struct ValidationError {
    /// Name of the rejected field.
    pub field: &'static str,
    /// The offending raw value.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}
