//! Cross-cutting error types for the census service.
//!
//! `ValidationError` is raised while constructing entities from raw values,
//! before anything reaches storage. Storage errors (`DatabaseError`) are
//! defined in `census-db`, and the HTTP mapping lives in `census-api`.

use thiserror::Error;

/// A field value fell outside its enumerated set of allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for {field}: '{value}'. Allowed values: {allowed:?}")]
pub struct ValidationError {
    /// Name of the offending field, e.g. `sex`.
    pub field: &'static str,
    /// The rejected raw value.
    pub value: String,
    /// The complete allowed set for the field.
    pub allowed: &'static [&'static str],
}

impl ValidationError {
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>, allowed: &'static [&'static str]) -> Self {
        Self {
            field,
            value: value.into(),
            allowed,
        }
    }
}
