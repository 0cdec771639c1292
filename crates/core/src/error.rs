//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants are deterministic, local failures: construction is
/// all-or-nothing and lookups have no transient failure mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string did not name any member of the color enumeration.
    #[error("invalid color name: {0:?}")]
    InvalidColorName(String),

    /// A lookup targeted a key that is not present.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_color_name(name: impl Into<String>) -> Self {
        Self::InvalidColorName(name.into())
    }

    pub fn not_found(what: impl core::fmt::Display) -> Self {
        Self::NotFound(what.to_string())
    }
}
