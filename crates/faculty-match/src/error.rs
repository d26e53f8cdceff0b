//! Error types for matcher configuration.
//!
//! Resolution itself never fails: invalid, unmatched and ambiguous queries are
//! reported through [`faculty_model::MatchResult`]. These errors only surface
//! while building a resolver from configuration data.

use faculty_model::ModelError;
use thiserror::Error;

/// Errors from building matcher components.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatchError {
    /// Acceptance threshold outside `[0, 1]`.
    #[error("acceptance threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// Fuzzy floor outside `[0, fuzzy ceiling)`.
    #[error("fuzzy minimum similarity must be within [0, {ceiling}), got {value}")]
    InvalidFuzzySimilarity {
        /// The configured value.
        value: f64,
        /// Highest confidence a fuzzy match may report.
        ceiling: f64,
    },

    /// A fallback table key that is not exactly one character.
    #[error("fallback table key must be a single character, got '{0}'")]
    InvalidFallbackKey(String),

    /// An override with a blank key.
    #[error("override for '{faculty_id}' has an empty key")]
    EmptyOverrideKey {
        /// Target of the offending override.
        faculty_id: String,
    },

    /// Two overrides resolve the same key to different faculty ids.
    #[error("override key '{key}' maps to both '{existing}' and '{conflicting}'")]
    ConflictingOverride {
        /// The lookup key both overrides produce.
        key: String,
        /// Target of the override seen first.
        existing: String,
        /// Target of the override seen later.
        conflicting: String,
    },

    /// Roster validation failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl MatchError {
    /// Get the faculty id associated with this error, if any.
    pub fn faculty_id(&self) -> Option<&str> {
        match self {
            Self::EmptyOverrideKey { faculty_id } => Some(faculty_id),
            Self::ConflictingOverride { conflicting, .. } => Some(conflicting),
            Self::Model(ModelError::DuplicateFacultyId(id)) => Some(id),
            _ => None,
        }
    }
}
