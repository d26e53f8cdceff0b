use thiserror::Error;

/// Errors raised while building the faculty data model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Two roster entries share the same stable id.
    #[error("duplicate faculty id: {0}")]
    DuplicateFacultyId(String),

    /// A roster entry has a blank id.
    #[error("faculty record '{first_name} {last_name}' has an empty id")]
    EmptyFacultyId {
        /// First name of the offending record.
        first_name: String,
        /// Last name of the offending record.
        last_name: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
