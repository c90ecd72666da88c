//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while validating a fetched perk payload.
///
/// `index` is the record's zero-based position in the payload, reported the
/// way a parser reports line numbers.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required field was absent from the payload
    #[error("Record {index}: missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// A required field was present but empty
    #[error("Record {index}: empty field '{field}'")]
    EmptyField { index: usize, field: &'static str },

    /// Two records in the same payload share an id
    #[error("Duplicate perk id: {id}")]
    DuplicateId { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
