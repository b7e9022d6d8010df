//! Error types for database operations.

use thiserror::Error;

/// Result type for database operations.
pub type DbResult<T> = std::result::Result<T, DatabaseError>;

/// Errors raised by [`crate::db::NeoDatabase`] lookups and exports.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A handle did not resolve to a stored entity.
    #[error("no {entity} with id {id}")]
    NotFound { entity: &'static str, id: usize },

    /// An approach was exported before its link was resolved.
    #[error("close approach of {designation:?} is not linked to a known NEO")]
    Unlinked { designation: String },
}
