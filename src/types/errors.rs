use thiserror::Error;

use crate::types::identifiers::SpellId;

/// Failure of an external collaborator (catalog or record store).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Duplicate spell ID: {0}")]
    DuplicateSpellId(SpellId),
}

#[derive(Debug, Error)]
pub enum SelectionError {
    /// A daily record points at a spell the catalog does not hold.
    #[error("Spell {0} referenced by a daily record is not in the catalog")]
    NotFound(SpellId),

    /// Nothing to play with: the catalog is empty or could not be read.
    #[error("Spell catalog is empty")]
    EmptyCatalog,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Guess does not reference a known spell")]
    InvalidCandidate,
}
