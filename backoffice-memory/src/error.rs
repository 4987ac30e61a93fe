use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the in-memory store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Entity {0} not found")]
    NotFound(Uuid),

    #[error("Entity {0} already exists")]
    DuplicateId(Uuid),
}
