use thiserror::Error;

/// Result type alias for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Typed failure surfaced to the caller of any resolver operation.
///
/// Every variant carries the offending field or id so the transport can
/// report a structured error. `StoreUnavailable` is the only variant a
/// caller may reasonably retry; all other variants are permanent for the
/// given input.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{relation} reference {id} does not resolve")]
    ReferenceNotFound { relation: &'static str, id: i64 },

    #[error("duplicate value for {field}: {value}")]
    DuplicateKey { field: &'static str, value: String },

    #[error("cannot delete {entity} {id}: {dependents} dependent {relation} row(s) exist")]
    ReferentialConflict {
        entity: &'static str,
        id: i64,
        relation: &'static str,
        dependents: usize,
    },

    #[error("invalid argument {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Error types for the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<sled::Error> for StoreError {
    fn from(error: sled::Error) -> Self {
        StoreError::Database(error.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Serialization(error.to_string())
    }
}

/// Storage failures reach the caller as `StoreUnavailable`.
impl From<StoreError> for ResolveError {
    fn from(error: StoreError) -> Self {
        ResolveError::StoreUnavailable(error.to_string())
    }
}

impl From<sled::Error> for ResolveError {
    fn from(error: sled::Error) -> Self {
        ResolveError::StoreUnavailable(error.to_string())
    }
}
