//! The storage abstraction: a string-keyed get/set store.
//!
//! The core never performs I/O itself; callers hand it deserialized
//! structures and commit what it returns. This trait is the seam where a
//! browser-local store, a file, or a test map plug in.

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed (I/O, quota, ...). Surfaced to the user;
    /// the in-memory state stays as it was.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A value failed a domain check before being persisted.
    #[error("validation error: {0}")]
    Validation(String),

    /// Persisted payload could not be encoded or decoded. Callers fall
    /// back to an empty value and surface a notice.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}

/// A durable string-keyed key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
