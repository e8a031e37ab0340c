//! Client-local key/value persistence
//!
//! The selection store and advisor session persist through [`KeyValueStore`]
//! so they run the same against browser cookies and an in-memory map.

pub mod cookie_store;
pub mod memory_store;

pub use cookie_store::CookieStore;
pub use memory_store::MemoryStore;

use chrono::Duration;

/// Key holding the saved exam selection
pub const SAVED_EXAMS_KEY: &str = "savedExams";

/// Key holding the advisor chat session id
pub const CHAT_SESSION_KEY: &str = "chatSessionId";

/// Storage adapter errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Value cannot be stored: {0}")]
    Encoding(String),
}

/// Key/value storage with per-entry expiry
pub trait KeyValueStore {
    /// Current value, or `None` when missing or expired
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value`, expiring `ttl` from now
    fn write(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), StorageError>;

    /// Remove the entry
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), StorageError> {
        (**self).write(key, value, ttl)
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}
