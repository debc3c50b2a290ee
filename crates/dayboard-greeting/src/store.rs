//! Durable key-value profile store.
//!
//! The store is the page's only persistent state: a string-to-string mapping
//! that survives restarts. `SqliteProfileStore` is the on-disk
//! implementation; the `ProfileStore` trait keeps the greeting widget
//! testable against any backend.

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during profile store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage error (database open, read, write).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

/// Result type for profile store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for durable key-value storage backends.
///
/// `set` overwrites: the store holds at most one value per key. Both
/// operations are synchronous; callers needing shared access wrap the store
/// in [`SharedProfileStore`].
pub trait ProfileStore: Send {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if no value has ever been stored.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed profile store.
pub struct SqliteProfileStore {
    conn: Connection,
}

impl SqliteProfileStore {
    /// Open (or create) a profile store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory profile store (useful for tests).
    pub fn in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS profile (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }
}

impl ProfileStore for SqliteProfileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM profile WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::storage(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO profile (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                "#,
                params![key, value],
            )
            .map_err(|e| StoreError::storage(e.to_string()))?;

        tracing::debug!("Stored profile value under key: {}", key);
        Ok(())
    }
}

/// Cloneable handle sharing one store between the page and its sections.
///
/// Store implementations don't need to be Sync; this wrapper handles
/// thread-safe access via Mutex.
#[derive(Clone)]
pub struct SharedProfileStore {
    inner: Arc<Mutex<Box<dyn ProfileStore>>>,
}

impl SharedProfileStore {
    pub fn new(store: impl ProfileStore + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    /// Read the value stored under `key`.
    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.lock().get(key)
    }

    /// Store `value` under `key`, replacing any prior value.
    pub fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.inner.lock().set(key, value)
    }
}
