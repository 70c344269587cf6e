//! TTL key-value cache storage.
//!
//! The pipeline only ever talks to [`CacheStore`]; the SQLite-backed
//! implementation is the production store and the in-memory one is
//! for embedding and tests. Expiry is enforced on read: an expired
//! row is treated as absent and removed lazily.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Duration;
use rusqlite::Connection;

/// Cache store error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Namespaced TTL key-value store for normalized cache payloads.
///
/// Payloads are opaque strings (the pipeline stores JSON); TTL
/// bookkeeping is the store's responsibility.
pub trait CacheStore {
    /// Look up a live (non-expired) entry.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or replace an entry, expiring `ttl` from now.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Remove every entry whose key starts with `prefix`.
    fn delete_by_prefix(&self, prefix: &str) -> Result<(), StoreError>;
}

/// SQLite-backed cache store.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::from_conn(Connection::open(path)?)
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> Result<Self, StoreError> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode=WAL;
                 PRAGMA busy_timeout=5000;
                 CREATE TABLE IF NOT EXISTS cache_entries (
                     cache_key   TEXT PRIMARY KEY,
                     payload     TEXT NOT NULL,
                     expires_at  INTEGER NOT NULL
                 );",
            )?;
            Ok(())
        })
    }

    fn with_conn<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&Connection) -> Result<R, StoreError>,
    {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&conn)
    }
}

impl CacheStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = chrono::Utc::now().timestamp();
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT payload, expires_at FROM cache_entries WHERE cache_key = ?1")?;
            let row: Option<(String, i64)> = match stmt.query_row([key], |row| {
                Ok((row.get(0)?, row.get(1)?))
            }) {
                Ok(v) => Some(v),
                Err(rusqlite::Error::QueryReturnedNoRows) => None,
                Err(e) => return Err(e.into()),
            };

            match row {
                Some((payload, expires_at)) if expires_at > now => Ok(Some(payload)),
                Some(_) => {
                    // Expired; drop the row so it doesn't linger.
                    conn.execute("DELETE FROM cache_entries WHERE cache_key = ?1", [key])?;
                    Ok(None)
                }
                None => Ok(None),
            }
        })
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let expires_at = chrono::Utc::now().timestamp() + ttl.num_seconds();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO cache_entries (cache_key, payload, expires_at)
                 VALUES (?1, ?2, ?3)",
                rusqlite::params![key, value, expires_at],
            )?;
            Ok(())
        })
    }

    fn delete_by_prefix(&self, prefix: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            let deleted = conn.execute(
                "DELETE FROM cache_entries WHERE cache_key LIKE ?1 || '%'",
                [prefix],
            )?;
            tracing::debug!(prefix, deleted, "Cache entries deleted by prefix");
            Ok(())
        })
    }
}

/// In-memory cache store backed by a `HashMap`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, (String, i64)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut HashMap<String, (String, i64)>) -> R,
    {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&mut entries))
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = chrono::Utc::now().timestamp();
        self.with_entries(|entries| match entries.get(key) {
            Some((payload, expires_at)) if *expires_at > now => Some(payload.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        })
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let expires_at = chrono::Utc::now().timestamp() + ttl.num_seconds();
        self.with_entries(|entries| {
            entries.insert(key.to_string(), (value.to_string(), expires_at));
        })
    }

    fn delete_by_prefix(&self, prefix: &str) -> Result<(), StoreError> {
        self.with_entries(|entries| {
            entries.retain(|key, _| !key.starts_with(prefix));
        })
    }
}
