//! Key-value adapter over JSON documents.
//!
//! Reads fail soft: a missing key, a failing query or a document that does
//! not parse are all reported as "no value". Writes are synchronous upserts.

use crate::errors::AppResult;
use crate::store::log::ttlog;
use crate::store::pool::DbPool;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

pub trait KeyValueStore {
    /// Raw stored text for `key`, if any.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Store `value` verbatim under `key`, replacing any previous value.
    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Append a line to the audit log. Stores without one ignore it.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}

    /// Parsed JSON value for `key`; malformed documents read as absent.
    fn get(&self, key: &str) -> Option<Value> {
        serde_json::from_str(&self.get_raw(key)?).ok()
    }

    fn set(&mut self, key: &str, value: &Value) -> AppResult<()> {
        self.set_raw(key, &value.to_string())
    }
}

/// Typed read. Anything that does not deserialize into `T` reads as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Typed write.
pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    store.set_raw(key, &json)
}

/// SQLite-backed store: one row per key in `kv_store`.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::in_memory()?,
        })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl KeyValueStore for SqliteStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.pool
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .ok()
            .flatten()
    }

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

/// Volatile store used by tests and embedders that do not need a file.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    audit: Vec<(String, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit lines recorded so far as `(operation, target, message)`.
    pub fn audit_lines(&self) -> &[(String, String, String)] {
        &self.audit
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        self.audit
            .push((operation.into(), target.into(), message.into()));
    }
}
