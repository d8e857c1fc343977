use crate::error::{ArcmarksError, Result};
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// String-keyed storage the bookmark list is persisted through.
///
/// `set` replaces the stored value in a single step, so a reader never sees
/// a half-written value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// SQLite-backed key-value table
pub struct SqliteKv {
    conn: Connection,
}

impl SqliteKv {
    pub fn init_in_memory() -> Result<Self> {
        let kv = Self {
            conn: Connection::open_in_memory()?,
        };
        kv.setup_tables()?;
        Ok(kv)
    }

    pub fn init(db_path: &Path) -> Result<Self> {
        let kv = Self {
            conn: Connection::open(db_path)?,
        };
        kv.setup_tables()?;
        Ok(kv)
    }

    fn setup_tables(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE if not exists kv (
                key text PRIMARY KEY,
                value text NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;
        Ok(())
    }
}

/// Non-persistent store, handy for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| ArcmarksError::Other(format!("memory store poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_missing_key() {
        let kv = SqliteKv::init_in_memory().unwrap();
        assert_eq!(kv.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let kv = SqliteKv::init_in_memory().unwrap();
        kv.set("k", "v1").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v1"));
    }

    #[test]
    fn test_set_overwrites() {
        let kv = SqliteKv::init_in_memory().unwrap();
        kv.set("k", "v1").unwrap();
        kv.set("k", "v2").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v2"));

        let rows: i64 = kv
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let kv = SqliteKv::init_in_memory().unwrap();
        kv.set("a", "1").unwrap();
        kv.set("b", "2").unwrap();
        assert_eq!(kv.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(kv.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_persists_across_connections() {
        let file = NamedTempFile::new().unwrap();
        {
            let kv = SqliteKv::init(file.path()).unwrap();
            kv.set("list", "[]").unwrap();
        }
        let reopened = SqliteKv::init(file.path()).unwrap();
        assert_eq!(reopened.get("list").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_kv_is_shareable_across_threads() {
        let kv = std::sync::Arc::new(MemoryKv::new());
        let writer = {
            let kv = kv.clone();
            std::thread::spawn(move || kv.set("k", "from thread").unwrap())
        };
        writer.join().unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("from thread"));
    }

    #[test]
    fn test_memory_kv() {
        let kv = MemoryKv::new();
        assert_eq!(kv.get("k").unwrap(), None);
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
    }
}
