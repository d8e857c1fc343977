use crate::error::{ArcmarksError, Result};
use crate::kv::KeyValueStore;
use crate::models::bookmark::Bookmark;
use log::debug;

/// Storage key used when the configuration does not name one
pub const DEFAULT_STORAGE_KEY: &str = "arcBookmarks.list";

/// Owner of the canonical bookmark list.
///
/// The list is persisted as one JSON array under a single key. There is no
/// partial update: every mutation loads the list, changes it and hands the
/// whole list back to `save`.
pub struct BookmarkStore<S: KeyValueStore> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Snapshot of the persisted list; empty when nothing was saved yet
    pub fn load(&self) -> Result<Vec<Bookmark>> {
        match self.kv.get(&self.key)? {
            Some(raw) => {
                let bookmarks: Vec<Bookmark> = serde_json::from_str(&raw)?;
                debug!("Loaded {} bookmarks from '{}'", bookmarks.len(), self.key);
                Ok(bookmarks)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Replace the persisted list with `bookmarks`
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        if let Some(pos) = bookmarks.iter().position(|b| !b.is_complete()) {
            return Err(ArcmarksError::InvalidInput(format!(
                "bookmark at index {} has an empty name or URL",
                pos
            )));
        }

        let raw = serde_json::to_string(bookmarks)?;
        self.kv.set(&self.key, &raw)?;
        debug!("Saved {} bookmarks to '{}'", bookmarks.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{MemoryKv, SqliteKv};

    fn sample() -> Vec<Bookmark> {
        vec![
            Bookmark::new("Rust", "https://www.rust-lang.org"),
            Bookmark::new("Go", "https://go.dev").with_folder("Dev"),
        ]
    }

    #[test]
    fn test_load_empty() {
        let store = BookmarkStore::new(MemoryKv::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let store = BookmarkStore::new(SqliteKv::init_in_memory().unwrap());
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_save_replaces_whole_list() {
        let store = BookmarkStore::new(MemoryKv::new());
        store.save(&sample()).unwrap();
        store
            .save(&[Bookmark::new("Only", "https://only.example")])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Only");
    }

    #[test]
    fn test_save_rejects_incomplete_bookmark() {
        let store = BookmarkStore::new(MemoryKv::new());
        store.save(&sample()).unwrap();

        let mut broken = sample();
        broken.push(Bookmark::new("", "https://nameless.example"));
        let result = store.save(&broken);
        assert!(matches!(result, Err(ArcmarksError::InvalidInput(_))));

        // Previous list is untouched
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_custom_key() {
        let kv = MemoryKv::new();
        kv.set(DEFAULT_STORAGE_KEY, "[]").unwrap();
        let store = BookmarkStore::with_key(kv, "other.list");
        store.save(&sample()).unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
        assert_eq!(store.kv.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let kv = MemoryKv::new();
        kv.set(DEFAULT_STORAGE_KEY, "not json").unwrap();
        let store = BookmarkStore::new(kv);
        assert!(matches!(store.load(), Err(ArcmarksError::Json(_))));
    }
}
