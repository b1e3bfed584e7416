//! Persisted list store
//!
//! Lists are kept as JSON text under one key per category. `FileStore` maps
//! each key to `<dir>/<key>.json`; `MemoryStore` keeps everything in memory.

use crate::error::StoreError;
use crate::model::{Category, Entry};
#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Durable text key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Directory-backed store, one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_string(),
                path,
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        let write_error = |source| StoreError::Write {
            key: key.to_string(),
            path: path.clone(),
            source,
        };

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(write_error)?;
        }
        fs::write(&path, value).map_err(write_error)?;
        Ok(())
    }
}

/// In-memory store that counts writes
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value without counting it as a write
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every following `set` fail with a write error
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                path: PathBuf::from(format!("memory/{}.json", key)),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "read-only store"),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Load a category's list
///
/// Missing keys, unreadable values and invalid JSON all yield an empty list.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, category: Category) -> Vec<Entry> {
    let key = category.storage_key();
    let contents = match store.get(key) {
        Ok(Some(contents)) => contents,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("could not read {}: {}", key, e);
            return Vec::new();
        }
    };

    // A stored `null` reads as an empty list too
    match serde_json::from_str::<Option<Vec<Entry>>>(&contents) {
        Ok(entries) => {
            let entries = entries.unwrap_or_default();
            debug!(key, count = entries.len(), "loaded list");
            entries
        }
        Err(e) => {
            warn!("ignoring invalid data under {}: {}", key, e);
            Vec::new()
        }
    }
}

/// Persist a category's full list, replacing what was stored before
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    category: Category,
    entries: &[Entry],
) -> Result<(), StoreError> {
    let key = category.storage_key();
    let json = serde_json::to_string(entries).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)?;
    debug!(key, count = entries.len(), "saved list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("Aluguel", 1200.5, "2024-01-05"),
            Entry::new("Luz, água", 180.0, "2024-01-10"),
        ]
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        save(&mut store, Category::Expenses, &entries()).unwrap();

        assert_eq!(load(&store, Category::Expenses), entries());
        assert!(load(&store, Category::Income).is_empty());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        assert!(load(&store, Category::Income).is_empty());
    }

    #[test]
    fn test_invalid_json_loads_empty() {
        let store = MemoryStore::new()
            .with_value("gastos", "{not json")
            .with_value("entradas", r#"[{"nome":"x"}]"#);
        assert!(load(&store, Category::Expenses).is_empty());
        assert!(load(&store, Category::Income).is_empty());
    }

    #[test]
    fn test_null_loads_empty() {
        let store = MemoryStore::new().with_value("gastos", "null");
        assert!(load(&store, Category::Expenses).is_empty());
    }

    #[test]
    fn test_stored_format_uses_portuguese_keys() {
        let mut store = MemoryStore::new();
        save(&mut store, Category::Income, &[Entry::new("Salário", 3000.0, "2024-01-01")]).unwrap();
        assert_eq!(
            store.get("entradas").unwrap().unwrap(),
            r#"[{"nome":"Salário","valor":3000.0,"data":"2024-01-01"}]"#
        );
    }

    #[test]
    fn test_file_store_creates_directory_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("data");
        let mut store = FileStore::new(&dir);

        assert!(load(&store, Category::Expenses).is_empty());
        save(&mut store, Category::Expenses, &entries()).unwrap();

        assert!(dir.join("gastos.json").exists());
        assert_eq!(load(&store, Category::Expenses), entries());
    }

    #[test]
    fn test_file_store_overwrites_previous_value() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        save(&mut store, Category::Income, &entries()).unwrap();
        save(&mut store, Category::Income, &entries()[..1]).unwrap();

        assert_eq!(load(&store, Category::Income), entries()[..1].to_vec());
    }
}
