use super::KeyValueStore;
use crate::error::{Result, SweepError};
use crate::keys::pattern_matches;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// File-backed store: one JSON object mapping key to value, the same shape
/// the host's dirty-db driver writes. The whole map is loaded on `init` and
/// persisted write-through on every mutation, so a crash between two removes
/// loses at most the operation in flight.
pub struct FileStore {
    path: PathBuf,
    records: BTreeMap<String, Value>,
    open: bool,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: BTreeMap::new(),
            open: false,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if !self.open {
            return Err(SweepError::Store("store is not initialized".to_string()));
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(SweepError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, content).map_err(SweepError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn init(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = fs::read_to_string(&self.path).map_err(SweepError::Io)?;
            self.records = serde_json::from_str(&content)?;
        }
        self.open = true;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Value>> {
        self.ensure_open()?;
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.ensure_open()?;
        self.records.insert(key.to_string(), value);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.ensure_open()?;
        self.records.remove(key);
        self.persist()
    }

    fn find_keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.ensure_open()?;
        Ok(self
            .records
            .keys()
            .filter(|k| pattern_matches(pattern, k))
            .cloned()
            .collect())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.persist()?;
        self.open = false;
        Ok(())
    }
}
