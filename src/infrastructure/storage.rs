use gloo::storage::{LocalStorage, Storage};

use crate::domain::{
    cart::CartStorage,
    errors::{StorageError, StorageResult},
};

/// Cart snapshot kept under one browser local-storage key
#[derive(Clone, Debug)]
pub struct LocalStorageCart {
    key: String,
}

impl LocalStorageCart {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl CartStorage for LocalStorageCart {
    fn load(&self) -> StorageResult<Option<String>> {
        LocalStorage::raw()
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn save(&mut self, snapshot: &str) -> StorageResult<()> {
        LocalStorage::raw()
            .set_item(&self.key, snapshot)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}

/// In-process stand-in used by tests and non-browser hosts
#[derive(Clone, Debug, Default)]
pub struct MemoryCartStorage {
    snapshot: Option<String>,
    writes: usize,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self { snapshot: Some(snapshot.into()), writes: 0 }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &str) -> StorageResult<()> {
        self.snapshot = Some(snapshot.to_string());
        self.writes += 1;
        Ok(())
    }
}
