//! FILENAME: core/persistence/src/cache.rs
//! Process-lifetime memoization of loaded datasets.
//!
//! The first `get_or_load` for a path reads the file; every later call for the
//! same canonical path returns the same shared, immutable `Arc<Dataset>`.
//! Failed loads are not cached.

use engine::Dataset;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::csv_reader::load_csv;
use crate::PersistenceError;

static GLOBAL_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Path-keyed dataset memo.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance.
    pub fn global() -> &'static DatasetCache {
        &GLOBAL_CACHE
    }

    /// Returns the memoized dataset for `path`, loading it on first use.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Dataset>, PersistenceError> {
        let key = cache_key(path)?;

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(hit) = entries.get(&key) {
            return Ok(Arc::clone(hit));
        }

        // Loading under the lock keeps concurrent first calls to one read.
        let dataset = Arc::new(load_csv(&key)?);
        entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn is_cached(&self, path: &Path) -> bool {
        let Ok(key) = cache_key(path) else {
            return false;
        };
        self.entries
            .lock()
            .map(|entries| entries.contains_key(&key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// Canonical path, so `./data/x.csv` and `data/x.csv` share one entry.
fn cache_key(path: &Path) -> Result<PathBuf, PersistenceError> {
    path.canonicalize().map_err(|source| PersistenceError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
