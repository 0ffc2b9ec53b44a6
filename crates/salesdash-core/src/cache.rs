//! Process-scoped dataset cache
//!
//! A sales file is read once per process. Callers own the cache and pass it
//! where it is needed; there is no global state and no reload until the
//! process restarts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::import::load_file;
use crate::models::Dataset;

/// Loaded datasets keyed on source path
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `path`, loading it on first access
    ///
    /// Failed loads are not cached, so a corrected file can be retried.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Dataset>> {
        let key = cache_key(path);

        if let Some(dataset) = self.entries.get(&key) {
            debug!("Dataset cache hit for {}", key.display());
            return Ok(Arc::clone(dataset));
        }

        debug!("Dataset cache miss for {}", key.display());
        let dataset = Arc::new(load_file(path)?);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Whether `path` has already been loaded
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(&cache_key(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identify a source by its canonical path when it exists
fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
