//! Per-path cache of loaded conversation stores.
//!
//! The cache is an ordinary value owned by whoever hosts the session, so tests
//! construct a fresh one instead of sharing process-wide state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use super::ConversationStore;
use crate::error::{Result, ViewerError};

/// When a cached store is considered stale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Invalidation {
    /// Keep every store until it is explicitly invalidated
    #[default]
    Never,
    /// Reload when the file's modification time differs from the one seen at load
    OnModified,
}

#[derive(Debug)]
struct CachedStore {
    store: Arc<ConversationStore>,
    modified: Option<SystemTime>,
}

#[derive(Debug, Default)]
pub struct StoreCache {
    entries: HashMap<PathBuf, CachedStore>,
    policy: Invalidation,
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl StoreCache {
    pub fn new(policy: Invalidation) -> Self {
        Self { entries: HashMap::new(), policy }
    }

    pub fn policy(&self) -> Invalidation {
        self.policy
    }

    /// Return the store for `path`, parsing the file only if it is not cached
    /// (or, under [`Invalidation::OnModified`], if it changed on disk).
    ///
    /// A missing file is reported as [`ViewerError::FileNotFound`] even when an
    /// older copy is cached.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<ConversationStore>> {
        if !path.exists() {
            return Err(ViewerError::FileNotFound { path: path.to_path_buf() });
        }

        if let Some(cached) = self.entries.get(path) {
            let fresh = match self.policy {
                Invalidation::Never => true,
                Invalidation::OnModified => cached.modified == modified_time(path),
            };
            if fresh {
                debug!(path = %path.display(), "store cache hit");
                return Ok(Arc::clone(&cached.store));
            }
            debug!(path = %path.display(), "cached store is stale");
        }

        let modified = modified_time(path);
        let store = Arc::new(ConversationStore::load(path)?);
        self.entries
            .insert(path.to_path_buf(), CachedStore { store: Arc::clone(&store), modified });
        Ok(store)
    }

    /// Drop the cached store for `path`. Returns whether one was cached.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
