//! File-backed cache store.

use super::backend::{CacheEntry, CacheStore};
use super::key::CacheKey;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    entries: HashMap<String, StoredEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    endpoint: String,
    entry: CacheEntry,
}

/// JSON file holding every entry, so cached replies survive restarts.
///
/// The whole map is kept in memory and rewritten after each mutation
/// (temp file + rename). Between `defer_writes` and `commit_writes` the
/// rewrite happens once, at commit.
pub struct FileStore {
    path: PathBuf,
    file: CacheFile,
    deferred: bool,
    dirty: bool,
}

impl FileStore {
    /// Open or create the cache file at `path`.
    ///
    /// A file that cannot be parsed is treated as an empty cache and is
    /// overwritten on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = if path.exists() {
            let bytes = fs::read(&path)?;
            match serde_json::from_slice::<CacheFile>(&bytes) {
                Ok(file) => file,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable cache file {}: {}", path.display(), e);
                    CacheFile::default()
                }
            }
        } else {
            CacheFile::default()
        };

        tracing::debug!(
            "Opened cache file {} with {} entries",
            path.display(),
            file.entries.len()
        );
        Ok(Self {
            path,
            file,
            deferred: false,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&mut self) -> Result<()> {
        if self.deferred {
            self.dirty = true;
            return Ok(());
        }
        self.write_file()
    }

    fn write_file(&mut self) -> Result<()> {
        self.dirty = false;
        let temp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec(&self.file)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl CacheStore for FileStore {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>> {
        Ok(self.file.entries.get(&key.hash).map(|s| s.entry.clone()))
    }

    fn put(&mut self, key: &CacheKey, entry: CacheEntry) -> Result<()> {
        self.file.entries.insert(
            key.hash.clone(),
            StoredEntry {
                endpoint: key.endpoint.clone(),
                entry,
            },
        );
        self.persist()
    }

    fn remove(&mut self, key: &CacheKey) -> Result<bool> {
        let removed = self.file.entries.remove(&key.hash).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn purge_expired(&mut self, now: SystemTime) -> Result<usize> {
        let before = self.file.entries.len();
        self.file.entries.retain(|_, s| s.entry.is_live(now));
        let purged = before - self.file.entries.len();
        if purged > 0 {
            self.persist()?;
        }
        Ok(purged)
    }

    fn clear(&mut self) -> Result<()> {
        self.file.entries.clear();
        self.persist()
    }

    fn len(&self) -> usize {
        self.file.entries.len()
    }

    fn name(&self) -> &'static str {
        "file"
    }

    fn defer_writes(&mut self) {
        self.deferred = true;
    }

    fn commit_writes(&mut self) -> Result<()> {
        self.deferred = false;
        if self.dirty {
            self.write_file()?;
        }
        Ok(())
    }
}
