// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Object-store access.
//!
//! Storage is a flat key/value store of text blobs. Keys look like
//! `keirin/raceList.csv`; an absent key is not an error.

use crate::error::PersistenceError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// A text blob store.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Fetches the blob stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn fetch(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn write(&self, key: &str, text: &str) -> Result<(), PersistenceError>;
}

/// A storage gateway backed by a directory on the local filesystem.
///
/// Each key maps to a file below the root directory. Parent directories are
/// created on write.
#[derive(Debug, Clone)]
pub struct FileStorageGateway {
    root: PathBuf,
}

impl FileStorageGateway {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        key.split('/')
            .filter(|segment| !segment.is_empty() && *segment != "..")
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

#[async_trait]
impl StorageGateway for FileStorageGateway {
    async fn fetch(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path: PathBuf = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!(key, bytes = text.len(), "Fetched storage object");
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "Storage object not found");
                Ok(None)
            }
            Err(source) => Err(PersistenceError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn write(&self, key: &str, text: &str) -> Result<(), PersistenceError> {
        let path: PathBuf = self.path_for(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| PersistenceError::Io {
                    key: key.to_string(),
                    source,
                })?;
        }
        tokio::fs::write(&path, text)
            .await
            .map_err(|source| PersistenceError::Io {
                key: key.to_string(),
                source,
            })?;
        debug!(key, bytes = text.len(), "Wrote storage object");
        Ok(())
    }
}

/// A storage gateway that keeps every blob in memory.
///
/// Used by tests and when no storage directory is configured. Writes can be
/// made to fail to exercise error propagation.
#[derive(Debug, Default)]
pub struct InMemoryStorageGateway {
    objects: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemoryStorageGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-populated with the given objects.
    #[must_use]
    pub fn with_objects<I, K, V>(objects: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            objects: RwLock::new(
                objects
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the blob stored under `key`.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.objects.read().await.get(key).cloned()
    }
}

#[async_trait]
impl StorageGateway for InMemoryStorageGateway {
    async fn fetch(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.objects.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, text: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable(format!(
                "write to '{key}' rejected"
            )));
        }
        self.objects
            .write()
            .await
            .insert(key.to_string(), text.to_string());
        Ok(())
    }
}
