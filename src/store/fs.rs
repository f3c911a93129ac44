use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::{ResourceMeta, ResourceStore, StoreError};

/// Filesystem-backed resource store.
///
/// Each identifier maps to one plain file directly under `root`. Writers go
/// through a dot-prefixed temp file followed by an atomic rename, so a crash
/// or disconnect mid-write never leaves a half-written resource visible.
pub struct FsStore {
    root: PathBuf,
    locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// Reject identifiers that could resolve outside the store root.
///
/// Accepted identifiers are single path components, so `root.join(id)` cannot
/// escape `root`. Dot-prefixed names are rejected too: `.` and `..` are
/// traversal, and the rest of that namespace is reserved for temp files.
fn validate_id(id: &str) -> Result<(), StoreError> {
    if id.is_empty() || id.starts_with('.') || id.contains(['/', '\\', '\0']) {
        return Err(StoreError::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}

fn not_found(id: &str, e: std::io::Error) -> StoreError {
    if e.kind() == ErrorKind::NotFound {
        StoreError::NotFound(id.to_string())
    } else {
        StoreError::Io(e)
    }
}

impl FsStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// Temp files orphaned by an interrupted write (the rename never ran)
    /// are swept here; nothing else ever lives in the dotfile namespace.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, std::io::Error> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        for entry in std::fs::read_dir(&root)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with('.') && name.ends_with(".tmp") {
                    let _ = std::fs::remove_file(entry.path());
                }
            }
        }
        Ok(Self {
            root,
            locks: StdMutex::new(HashMap::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resource_path(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    /// Lock guarding all operations on `id`. tokio mutexes hand the lock to
    /// waiters in FIFO order, which gives same-id operations arrival-order
    /// serialization.
    fn lock_for(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("lock map poisoned");
        Arc::clone(locks.entry(id.to_string()).or_default())
    }

    /// Write-temp-then-rename. Must be called with the id's lock held.
    async fn write_replace(&self, id: &str, content: &[u8]) -> Result<(), StoreError> {
        let tmp = self.root.join(format!(".{id}.tmp"));
        let dest = self.resource_path(id);
        if let Err(e) = tokio::fs::write(&tmp, content).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp, &dest).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceStore for FsStore {
    async fn put(&self, id: &str, content: Bytes) -> Result<(), StoreError> {
        validate_id(id)?;
        let lock = self.lock_for(id);
        let _held = lock.lock().await;
        self.write_replace(id, &content).await
    }

    async fn read(&self, id: &str) -> Result<Bytes, StoreError> {
        validate_id(id)?;
        let lock = self.lock_for(id);
        let _held = lock.lock().await;
        match tokio::fs::read(self.resource_path(id)).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) => Err(not_found(id, e)),
        }
    }

    async fn update(&self, id: &str, content: Bytes) -> Result<(), StoreError> {
        validate_id(id)?;
        let lock = self.lock_for(id);
        let _held = lock.lock().await;
        tokio::fs::metadata(self.resource_path(id))
            .await
            .map_err(|e| not_found(id, e))?;
        self.write_replace(id, &content).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        validate_id(id)?;
        let lock = self.lock_for(id);
        let _held = lock.lock().await;
        tokio::fs::remove_file(self.resource_path(id))
            .await
            .map_err(|e| not_found(id, e))
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if entry.file_type().await?.is_file() {
                ids.push(name.to_string());
            }
        }
        Ok(ids)
    }

    async fn stat(&self, id: &str) -> Result<ResourceMeta, StoreError> {
        validate_id(id)?;
        let lock = self.lock_for(id);
        let _held = lock.lock().await;
        let meta = tokio::fs::metadata(self.resource_path(id))
            .await
            .map_err(|e| not_found(id, e))?;
        let modified = meta.modified().map(DateTime::<Utc>::from)?;
        Ok(ResourceMeta {
            size: meta.len(),
            modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_escaping_identifiers() {
        for id in ["", ".", "..", "../x", "a/b", "a\\b", ".hidden", "a\0b"] {
            assert!(
                matches!(validate_id(id), Err(StoreError::InvalidIdentifier(_))),
                "id {id:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_plain_identifiers() {
        for id in ["notes.txt", "index.html", "photo.jpeg", "a", "mind.mm"] {
            assert!(validate_id(id).is_ok(), "id {id:?} should be accepted");
        }
    }
}
