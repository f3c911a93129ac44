mod fs;

pub use fs::FsStore;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid resource identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Size and modification time of a resource, read fresh from storage.
#[derive(Debug, Clone, Copy)]
pub struct ResourceMeta {
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// A flat namespace of named, mutable byte sequences on durable storage.
///
/// Operations against the same identifier are serialized; operations against
/// distinct identifiers may run concurrently. A write either fully replaces
/// the previous content or leaves it intact, never a partial mixture.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Upsert: write `content` at `id`, creating the resource if absent.
    async fn put(&self, id: &str, content: Bytes) -> Result<(), StoreError>;

    /// Full content of the resource at `id`.
    async fn read(&self, id: &str) -> Result<Bytes, StoreError>;

    /// Strict replace: fails with [`StoreError::NotFound`] if `id` does not
    /// already exist.
    async fn update(&self, id: &str, content: Bytes) -> Result<(), StoreError>;

    /// Remove the resource at `id`; [`StoreError::NotFound`] if absent.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// All current identifiers, non-recursive, in directory enumeration order.
    async fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Metadata without content transfer (backs HEAD).
    async fn stat(&self, id: &str) -> Result<ResourceMeta, StoreError>;
}
