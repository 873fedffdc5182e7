//! Tree store backend trait and location handles.

use crate::error::StoreResult;
use crate::path::TreePath;
use crate::snapshot::{FieldMap, Snapshot};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// The external tree store this layer is built over.
///
/// The backend owns network transport, authentication, connection
/// lifecycle, and the storage engine itself. This layer issues one
/// request per call and does no coordination across calls; every
/// returned future resolves exactly once with success or failure.
///
/// # Implementors
///
/// - [`super::MemoryBackend`] - in-process tree for tests and demos
#[async_trait]
pub trait TreeBackend: Send + Sync {
    /// Writes `value` at `path`, fully replacing any existing value.
    async fn write(&self, path: &TreePath, value: Value) -> StoreResult<()>;

    /// Merges `fields` into the value at `path`.
    ///
    /// Only the named top-level fields are overwritten; sibling fields
    /// at the same location are left untouched.
    async fn merge(&self, path: &TreePath, fields: FieldMap) -> StoreResult<()>;

    /// Removes the value and all descendants at `path`.
    async fn remove(&self, path: &TreePath) -> StoreResult<()>;

    /// Reads the value at `path`.
    ///
    /// Returns `None` when no value exists at the location.
    async fn fetch(&self, path: &TreePath) -> StoreResult<Option<Snapshot>>;
}

/// A live reference to one location in the tree store.
///
/// Built by folding a root reference through path segments via
/// [`TreeRef::child`], mirroring the store's slash-delimited
/// addressing. References are ephemeral: each accessor operation
/// derives its own and drops it when the operation completes. Cloning
/// is cheap (the backend is shared behind an `Arc`).
#[derive(Debug)]
pub struct TreeRef<B: TreeBackend> {
    backend: Arc<B>,
    path: TreePath,
}

impl<B: TreeBackend> Clone for TreeRef<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            path: self.path.clone(),
        }
    }
}

impl<B: TreeBackend> TreeRef<B> {
    /// Creates a reference to the root of the tree.
    pub fn root(backend: Arc<B>) -> Self {
        Self {
            backend,
            path: TreePath::root(),
        }
    }

    /// Returns the reference one segment deeper.
    ///
    /// The segment is not re-validated; callers fold segments taken
    /// from an already-validated [`TreePath`].
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            path: self.path.clone().push_unchecked(segment.into()),
        }
    }

    /// Returns the location this reference addresses.
    #[must_use]
    pub fn path(&self) -> &TreePath {
        &self.path
    }

    /// Writes `value` here, fully replacing any existing value.
    pub async fn set(&self, value: Value) -> StoreResult<()> {
        self.backend.write(&self.path, value).await
    }

    /// Merges `fields` into the value here (top-level merge).
    pub async fn update(&self, fields: FieldMap) -> StoreResult<()> {
        self.backend.merge(&self.path, fields).await
    }

    /// Removes the value and all descendants here.
    pub async fn remove(&self) -> StoreResult<()> {
        self.backend.remove(&self.path).await
    }

    /// Reads the value here, `None` if absent.
    pub async fn get(&self) -> StoreResult<Option<Snapshot>> {
        self.backend.fetch(&self.path).await
    }
}
