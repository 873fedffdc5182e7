//! Path-addressed CRUD operations against the tree store.

use crate::codec::to_field_map;
use crate::config::{AccessorConfig, WritePolicy};
use crate::entity::Datable;
use crate::error::{AccessorError, AccessorResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use treebase_store::{StoreResult, TreeBackend, TreePath, TreeRef};

/// Typed CRUD access to the tree store.
///
/// The accessor holds one root reference for its lifetime and resolves
/// every operation by folding that root through the target's path
/// segments. It owns no state between calls: paths are re-derived
/// fresh, location handles are ephemeral, and nothing is cached.
/// It is explicitly constructed and passed; create one per process and
/// share it (operations take `&self` and the backend is `Send + Sync`).
///
/// Reads report success or failure in full. Writes follow the
/// configured [`WritePolicy`]: by default their I/O outcome is dropped
/// and only pre-flight encoding errors are surfaced, preserving the
/// remote SDK's original fire-and-forget contract.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use treebase_core::{Datable, StoreAccessor};
/// use treebase_store::MemoryBackend;
///
/// #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// struct Task {
///     id: String,
///     title: String,
/// }
///
/// impl Datable for Task {
///     fn path(&self) -> Vec<String> {
///         vec!["tasks".into(), self.id.clone()]
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let accessor = StoreAccessor::new(MemoryBackend::new());
/// let task = Task { id: "abc123".into(), title: "x".into() };
///
/// accessor.create(&task).await.unwrap();
/// let found: Task = accessor.read(&task).await.unwrap();
/// assert_eq!(found, task);
/// # }
/// ```
pub struct StoreAccessor<B: TreeBackend> {
    root: TreeRef<B>,
    config: AccessorConfig,
}

impl<B: TreeBackend> StoreAccessor<B> {
    /// Creates an accessor with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, AccessorConfig::default())
    }

    /// Creates an accessor with an explicit configuration.
    pub fn with_config(backend: B, config: AccessorConfig) -> Self {
        Self {
            root: TreeRef::root(Arc::new(backend)),
            config,
        }
    }

    /// Returns the accessor configuration.
    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    /// Creates `entity` at its own path, fully replacing any existing
    /// value there.
    ///
    /// # Errors
    ///
    /// Returns [`AccessorError::Encode`] if serialization fails (before
    /// any I/O) and [`AccessorError::EmptyPath`] for an empty entity
    /// path. I/O failures follow the configured [`WritePolicy`].
    pub async fn create<T: Datable>(&self, entity: &T) -> AccessorResult<()> {
        let fields = to_field_map(entity)?;
        let target = self.entity_ref(entity)?;
        debug!(path = %target.path(), "create");
        self.finish_write("create", target.path(), target.set(Value::Object(fields)).await)
    }

    /// Reads the value at an explicit path and decodes it as `T`.
    ///
    /// # Errors
    ///
    /// Fetch errors are forwarded verbatim as [`AccessorError::Store`];
    /// a missing value is [`AccessorError::NotFound`]; a value of the
    /// wrong shape is [`AccessorError::Decode`].
    pub async fn read_at<T: DeserializeOwned>(&self, path: &TreePath) -> AccessorResult<T> {
        debug!(%path, "read");
        let target = self.resolve(path);
        let snapshot = target
            .get()
            .await?
            .ok_or_else(|| AccessorError::NotFound { path: path.clone() })?;
        snapshot.decode().map_err(|err| {
            debug!(%path, error = %err, "snapshot decode failed");
            AccessorError::Decode {
                message: err.to_string(),
            }
        })
    }

    /// Reads the stored value at `entity`'s own path.
    ///
    /// Same contract as [`StoreAccessor::read_at`], with the path
    /// derived from the entity.
    pub async fn read<T: Datable>(&self, entity: &T) -> AccessorResult<T> {
        let path = self.entity_path(entity)?;
        self.read_at(&path).await
    }

    /// Reads all siblings of `entity`, itself included.
    ///
    /// Resolves the entity's parent path and decodes each immediate
    /// child independently as `T`; children that fail to decode are
    /// silently dropped rather than failing the whole read (partial
    /// results over total failure). Fails only if the parent-level
    /// fetch errors or finds nothing.
    ///
    /// Callers must not invoke this on a root-level entity: a
    /// single-segment path yields the root as parent, which enumerates
    /// every top-level child of the store.
    pub async fn read_siblings<T: Datable>(&self, entity: &T) -> AccessorResult<Vec<T>> {
        // Validates the entity path itself; the parent may be root.
        self.entity_path(entity)?;
        let parent = TreePath::new(entity.parent_path())?;
        debug!(path = %parent, "read siblings");

        let snapshot = self
            .resolve(&parent)
            .get()
            .await?
            .ok_or_else(|| AccessorError::NotFound {
                path: parent.clone(),
            })?;

        Ok(snapshot
            .children()
            .into_iter()
            .filter_map(|(key, child)| match child.decode() {
                Ok(value) => Some(value),
                Err(err) => {
                    debug!(path = %parent, child = %key, error = %err, "dropping undecodable sibling");
                    None
                }
            })
            .collect())
    }

    /// Updates the stored entity with `entity`'s current fields.
    ///
    /// A top-level merge: only the encoded fields are overwritten,
    /// sibling fields at the same location are left untouched.
    ///
    /// # Errors
    ///
    /// Same pre-flight contract as [`StoreAccessor::create`].
    pub async fn update<T: Datable>(&self, entity: &T) -> AccessorResult<()> {
        let fields = to_field_map(entity)?;
        let target = self.entity_ref(entity)?;
        debug!(path = %target.path(), "update");
        self.finish_write("update", target.path(), target.update(fields).await)
    }

    /// Merge-updates the value at an explicit path with `value`'s
    /// fields.
    ///
    /// Same semantics as [`StoreAccessor::update`] against an explicit
    /// path.
    pub async fn update_at<T: Serialize>(&self, path: &TreePath, value: &T) -> AccessorResult<()> {
        let fields = to_field_map(value)?;
        debug!(%path, "update");
        let target = self.resolve(path);
        self.finish_write("update", path, target.update(fields).await)
    }

    /// Deletes the value and all descendants at `entity`'s own path.
    pub async fn delete<T: Datable>(&self, entity: &T) -> AccessorResult<()> {
        let target = self.entity_ref(entity)?;
        debug!(path = %target.path(), "delete");
        self.finish_write("delete", target.path(), target.remove().await)
    }

    /// Deletes the value and all descendants at an explicit path.
    pub async fn delete_at(&self, path: &TreePath) -> AccessorResult<()> {
        debug!(%path, "delete");
        let target = self.resolve(path);
        self.finish_write("delete", path, target.remove().await)
    }

    /// Folds the root reference through the path's segments.
    fn resolve(&self, path: &TreePath) -> TreeRef<B> {
        path.segments()
            .iter()
            .fold(self.root.clone(), |reference, segment| {
                reference.child(segment.as_str())
            })
    }

    fn entity_path<T: Datable>(&self, entity: &T) -> AccessorResult<TreePath> {
        let segments = entity.path();
        if segments.is_empty() {
            return Err(AccessorError::EmptyPath);
        }
        Ok(TreePath::new(segments)?)
    }

    fn entity_ref<T: Datable>(&self, entity: &T) -> AccessorResult<TreeRef<B>> {
        Ok(self.resolve(&self.entity_path(entity)?))
    }

    /// Applies the write policy to a write outcome.
    fn finish_write(&self, op: &str, path: &TreePath, outcome: StoreResult<()>) -> AccessorResult<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(err) => match self.config.write_policy {
                WritePolicy::FireAndForget => {
                    warn!(%path, error = %err, "{op} write failed; outcome dropped by policy");
                    Ok(())
                }
                WritePolicy::Surface => Err(err.into()),
            },
        }
    }
}
