//! In-memory tree backend for tests and demos.

use crate::backend::TreeBackend;
use crate::error::{StoreError, StoreResult};
use crate::path::TreePath;
use crate::snapshot::{FieldMap, Snapshot};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};

/// An in-process tree store backend.
///
/// Holds the whole tree as a single JSON value behind a lock. Suitable
/// for unit tests, integration tests, and local demos; it implements
/// the same full-replace / top-level-merge / subtree-remove semantics
/// the remote store provides.
///
/// # Simulating transport failures
///
/// [`MemoryBackend::set_online`] toggles connectivity: while offline,
/// every operation fails with [`StoreError::Transport`]. This is how
/// tests exercise error forwarding and the fire-and-forget write
/// policy.
///
/// # Thread Safety
///
/// The backend is thread-safe and can be shared across tasks.
#[derive(Debug)]
pub struct MemoryBackend {
    tree: RwLock<Value>,
    online: AtomicBool,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self {
            tree: RwLock::new(Value::Null),
            online: AtomicBool::new(true),
        }
    }
}

impl MemoryBackend {
    /// Creates a new empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with an existing tree.
    ///
    /// Useful for seeding test fixtures.
    #[must_use]
    pub fn with_tree(tree: Value) -> Self {
        Self {
            tree: RwLock::new(tree),
            online: AtomicBool::new(true),
        }
    }

    /// Sets the simulated connectivity state.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// Returns the simulated connectivity state.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Returns a copy of the whole tree.
    ///
    /// Useful for asserting on store contents in tests.
    #[must_use]
    pub fn tree(&self) -> Value {
        self.tree.read().clone()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.is_online() {
            Ok(())
        } else {
            Err(StoreError::transport("store offline"))
        }
    }
}

#[async_trait]
impl TreeBackend for MemoryBackend {
    async fn write(&self, path: &TreePath, value: Value) -> StoreResult<()> {
        self.check_online()?;
        let mut tree = self.tree.write();
        *node_at_mut(&mut tree, path.segments()) = value;
        Ok(())
    }

    async fn merge(&self, path: &TreePath, fields: FieldMap) -> StoreResult<()> {
        self.check_online()?;
        let mut tree = self.tree.write();
        let node = node_at_mut(&mut tree, path.segments());
        match node {
            Value::Object(existing) => {
                for (key, value) in fields {
                    existing.insert(key, value);
                }
            }
            // Merging into a leaf replaces it with the merged object.
            other => *other = Value::Object(fields),
        }
        Ok(())
    }

    async fn remove(&self, path: &TreePath) -> StoreResult<()> {
        self.check_online()?;
        let mut tree = self.tree.write();
        remove_at(&mut tree, path.segments());
        Ok(())
    }

    async fn fetch(&self, path: &TreePath) -> StoreResult<Option<Snapshot>> {
        self.check_online()?;
        let tree = self.tree.read();
        Ok(node_at(&tree, path.segments())
            .filter(|value| !value.is_null())
            .map(|value| Snapshot::new(value.clone())))
    }
}

fn node_at<'a>(tree: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut node = tree;
    for segment in segments {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// Navigates to the node at `segments`, creating intermediate branches.
///
/// An existing leaf on the way down is replaced by a branch, matching
/// the remote store's overwrite-on-write behavior.
fn node_at_mut<'a>(tree: &'a mut Value, segments: &[String]) -> &'a mut Value {
    let mut node = tree;
    for segment in segments {
        if !node.is_object() {
            *node = Value::Object(serde_json::Map::new());
        }
        let Value::Object(map) = node else {
            unreachable!("branch ensured above");
        };
        node = map.entry(segment.as_str()).or_insert(Value::Null);
    }
    node
}

/// Removes the subtree at `segments`, pruning branches left empty.
fn remove_at(node: &mut Value, segments: &[String]) {
    match segments {
        [] => *node = Value::Null,
        [last] => {
            if let Value::Object(map) = node {
                map.remove(last);
            }
        }
        [first, rest @ ..] => {
            if let Value::Object(map) = node {
                if let Some(child) = map.get_mut(first) {
                    remove_at(child, rest);
                    let now_empty = match child {
                        Value::Object(inner) => inner.is_empty(),
                        Value::Null => true,
                        _ => false,
                    };
                    if now_empty {
                        map.remove(first);
                    }
                }
            }
        }
    }
}
