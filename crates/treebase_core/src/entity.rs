//! The addressable-entity capability.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A model type that knows its own location in the tree store.
///
/// Implementors are fully serializable and report an ordered sequence
/// of path segments locating the value in the store. Path derivation
/// is pure: no side effects, re-derived fresh on every operation, and
/// there is no identity beyond structural equality of the segments.
///
/// The path must be non-empty for entity-level operations (create,
/// read, update, delete); the accessor rejects empty paths before any
/// I/O.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use treebase_core::Datable;
///
/// #[derive(Serialize, Deserialize)]
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
/// let task = Task { id: "abc123".into(), title: "x".into() };
/// assert_eq!(task.path(), ["tasks", "abc123"]);
/// assert_eq!(task.parent_path(), ["tasks"]);
/// ```
pub trait Datable: Serialize + DeserializeOwned {
    /// Returns the ordered path segments locating this entity.
    fn path(&self) -> Vec<String>;

    /// Returns the path with its final segment removed.
    ///
    /// Addresses the collection containing this entity's siblings;
    /// used only for sibling listing, never for entity reads. For a
    /// single-segment path this yields the root (empty) path.
    fn parent_path(&self) -> Vec<String> {
        let mut segments = self.path();
        segments.pop();
        segments
    }
}
