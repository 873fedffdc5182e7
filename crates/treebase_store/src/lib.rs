//! # treebase Store
//!
//! Tree store boundary for treebase.
//!
//! This crate defines the seam between the typed convenience layer and
//! the external realtime tree store:
//!
//! - [`TreePath`] - validated hierarchical address (slash-delimited key)
//! - [`TreeBackend`] - the external store's operations (write, merge,
//!   remove, fetch), each resolving exactly once
//! - [`TreeRef`] - ephemeral location handle, built by folding a root
//!   reference through path segments
//! - [`Snapshot`] - point-in-time read with typed decode and child
//!   enumeration
//! - [`MemoryBackend`] - in-process backend for tests and demos
//!
//! The backend owns transport, authentication, and storage; this layer
//! owns only addressing and the encode/decode boundary.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use treebase_store::{MemoryBackend, TreeRef};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let root = TreeRef::root(Arc::new(MemoryBackend::new()));
//! let task = root.child("tasks").child("abc123");
//! task.set(serde_json::json!({ "title": "x" })).await.unwrap();
//!
//! let snapshot = task.get().await.unwrap().unwrap();
//! assert!(snapshot.has_children());
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod memory;
mod path;
mod snapshot;

pub use backend::{TreeBackend, TreeRef};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryBackend;
pub use path::TreePath;
pub use snapshot::{FieldMap, Snapshot};
