//! # treebase Core
//!
//! Typed, path-addressed CRUD over a remote realtime tree store.
//!
//! This crate provides:
//! - [`Datable`] - the addressable-entity capability: any serializable
//!   type that reports its own location as path segments
//! - [`StoreAccessor`] - create / read / read-siblings / update /
//!   delete against entity-derived or explicit paths
//! - [`to_field_map`] / [`from_field_map`] - the encode/decode boundary
//! - [`AccessorConfig`] / [`WritePolicy`] - write-outcome reporting
//!
//! ## Key Invariants
//!
//! - Encoding failures abort an operation before any I/O
//! - Read operations report success or failure in full; write I/O
//!   outcomes follow the configured [`WritePolicy`]
//!   (fire-and-forget by default, as the original SDK contract has it)
//! - Paths are re-derived fresh per operation; nothing is cached
//! - No retries, ordering guarantees, or cancellation at this layer
//!
//! The external store is reached through
//! [`treebase_store::TreeBackend`]; see [`treebase_store`] for the
//! boundary types ([`TreePath`], snapshots, the in-memory backend).

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod accessor;
mod codec;
mod config;
mod entity;
mod error;

pub use accessor::StoreAccessor;
pub use codec::{from_field_map, to_field_map};
pub use config::{AccessorConfig, WritePolicy};
pub use entity::Datable;
pub use error::{AccessorError, AccessorResult};

pub use treebase_store::{FieldMap, Snapshot, StoreError, TreeBackend, TreePath, TreeRef};
