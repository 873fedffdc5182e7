//! Point-in-time reads from the tree store.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// The field-mapping representation of an encoded entity.
///
/// A mapping from field name to dynamically-typed value. This is the
/// intermediate form that crosses the encode/decode boundary: writes
/// consume it, snapshots decode back out of it.
pub type FieldMap = serde_json::Map<String, Value>;

/// A point-in-time read of one location in the tree.
///
/// A snapshot wraps the raw dynamic value found at a location. It can
/// be decoded as a concrete type, or, when the location is a branch,
/// enumerated into immediate child snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    value: Value,
}

impl Snapshot {
    /// Wraps a raw value read from the store.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Returns the raw dynamic value.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.value
    }

    /// Attempts to decode the snapshot as `T`.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the value does not match
    /// the shape of `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.value.clone())
    }

    /// Returns the immediate child snapshots, keyed by segment.
    ///
    /// Children are returned in the store's key order (lexicographic).
    /// Leaf values have no children.
    #[must_use]
    pub fn children(&self) -> Vec<(String, Snapshot)> {
        match &self.value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), Snapshot::new(value.clone())))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns true if the location is a branch with at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        matches!(&self.value, Value::Object(map) if !map.is_empty())
    }
}
