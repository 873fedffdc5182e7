//! Hierarchical addressing into the tree store.

use crate::error::{StoreError, StoreResult};
use std::fmt;

/// An ordered sequence of segments addressing one location in the tree.
///
/// Segments are the components of a slash-delimited hierarchical key.
/// Every segment must be non-empty and must not contain a `/`; the
/// constructors enforce this, so a `TreePath` in hand is always valid.
///
/// The empty path is representable and addresses the root of the tree.
/// Entity-level operations require a non-empty path; that precondition
/// is checked by the accessor layer, not here.
///
/// # Example
///
/// ```rust
/// use treebase_store::TreePath;
///
/// let path = TreePath::new(["tasks", "abc123"]).unwrap();
/// assert_eq!(path.to_string(), "/tasks/abc123");
/// assert_eq!(path.parent().unwrap().to_string(), "/tasks");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TreePath(Vec<String>);

impl TreePath {
    /// Returns the root (empty) path.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from an ordered sequence of segments.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidSegment`] if any segment is empty
    /// or contains a `/`.
    pub fn new<I, S>(segments: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        for segment in &segments {
            validate_segment(segment)?;
        }
        Ok(Self(segments))
    }

    /// Returns the path extended by one child segment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidSegment`] if the segment is empty
    /// or contains a `/`.
    pub fn child(&self, segment: impl Into<String>) -> StoreResult<Self> {
        let segment = segment.into();
        validate_segment(&segment)?;
        Ok(self.clone().push_unchecked(segment))
    }

    /// Returns the path with the final segment removed.
    ///
    /// Returns `None` for the root path. A single-segment path yields
    /// the root path, which addresses the top level of the tree.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Returns the ordered segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this is the root (empty) path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a segment without re-validating it.
    ///
    /// Only for segments already known valid (taken from another
    /// `TreePath`).
    pub(crate) fn push_unchecked(mut self, segment: String) -> Self {
        self.0.push(segment);
        self
    }
}

fn validate_segment(segment: &str) -> StoreResult<()> {
    if segment.is_empty() {
        return Err(StoreError::InvalidSegment {
            reason: "segments must be non-empty".into(),
        });
    }
    if segment.contains('/') {
        return Err(StoreError::InvalidSegment {
            reason: format!("segment {segment:?} contains '/'"),
        });
    }
    Ok(())
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
