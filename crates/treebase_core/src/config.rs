//! Configuration for the store accessor.

/// Policy for I/O failures of create, update, and delete.
///
/// The read family always reports failures in full; writes are
/// fire-and-forget by default, matching the remote store SDK's
/// original contract. Whether that gap is intentional is unresolved
/// upstream, so it is configurable rather than silently fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Drop write I/O failures after logging a warning.
    ///
    /// Pre-flight encoding errors are still surfaced.
    #[default]
    FireAndForget,
    /// Propagate write I/O failures to the caller.
    Surface,
}

/// Configuration for a [`crate::StoreAccessor`].
#[derive(Debug, Clone, Default)]
pub struct AccessorConfig {
    /// How write I/O failures are reported.
    pub write_policy: WritePolicy,
}

impl AccessorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the write policy.
    #[must_use]
    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.write_policy = policy;
        self
    }
}
