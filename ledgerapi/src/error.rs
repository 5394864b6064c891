//! Store-side error types.

/// Error type returned by `LedgerStore` and `QueryCursor` implementations.
///
/// The dispatch layer does not interpret these beyond surfacing the
/// message to its caller; retry policy belongs to the transport.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backend reported a fault during a read, write, or delete.
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend rejected or failed a rich query.
    #[error("query error: {0}")]
    Query(String),

    /// A state key was empty.
    #[error("state key must not be empty")]
    InvalidKey,

    /// A state key exceeded the configured length limit.
    #[error("key length {len} exceeds limit {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// A state value exceeded the configured length limit.
    #[error("value length {len} exceeds limit {max}")]
    ValueTooLarge { len: usize, max: usize },

    /// A cursor was advanced after being closed.
    #[error("cursor already closed")]
    CursorClosed,
}

impl StoreError {
    /// Create a backend error from any displayable cause.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a query error from any displayable cause.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }
}
