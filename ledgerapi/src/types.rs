//! Shared record and configuration types for the ledger state store.

/// A single ledger record: an opaque string key and its stored value.
///
/// Keys are caller-supplied and unique per key (last write wins). No
/// schema is enforced on `value` at this layer; rich queries interpret
/// it as JSON inside the store's query engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// The record key.
    pub key: String,
    /// The raw stored value.
    pub value: String,
}

impl KeyValue {
    /// Create a record from key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Size bounds a store enforces on keys and values.
///
/// Violations surface as `StoreError` from the write path; production
/// backends enforce their own equivalents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLimits {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_key_len: 256,
            max_value_len: 64 * 1024, // 64 KiB
        }
    }
}
