//! In-memory ledger state store for testing.
//!
//! `MemLedger` implements `LedgerStore` over a `BTreeMap` guarded by a
//! `parking_lot::RwLock`. BTreeMap gives deterministic key order, so
//! rich-query results replay in a stable order across runs. The selector
//! evaluation emulates the external query engine: each stored value is
//! parsed as JSON and matched on field equality; values that are not
//! JSON objects simply never match.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::cursor::{QueryCursor, VecCursor};
use crate::error::StoreError;
use crate::selector::Selector;
use crate::state_store::LedgerStore;
use crate::types::{KeyValue, StoreLimits};

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Default)]
pub struct MemLedger {
    data: RwLock<BTreeMap<String, String>>,
    limits: StoreLimits,
}

impl MemLedger {
    /// Create a new empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with explicit limits.
    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            limits,
        }
    }

    /// Create a store pre-populated with data.
    pub fn with_data(data: BTreeMap<String, String>) -> Self {
        Self {
            data: RwLock::new(data),
            limits: StoreLimits::default(),
        }
    }

    /// Insert a key-value pair, bypassing limit checks.
    ///
    /// Seeding helper for tests; goes through the lock but not through
    /// the `put_state` validation.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.data.write().insert(key.into(), value.into());
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    fn check_key(&self, key: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey);
        }
        if key.len() > self.limits.max_key_len {
            return Err(StoreError::KeyTooLarge {
                len: key.len(),
                max: self.limits.max_key_len,
            });
        }
        Ok(())
    }
}

impl LedgerStore for MemLedger {
    fn get_state(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_key(key)?;
        if value.len() > self.limits.max_value_len {
            return Err(StoreError::ValueTooLarge {
                len: value.len(),
                max: self.limits.max_value_len,
            });
        }
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn del_state(&self, key: &str) -> Result<(), StoreError> {
        self.check_key(key)?;
        match self.data.write().remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::backend(format!("delete of absent key {key}"))),
        }
    }

    fn rich_query(&self, selector: &Selector) -> Result<Box<dyn QueryCursor>, StoreError> {
        let matches: Vec<KeyValue> = self
            .data
            .read()
            .iter()
            .filter(|(_, value)| matches_selector(value, selector))
            .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
            .collect();
        Ok(Box::new(VecCursor::new(matches)))
    }
}

/// Evaluate a field-equality selector against a raw stored value.
///
/// Values that do not parse as JSON objects never match, mirroring how
/// a document query engine skips non-document values.
fn matches_selector(value: &str, selector: &Selector) -> bool {
    let Ok(doc) = serde_json::from_str::<serde_json::Value>(value) else {
        return false;
    };
    selector
        .fields()
        .all(|(field, expected)| doc.get(field).and_then(|v| v.as_str()) == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut cursor: Box<dyn QueryCursor>) -> Vec<KeyValue> {
        let mut out = Vec::new();
        while let Some(kv) = cursor.next().unwrap() {
            out.push(kv);
        }
        cursor.close().unwrap();
        out
    }

    #[test]
    fn test_empty_store() {
        let store = MemLedger::new();
        assert!(store.is_empty());
        assert_eq!(store.get_state("missing").unwrap(), None);
    }

    #[test]
    fn test_put_and_get() {
        let store = MemLedger::new();
        store.put_state("key1", "value1").unwrap();
        assert_eq!(store.get_state("key1").unwrap(), Some("value1".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemLedger::new();
        store.put_state("key1", "v1").unwrap();
        store.put_state("key1", "v2").unwrap();
        assert_eq!(store.get_state("key1").unwrap(), Some("v2".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_del_removes() {
        let store = MemLedger::new();
        store.put_state("key1", "value1").unwrap();
        store.del_state("key1").unwrap();
        assert_eq!(store.get_state("key1").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_del_absent_key_errors() {
        let store = MemLedger::new();
        let err = store.del_state("missing").unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[test]
    fn test_empty_key_rejected() {
        let store = MemLedger::new();
        let err = store.put_state("", "value").unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey));
    }

    #[test]
    fn test_key_too_large_rejected() {
        let store = MemLedger::new();
        let key = "k".repeat(257);
        let err = store.put_state(&key, "value").unwrap_err();
        assert!(matches!(err, StoreError::KeyTooLarge { len: 257, max: 256 }));
    }

    #[test]
    fn test_value_too_large_rejected() {
        let store = MemLedger::with_limits(StoreLimits {
            max_key_len: 256,
            max_value_len: 8,
        });
        let err = store.put_state("key", "123456789").unwrap_err();
        assert!(matches!(err, StoreError::ValueTooLarge { len: 9, max: 8 }));
    }

    #[test]
    fn test_rich_query_matches_field() {
        let store = MemLedger::new();
        store.insert("b1", r#"{"productBatch":"B1","qty":5}"#);
        store.insert("b2", r#"{"productBatch":"B2","qty":3}"#);
        store.insert("b3", r#"{"productBatch":"B1","qty":9}"#);

        let selector = Selector::field_eq("productBatch", "B1");
        let matches = drain(store.rich_query(&selector).unwrap());
        let keys: Vec<_> = matches.iter().map(|kv| kv.key.as_str()).collect();
        assert_eq!(keys, vec!["b1", "b3"]);
    }

    #[test]
    fn test_rich_query_skips_non_json_values() {
        let store = MemLedger::new();
        store.insert("plain", "B1");
        store.insert("json", r#"{"productBatch":"B1"}"#);

        let selector = Selector::field_eq("productBatch", "B1");
        let matches = drain(store.rich_query(&selector).unwrap());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].key, "json");
    }

    #[test]
    fn test_rich_query_no_matches_yields_empty_cursor() {
        let store = MemLedger::new();
        store.insert("b1", r#"{"productBatch":"B1"}"#);

        let selector = Selector::field_eq("productBatch", "B9");
        let matches = drain(store.rich_query(&selector).unwrap());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_rich_query_field_must_be_string() {
        let store = MemLedger::new();
        store.insert("num", r#"{"productBatch":1}"#);

        let selector = Selector::field_eq("productBatch", "1");
        let matches = drain(store.rich_query(&selector).unwrap());
        assert!(matches.is_empty());
    }
}
