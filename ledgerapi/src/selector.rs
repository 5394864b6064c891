//! Selector documents for rich queries.
//!
//! A `Selector` is a structured field-equality predicate handed opaquely
//! to the store's query engine. It serializes to the query-engine wire
//! shape `{"selector":{field:value}}`. Building the document as a
//! serialized structure rather than by string formatting means field
//! values containing quotes or braces cannot corrupt the document.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::StoreError;

/// A field-equality predicate over record values parsed as JSON.
///
/// Matches records whose value, parsed as a JSON object, has every
/// listed field equal to the given string. BTreeMap keeps the serialized
/// field order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selector {
    selector: BTreeMap<String, String>,
}

impl Selector {
    /// Create a selector matching records where `field` equals `value`.
    pub fn field_eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        let mut selector = BTreeMap::new();
        selector.insert(field.into(), value.into());
        Self { selector }
    }

    /// Serialize to the query document handed to the store.
    pub fn to_document(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::query(e.to_string()))
    }

    /// Iterate the (field, expected value) pairs of this predicate.
    ///
    /// Used by in-process stores that evaluate the predicate themselves;
    /// remote backends consume [`to_document`](Self::to_document) instead.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selector.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
