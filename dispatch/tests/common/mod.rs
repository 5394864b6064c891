//! Shared test helpers for integration tests.
//!
//! Provides dispatcher factories over seeded in-memory ledgers, argument
//! builders, and a record constructor matching the batch-record value
//! shape used by the predicate-read tests.

#![allow(dead_code)]

use std::sync::Arc;

use provenance_dispatch::{Dispatcher, RecordingLogger};
use provenance_ledgerapi::MemLedger;

/// Dispatcher over an empty in-memory ledger.
pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(Arc::new(MemLedger::new()))
}

/// Dispatcher over a ledger seeded with the given records.
pub fn seeded_dispatcher(records: &[(&str, &str)]) -> Dispatcher {
    let store = Arc::new(MemLedger::new());
    for (key, value) in records {
        store.insert(*key, *value);
    }
    Dispatcher::new(store)
}

/// Dispatcher wired to a `RecordingLogger`, returned alongside it.
pub fn recording_dispatcher(records: &[(&str, &str)]) -> (Dispatcher, Arc<RecordingLogger>) {
    let store = Arc::new(MemLedger::new());
    for (key, value) in records {
        store.insert(*key, *value);
    }
    let logger = Arc::new(RecordingLogger::new());
    (Dispatcher::with_logger(store, logger.clone()), logger)
}

/// Build an owned argument list from string literals.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A JSON record value carrying a `productBatch` field.
pub fn batch_record(batch: &str, qty: u32) -> String {
    format!(r#"{{"productBatch":"{batch}","qty":{qty}}}"#)
}
