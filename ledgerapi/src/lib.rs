//! `provenance-ledgerapi` — ledger state store trait definitions and types.
//!
//! This crate defines the narrow interface through which the provenance
//! dispatch layer talks to the external ledger state store. It provides:
//!
//! - `LedgerStore` trait — the four store primitives (get/put/del/rich query)
//! - `QueryCursor` trait — lazy, finite, explicitly released query results
//! - `Selector` — structured field-equality predicate document
//! - `KeyValue` — a single ledger record
//! - `StoreLimits` — per-store key/value size bounds
//! - `MemLedger` — in-memory `LedgerStore` for testing
//! - `StoreError` — store-side error type
//!
//! The store itself (consensus, persistence, indexing) lives behind this
//! boundary; implementations here are test doubles only.

pub mod cursor;
pub mod error;
pub mod mem_ledger;
pub mod selector;
pub mod state_store;
pub mod types;

// Re-export commonly used types at the crate root.
pub use cursor::{QueryCursor, VecCursor};
pub use error::StoreError;
pub use mem_ledger::MemLedger;
pub use selector::Selector;
pub use state_store::LedgerStore;
pub use types::{KeyValue, StoreLimits};
