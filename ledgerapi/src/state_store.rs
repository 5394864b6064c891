//! Ledger state store abstraction.
//!
//! `LedgerStore` defines the interface the dispatch layer uses to reach
//! the external key/value ledger state. Consistency, durability, and
//! query indexing are properties of the implementation behind this
//! trait, not of the callers.
//!
//! Implementations:
//! - `MemLedger` (this crate) — in-memory BTreeMap for testing
//! - a real ledger peer binding in production, out of scope here

use crate::cursor::QueryCursor;
use crate::error::StoreError;
use crate::selector::Selector;

/// Abstraction over the external ledger state store.
///
/// Methods take `&self`; implementations provide their own interior
/// synchronization, and the store is shared as `Arc<dyn LedgerStore>`.
pub trait LedgerStore: Send + Sync {
    /// Get the current value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist. An empty stored
    /// string is representable and returned as `Ok(Some(""))`; callers
    /// decide whether to distinguish it from absence.
    fn get_state(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set the value for a key, overwriting any prior value.
    fn put_state(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key.
    ///
    /// Behavior on an absent key is backend-defined; callers guard with
    /// a prior read if they need a defined outcome.
    fn del_state(&self, key: &str) -> Result<(), StoreError>;

    /// Execute a rich query against the store's query engine.
    ///
    /// The selector is opaque to the store's callers; the query engine
    /// interprets it against record values parsed as JSON. The returned
    /// cursor must be drained and closed by the caller.
    fn rich_query(&self, selector: &Selector) -> Result<Box<dyn QueryCursor>, StoreError>;
}
