//! Dispatcher — routing and the four operation handlers.
//!
//! `Dispatcher` is the single entry point exposed to the hosting
//! transport. Each invocation is validated, performs exactly one logical
//! action against the ledger state store, and terminates in a
//! `Response`. Handlers are stateless; all state lives in the store.

use std::sync::Arc;

use provenance_ledgerapi::{LedgerStore, Selector};

use crate::command::Command;
use crate::error::DispatchError;
use crate::logger::{OpLogger, TracingLogger};
use crate::response::Response;

/// Record-value field matched by `queryByProductBatch`.
const PRODUCT_BATCH_FIELD: &str = "productBatch";

/// Command dispatcher over a ledger state store.
///
/// Holds no per-call state and no cross-call caches; invocations are
/// independent, and concurrency control is the store's concern.
pub struct Dispatcher {
    store: Arc<dyn LedgerStore>,
    logger: Arc<dyn OpLogger>,
}

impl Dispatcher {
    /// Create a dispatcher logging through `tracing`.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self::with_logger(store, Arc::new(TracingLogger))
    }

    /// Create a dispatcher with an explicit logging collaborator.
    pub fn with_logger(store: Arc<dyn LedgerStore>, logger: Arc<dyn OpLogger>) -> Self {
        Self { store, logger }
    }

    /// Lifecycle acknowledgement for the hosting transport.
    ///
    /// Touches no state; always succeeds.
    pub fn init(&self) -> Response {
        self.logger.info("init provenance dispatch");
        Response::success()
    }

    /// Dispatch one invocation — the primary entry point.
    ///
    /// Routes `function` to its handler and converts every failure,
    /// including store faults, into an error `Response`. No path
    /// panics and nothing is retried.
    pub fn dispatch(&self, function: &str, args: &[String]) -> Response {
        self.logger.debug(&format!("invoke {function}"));
        match self.invoke(function, args) {
            Ok(resp) => resp,
            Err(err) => Response::error(err.to_string()),
        }
    }

    fn invoke(&self, function: &str, args: &[String]) -> Result<Response, DispatchError> {
        match Command::parse(function, args)? {
            Command::Save { key, value } => self.save(&key, &value),
            Command::Query { key } => self.query(&key),
            Command::QueryByProductBatch { batch } => self.query_by_product_batch(&batch),
            Command::Delete { key } => self.delete(&key),
        }
    }

    /// Upsert `key` to `value`. Repeated saves of the same pair converge
    /// to the same state.
    fn save(&self, key: &str, value: &str) -> Result<Response, DispatchError> {
        self.store.put_state(key, value)?;
        self.logger.info(&format!("put state {{{key}:{value}}}"));
        Ok(Response::success())
    }

    /// Read the current value for `key`.
    fn query(&self, key: &str) -> Result<Response, DispatchError> {
        let value = self.read_existing(key)?;
        self.logger.info(&format!("query result {{{key}:{value}}}"));
        Ok(Response::success_with(value.clone(), value.into_bytes()))
    }

    /// Read all records whose value has `productBatch` equal to `batch`.
    ///
    /// Zero matches is an error, not an empty success; callers branch on
    /// the response status, never on result length. The cursor is
    /// released on every exit path, and a partial enumeration interrupted
    /// by a store fault is discarded rather than returned truncated.
    fn query_by_product_batch(&self, batch: &str) -> Result<Response, DispatchError> {
        let selector = Selector::field_eq(PRODUCT_BATCH_FIELD, batch);
        self.logger.debug(&selector.to_document()?);

        let mut cursor = self.store.rich_query(&selector)?;
        let mut values = Vec::new();
        let drained = loop {
            match cursor.next() {
                Ok(Some(record)) => values.push(record.value),
                Ok(None) => break Ok(()),
                Err(err) => break Err(err),
            }
        };
        let closed = cursor.close();
        drained?;
        closed?;

        if values.is_empty() {
            return Err(DispatchError::NotFound(batch.to_string()));
        }
        let result = serde_json::to_string(&values)?;
        self.logger.info(&format!("query result {result}"));
        Ok(Response::success_with(result.clone(), result.into_bytes()))
    }

    /// Remove `key` after confirming it exists.
    ///
    /// Deleting an absent key is an error, not a no-op; callers depend
    /// on the not-found signal.
    fn delete(&self, key: &str) -> Result<Response, DispatchError> {
        let value = self.read_existing(key)?;
        self.store.del_state(key)?;
        self.logger.info(&format!("delete state {{{key}:{value}}}"));
        Ok(Response::success())
    }

    /// Read `key`, treating an absent key and an empty stored value as
    /// the same not-found outcome.
    fn read_existing(&self, key: &str) -> Result<String, DispatchError> {
        match self.store.get_state(key)? {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(DispatchError::NotFound(key.to_string())),
        }
    }
}
