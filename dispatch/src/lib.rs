//! `provenance-dispatch` — command dispatcher over the ledger state store.
//!
//! This crate receives named invocations with string arguments, routes
//! them to one of four operation handlers, and converts every outcome
//! into a uniform success/error response. It enforces:
//!
//! - **Closed command set:** `save`, `query`, `queryByProductBatch`,
//!   `delete`; anything else is rejected before any store interaction
//! - **Fixed arity:** argument counts are validated per command
//! - **No partial progress:** each invocation performs one logical store
//!   action; a partially enumerated query cursor is discarded and released
//! - **Total responses:** every path terminates in a `Response`, never a
//!   panic or an unhandled fault
//!
//! The primary entry point is [`Dispatcher::dispatch`].

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod response;

pub use command::Command;
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use logger::{OpLogger, RecordingLogger, TracingLogger};
pub use response::{Response, ResponseStatus};
