//! Dispatch-layer error types.

use provenance_ledgerapi::StoreError;

/// Top-level error type for the dispatch crate.
///
/// Every variant is terminal for the invocation that raised it: the
/// dispatcher converts it into an error `Response` and performs no
/// retries. None of these abort the process.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Wrong argument count for the invoked function.
    #[error("Incorrect number of arguments. Expecting {expected} for {function}.")]
    IncorrectArity {
        /// The invoked function name.
        function: &'static str,
        /// The arity that function requires.
        expected: usize,
    },

    /// No record exists for the requested key or predicate.
    ///
    /// An empty stored value and an absent key are reported identically.
    #[error("state for {0} is null")]
    NotFound(String),

    /// Unrecognized command name at the dispatcher.
    #[error("Invalid invoke function name!")]
    InvalidFunction(String),

    /// The external store raised a fault during read/write/delete/query.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Serializing the rich-query result array failed.
    #[error("result encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
