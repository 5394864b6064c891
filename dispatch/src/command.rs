//! Command parsing and arity validation.
//!
//! Incoming invocations arrive as a function name plus an ordered list
//! of string arguments. This module turns them into a closed `Command`
//! enum, so the dispatcher matches exhaustively instead of comparing
//! strings at each call site. Unknown names and wrong argument counts
//! are rejected here, before any store interaction.

use crate::error::DispatchError;

/// Function name for the write operation.
pub const FN_SAVE: &str = "save";
/// Function name for the point read.
pub const FN_QUERY: &str = "query";
/// Function name for the predicate read.
pub const FN_QUERY_BY_PRODUCT_BATCH: &str = "queryByProductBatch";
/// Function name for the delete.
pub const FN_DELETE: &str = "delete";

/// A validated invocation, ready for its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Upsert a record.
    Save {
        /// Record key.
        key: String,
        /// Raw value to store.
        value: String,
    },
    /// Read one record by key.
    Query {
        /// Record key.
        key: String,
    },
    /// Read all records whose value has a matching `productBatch` field.
    QueryByProductBatch {
        /// Batch identifier to match.
        batch: String,
    },
    /// Remove one record by key. The key must currently exist.
    Delete {
        /// Record key.
        key: String,
    },
}

impl Command {
    /// Parse a function name and argument list into a command.
    ///
    /// Arity is fixed per function: `save` takes 2 arguments, the other
    /// three take 1. Unknown function names yield `InvalidFunction`.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, DispatchError> {
        match function {
            FN_SAVE => {
                expect_args(FN_SAVE, args, 2)?;
                Ok(Self::Save {
                    key: args[0].clone(),
                    value: args[1].clone(),
                })
            }
            FN_QUERY => {
                expect_args(FN_QUERY, args, 1)?;
                Ok(Self::Query {
                    key: args[0].clone(),
                })
            }
            FN_QUERY_BY_PRODUCT_BATCH => {
                expect_args(FN_QUERY_BY_PRODUCT_BATCH, args, 1)?;
                Ok(Self::QueryByProductBatch {
                    batch: args[0].clone(),
                })
            }
            FN_DELETE => {
                expect_args(FN_DELETE, args, 1)?;
                Ok(Self::Delete {
                    key: args[0].clone(),
                })
            }
            _ => Err(DispatchError::InvalidFunction(function.to_string())),
        }
    }

    /// The wire name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Save { .. } => FN_SAVE,
            Self::Query { .. } => FN_QUERY,
            Self::QueryByProductBatch { .. } => FN_QUERY_BY_PRODUCT_BATCH,
            Self::Delete { .. } => FN_DELETE,
        }
    }
}

fn expect_args(
    function: &'static str,
    args: &[String],
    expected: usize,
) -> Result<(), DispatchError> {
    if args.len() != expected {
        return Err(DispatchError::IncorrectArity { function, expected });
    }
    Ok(())
}
