//! Query result cursors.
//!
//! `QueryCursor` is the scoped-resource view of a rich query's results:
//! a lazy, finite, non-restartable sequence that must be explicitly
//! released. Callers drain with `next` until `Ok(None)` and call `close`
//! on every exit path, including early exits on error.

use crate::error::StoreError;
use crate::types::KeyValue;

/// A lazily advancing sequence of rich-query matches.
///
/// Cursors are finite and non-restartable. `close` releases any
/// store-side resources and is idempotent; advancing a closed cursor
/// is an error.
pub trait QueryCursor {
    /// Advance to the next matching record.
    ///
    /// Returns `Ok(None)` once the result set is exhausted.
    fn next(&mut self) -> Result<Option<KeyValue>, StoreError>;

    /// Release the cursor.
    fn close(&mut self) -> Result<(), StoreError>;
}

/// Cursor over an already collected result set.
///
/// Used by in-process stores such as `MemLedger`, which evaluate the
/// whole predicate up front and then replay the matches in order.
#[derive(Debug)]
pub struct VecCursor {
    items: std::vec::IntoIter<KeyValue>,
    closed: bool,
}

impl VecCursor {
    /// Create a cursor replaying `items` in order.
    pub fn new(items: Vec<KeyValue>) -> Self {
        Self {
            items: items.into_iter(),
            closed: false,
        }
    }
}

impl QueryCursor for VecCursor {
    fn next(&mut self) -> Result<Option<KeyValue>, StoreError> {
        if self.closed {
            return Err(StoreError::CursorClosed);
        }
        Ok(self.items.next())
    }

    fn close(&mut self) -> Result<(), StoreError> {
        self.closed = true;
        Ok(())
    }
}
