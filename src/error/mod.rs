//! Error types for growbuf.

use std::collections::TryReserveError;
use std::fmt;

/// Errors that can occur during buffer operations.
///
/// Allocation is the only fallible step. Whenever an error is returned the
/// buffer that produced it has already been released to the empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not provide storage for the requested elements.
    OutOfMemory {
        /// Number of elements the failed allocation asked for.
        requested: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::OutOfMemory { requested } => {
                write!(f, "out of memory: cannot allocate {} elements", requested)
            }
        }
    }
}

impl std::error::Error for BufferError {}

impl From<TryReserveError> for BufferError {
    fn from(_: TryReserveError) -> Self {
        // The reservation error does not expose the element count.
        BufferError::OutOfMemory { requested: 0 }
    }
}
