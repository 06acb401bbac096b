//! Error types for heap construction and mutation.
//!
//! Every failing precondition maps to exactly one [`HeapError`] kind before
//! any mutation takes place; a pop on an empty heap is an `Option::None`,
//! not an error. The core performs no retries and no logging — errors are
//! returned synchronously to the immediate caller.

use thiserror::Error;

/// Failure modes of heap operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A numeric parameter was out of range (zero initial capacity).
    #[error("invalid argument: initial capacity must be positive")]
    InvalidArgument,

    /// Backing storage could not be allocated or reallocated. The heap is
    /// left in its last valid state; a partial resize is never observable.
    #[error("out of memory: backing storage allocation failed")]
    OutOfMemory,

    /// The platform-derived maximum slot count was reached and another slot
    /// was requested. A hard limit, not a retryable condition.
    #[error("capacity exceeded: heap is at its maximum slot count")]
    CapacityExceeded,
}

/// Error returned by a failed push.
///
/// Carries the rejected element back to the caller, so a push that cannot
/// grow the heap never drops the value it was handed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind}")]
pub struct PushError<T> {
    /// Why the push failed.
    pub kind: HeapError,
    /// The element that was not inserted.
    pub element: T,
}

impl<T> PushError<T> {
    /// Recovers the rejected element.
    pub fn into_element(self) -> T {
        self.element
    }
}
