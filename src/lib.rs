//! Capacity-aware binary min-heap for Rust
//!
//! This crate provides [`BinaryMinHeap`], a generic priority queue ordered
//! by a caller-supplied comparator, with an explicit capacity model:
//!
//! - **Comparator-driven ordering**: any [`compare::Compare<T>`] works,
//!   including plain `Fn(&T, &T) -> Ordering` closures; no `Ord` wrapper
//!   types needed for descending or field-projected orderings
//! - **Explicit capacity**: created with a positive initial capacity,
//!   doubled on demand, hard-capped at a platform-derived
//!   [`MAX_CAPACITY`](BinaryMinHeap::MAX_CAPACITY)
//! - **Fallible allocation**: growth, construction, and compaction report
//!   [`HeapError::OutOfMemory`] instead of aborting, and a failed operation
//!   leaves the heap in its last valid state
//! - **No silent element loss**: a rejected push hands the element back
//!   through [`PushError`]
//!
//! The [`MinQueue`] trait abstracts over heaps with different comparator
//! types for callers that only consume the queue surface.
//!
//! # Example
//!
//! ```rust
//! use capheap::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::with_capacity(4).unwrap();
//! for value in [5, 3, 8, 1, 9] {
//!     heap.push(value).unwrap();
//! }
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod binary;
pub mod error;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryMinHeap;
pub use error::{HeapError, PushError};
pub use traits::MinQueue;
