//! Common trait for min-priority queues
//!
//! [`MinQueue`] is the capability surface shared by the heaps in this
//! family: callers that only need "give me the smallest next" can accept
//! any `MinQueue<T>` and stay independent of the concrete comparator type
//! behind it.
//!
//! Unlike `std::collections::BinaryHeap`, implementors order elements with
//! a comparator fixed at construction rather than through `Ord`, and
//! insertion is fallible: growth is bounded by a hard maximum slot count
//! and allocation failure is reported rather than aborting.

use crate::error::PushError;

/// Base trait for min-priority queue data structures
///
/// All ordering language below ("minimum", "smallest") is relative to the
/// implementor's comparator.
///
/// # Example
///
/// ```rust
/// use capheap::{BinaryMinHeap, MinQueue};
///
/// fn drain_ascending<Q: MinQueue<i32>>(queue: &mut Q) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some(item) = queue.pop() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap = BinaryMinHeap::with_capacity(4).unwrap();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
/// assert_eq!(drain_ascending(&mut heap), vec![1, 2, 3]);
/// ```
pub trait MinQueue<T> {
    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of element slots currently allocated
    fn capacity(&self) -> usize;

    /// Inserts an element
    ///
    /// On failure the queue is unchanged and the rejected element is
    /// returned inside the error.
    ///
    /// # Time Complexity
    /// O(log n) comparisons; growth is amortized O(1).
    fn push(&mut self, item: T) -> Result<(), PushError<T>>;

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element, or `None` if empty
    ///
    /// The empty outcome is an expected, recoverable condition, not an
    /// error.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Removes all elements, retaining allocated capacity
    ///
    /// # Time Complexity
    /// O(n) to drop the live elements
    fn clear(&mut self);
}
