//! Array-backed binary min-heap with an explicit capacity policy
//!
//! [`BinaryMinHeap`] stores its elements in a contiguous buffer used as an
//! implicit complete binary tree: for index `i`, the children live at
//! `2i + 1` and `2i + 2` and the parent at `(i - 1) / 2`. Ordering comes
//! entirely from a comparator fixed at construction, so the same element
//! type can back ascending, descending, or field-projected heaps without
//! wrapper types.
//!
//! Capacity is tracked explicitly. The heap is created with a positive
//! initial capacity, doubles when full, and is capped at
//! [`BinaryMinHeap::MAX_CAPACITY`] — the largest slot count whose byte size
//! still fits the platform's allocation limit. Growth and compaction
//! allocate fallibly: on failure the old buffer stays live and the heap is
//! unchanged.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity             |
//! |-----------------|------------------------|
//! | `push`          | O(log n), amortized O(1) growth |
//! | `pop`           | O(log n)               |
//! | `peek`          | O(1)                   |
//! | `clear`         | O(n)                   |
//! | `shrink_to_fit` | O(n)                   |
//!
//! # Example
//!
//! ```rust
//! use capheap::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::with_capacity(4).unwrap();
//! heap.push(5).unwrap();
//! heap.push(3).unwrap();
//! heap.push(8).unwrap();
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), None);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::slice;

use compare::{natural, Compare, Natural};

use crate::error::{HeapError, PushError};
use crate::traits::MinQueue;

/// A binary min-heap ordered by a caller-supplied comparator
///
/// The comparator `C` is any [`Compare<T>`](compare::Compare), including
/// plain closures of type `Fn(&T, &T) -> Ordering`. It must describe a
/// total order and must behave consistently for the lifetime of the heap;
/// comparing inconsistently scrambles the ordering but is memory-safe.
///
/// The heap with the default `Natural<T>` comparator orders `T: Ord`
/// ascending, like `std::collections::BinaryHeap<Reverse<T>>` but with the
/// fallible, explicitly bounded growth described in the module docs.
pub struct BinaryMinHeap<T, C: Compare<T> = Natural<T>> {
    /// Live elements at `[0, len)` in implicit-tree order; the buffer
    /// always has room for `cap` elements.
    data: Vec<T>,
    /// Logical slot count: `data.len() <= cap <= MAX_CAPACITY`.
    cap: usize,
    cmp: C,
}

impl<T: Ord> BinaryMinHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural ordering.
    ///
    /// # Errors
    /// See [`with_comparator`](Self::with_comparator).
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(natural(), initial_capacity)
    }
}

impl<T, C: Compare<T>> BinaryMinHeap<T, C> {
    const ELEM_SIZE: usize = if mem::size_of::<T>() == 0 {
        1
    } else {
        mem::size_of::<T>()
    };

    /// The largest number of element slots this heap will ever allocate.
    ///
    /// Derived from the platform's allocation limit divided by the element
    /// size, so that doubling the capacity can never overflow the byte-size
    /// computation. An overflow guard, not an expected operating limit.
    pub const MAX_CAPACITY: usize = isize::MAX as usize / Self::ELEM_SIZE;

    /// Creates an empty heap ordered by `cmp`.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidArgument`] if `initial_capacity` is zero
    /// - [`HeapError::CapacityExceeded`] if `initial_capacity` exceeds
    ///   [`MAX_CAPACITY`](Self::MAX_CAPACITY)
    /// - [`HeapError::OutOfMemory`] if the backing buffer cannot be
    ///   allocated
    pub fn with_comparator(cmp: C, initial_capacity: usize) -> Result<Self, HeapError> {
        if initial_capacity == 0 {
            return Err(HeapError::InvalidArgument);
        }
        if initial_capacity > Self::MAX_CAPACITY {
            return Err(HeapError::CapacityExceeded);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(initial_capacity)
            .map_err(|_| HeapError::OutOfMemory)?;
        Ok(Self {
            data,
            cap: initial_capacity,
            cmp,
        })
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of element slots currently allocated.
    ///
    /// Capacity only grows under the doubling policy and only shrinks via
    /// [`shrink_to_fit`](Self::shrink_to_fit).
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the minimum element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element, growing the backing buffer if it is full.
    ///
    /// # Errors
    ///
    /// On failure the heap is unchanged and the element travels back inside
    /// the [`PushError`]:
    ///
    /// - [`HeapError::CapacityExceeded`] if the heap is already at
    ///   [`MAX_CAPACITY`](Self::MAX_CAPACITY)
    /// - [`HeapError::OutOfMemory`] if the grown buffer cannot be allocated
    pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.data.len() == self.cap {
            if let Err(kind) = self.grow() {
                return Err(PushError {
                    kind,
                    element: item,
                });
            }
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Removes and returns the minimum element, or `None` if the heap is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Drops all elements. Allocated capacity is retained, so a cleared
    /// heap refills without reallocating. Idempotent.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Shrinks the allocated capacity to exactly the current length.
    ///
    /// The replacement buffer is allocated before the old one is released;
    /// on [`HeapError::OutOfMemory`] the heap is left untouched. Compacting
    /// an empty heap leaves capacity 0 and a later push regrows from a
    /// single slot.
    pub fn shrink_to_fit(&mut self) -> Result<(), HeapError> {
        if self.cap == self.data.len() {
            return Ok(());
        }
        let mut tight = Vec::new();
        tight
            .try_reserve_exact(self.data.len())
            .map_err(|_| HeapError::OutOfMemory)?;
        tight.append(&mut self.data);
        self.data = tight;
        self.cap = self.data.len();
        Ok(())
    }

    /// Returns an iterator over the elements in storage (implicit-tree)
    /// order. No ordering guarantee beyond the heap invariant itself.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns its elements sorted ascending under
    /// the comparator. O(n log n).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Doubles `cap`, capped at `MAX_CAPACITY`. The live prefix is copied
    /// as-is; growth never reorders elements or changes `len`.
    fn grow(&mut self) -> Result<(), HeapError> {
        if self.cap == Self::MAX_CAPACITY {
            return Err(HeapError::CapacityExceeded);
        }
        // A compacted-empty heap has cap 0 and regrows from a single slot.
        let new_cap = self.cap.saturating_mul(2).clamp(1, Self::MAX_CAPACITY);
        self.data
            .try_reserve_exact(new_cap - self.data.len())
            .map_err(|_| HeapError::OutOfMemory)?;
        self.cap = new_cap;
        Ok(())
    }

    /// Move element at index up to maintain heap order
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.compare(&self.data[index], &self.data[parent]) == Ordering::Less {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap order
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                break;
            }
            // Equal children resolve to the left (lower index); the right
            // child wins only when strictly smaller.
            let mut child = left;
            if right < len && self.cmp.compare(&self.data[right], &self.data[left]) == Ordering::Less
            {
                child = right;
            }
            if self.cmp.compare(&self.data[child], &self.data[index]) == Ordering::Less {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> MinQueue<T> for BinaryMinHeap<T, C> {
    fn len(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        self.push(item)
    }

    fn peek(&self) -> Option<&T> {
        self.peek()
    }

    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a BinaryMinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug, C: Compare<T>> Debug for BinaryMinHeap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
