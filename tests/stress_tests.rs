//! Stress tests that push the heap through large, adversarial workloads
//!
//! These perform large numbers of operations in various patterns to catch
//! edge cases and verify correctness under load.

use rand::seq::SliceRandom;
use rand::SeedableRng;

use capheap::BinaryMinHeap;

#[test]
fn test_massive_push_pop() {
    let mut heap = BinaryMinHeap::with_capacity(1).unwrap();

    for i in 0..10_000 {
        heap.push(i).unwrap();
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_shuffled_insertion_drains_sorted() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    let mut values: Vec<u32> = (0..5_000).collect();
    values.shuffle(&mut rng);

    let mut heap = BinaryMinHeap::with_capacity(2).unwrap();
    for &v in &values {
        heap.push(v).unwrap();
    }

    for expected in 0..5_000 {
        assert_eq!(heap.pop(), Some(expected));
    }
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_alternating_ops() {
    let mut heap = BinaryMinHeap::with_capacity(4).unwrap();

    for i in 0..2_000 {
        heap.push(i * 2).unwrap();
        heap.push(i * 2 + 1).unwrap();

        let popped = heap.pop();
        assert!(popped.is_some());
    }

    // One element remains per iteration.
    assert_eq!(heap.len(), 2_000);
    let mut last = heap.pop().unwrap();
    while let Some(next) = heap.pop() {
        assert!(next >= last);
        last = next;
    }
}

#[test]
fn test_refill_after_clear() {
    let mut heap = BinaryMinHeap::with_capacity(2).unwrap();

    for round in 0..50 {
        for i in 0..200 {
            heap.push(i + round).unwrap();
        }
        assert_eq!(heap.len(), 200);
        assert_eq!(heap.peek(), Some(&round));
        heap.clear();
        assert!(heap.is_empty());
    }

    // Capacity settled after the first round and never grew again.
    assert_eq!(heap.capacity(), 256);
}

#[test]
fn test_sawtooth_with_compaction() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut values: Vec<i64> = (0..3_000).collect();
    values.shuffle(&mut rng);

    let mut heap = BinaryMinHeap::with_capacity(1).unwrap();
    for chunk in values.chunks(500) {
        for &v in chunk {
            heap.push(v).unwrap();
        }
        // Drain half, compact, keep going.
        for _ in 0..250 {
            heap.pop().unwrap();
        }
        heap.shrink_to_fit().unwrap();
        assert_eq!(heap.capacity(), heap.len());
    }

    let mut last = i64::MIN;
    while let Some(next) = heap.pop() {
        assert!(next >= last);
        last = next;
    }
}

#[test]
fn test_large_duplicate_blocks() {
    let mut heap = BinaryMinHeap::with_capacity(8).unwrap();

    for _ in 0..1_000 {
        heap.push(7u8).unwrap();
    }
    for _ in 0..1_000 {
        heap.push(3u8).unwrap();
    }

    for _ in 0..1_000 {
        assert_eq!(heap.pop(), Some(3));
    }
    for _ in 0..1_000 {
        assert_eq!(heap.pop(), Some(7));
    }
    assert!(heap.is_empty());
}
