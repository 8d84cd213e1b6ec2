//! A min-priority queue. The heap itself is `std`'s [`BinaryHeap`]; this type only decides how
//! entries are ordered in it.
//!
//! # Examples
//!
//! ```
//! use treemap::{Error, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("write docs", 3);
//! queue.enqueue("fix bug", 1);
//! queue.enqueue("review", 2);
//!
//! assert_eq!(queue.front(), Some(&"fix bug"));
//! assert_eq!(queue.dequeue(), Ok("fix bug"));
//!
//! // Swap the front for a new item in one step.
//! assert_eq!(queue.push_pop("deploy", 5), Ok("review"));
//! assert_eq!(queue.len(), 2);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::{Error, Result};

/// A queue that hands out items lowest priority value first. Items with equal priorities come
/// out in the order they were enqueued, not ordered by the items themselves, so `T` needs no
/// `Ord` of its own.
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    enqueued: u64,
}

/// A heap slot. Ordered so that `BinaryHeap`, a max-heap, surfaces the smallest priority and,
/// among equal priorities, the earliest sequence number.
struct Entry<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Generates a new, empty `PriorityQueue`.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            enqueued: 0,
        }
    }

    /// Returns `true` if there are no items in the queue.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The number of items in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds `item` to the queue, ordered by `priority`.
    pub fn enqueue(&mut self, item: T, priority: P) {
        let entry = self.entry(item, priority);
        self.heap.push(entry);
    }

    /// The item at the front of the queue, without removing it.
    pub fn front(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.item)
    }

    /// Removes and returns the item at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if there is nothing to dequeue.
    pub fn dequeue(&mut self) -> Result<T> {
        self.heap
            .pop()
            .map(|entry| entry.item)
            .ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the item at the front of the queue, then enqueues `item`. This costs a
    /// single sift instead of a pop followed by a push.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if there is nothing to dequeue. `item` is not enqueued in that case.
    pub fn push_pop(&mut self, item: T, priority: P) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let entry = self.entry(item, priority);
        let mut front = self.heap.peek_mut().ok_or(Error::EmptyQueue)?;
        Ok(std::mem::replace(&mut *front, entry).item)
    }

    fn entry(&mut self, item: T, priority: P) -> Entry<T, P> {
        let sequence = self.enqueued;
        self.enqueued += 1;
        Entry {
            priority,
            sequence,
            item,
        }
    }
}

impl<T: fmt::Debug, P: Ord> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("front", &self.front())
            .finish()
    }
}
