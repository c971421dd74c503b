// src/mst/heap.rs
//! Min-heap of candidate arcs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Priority queue yielding the smallest item first.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    inner: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MinHeap<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, item: T) {
        self.inner.push(Reverse(item));
    }

    /// Removes the smallest item. `None` marks the end of the stream.
    pub fn delete_min(&mut self) -> Option<T> {
        self.inner.pop().map(|Reverse(item)| item)
    }

    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.inner.peek().map(|Reverse(item)| item)
    }

    /// Moves every item of `other` into this heap.
    pub fn merge(&mut self, mut other: MinHeap<T>) {
        if other.inner.len() > self.inner.len() {
            std::mem::swap(&mut self.inner, &mut other.inner);
        }
        self.inner.append(&mut other.inner);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(Reverse).collect(),
        }
    }
}
