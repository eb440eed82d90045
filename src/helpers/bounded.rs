//! Bounded deque for recent-history buffers
//!
//! A fixed-capacity deque that evicts the oldest item when a push would
//! exceed capacity.

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction policy
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a new bounded deque; a capacity of 0 makes pushes no-ops
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Push a new value, evicting the oldest if at capacity
    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Newest to oldest
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Most recent item
    pub fn last(&self) -> Option<&T> {
        self.buf.back()
    }
}

impl<T> Default for BoundedDeque<T> {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(deque: &BoundedDeque<i32>) -> Vec<i32> {
        deque.iter().copied().collect()
    }

    #[test]
    fn test_bounded_deque_basic() {
        let mut deque = BoundedDeque::new(3);
        deque.push(1);
        deque.push(2);
        deque.push(3);
        assert_eq!(deque.len(), 3);
        assert_eq!(contents(&deque), vec![1, 2, 3]);
        assert_eq!(deque.last(), Some(&3));
    }

    #[test]
    fn test_bounded_deque_eviction() {
        let mut deque = BoundedDeque::new(3);
        for value in 1..=5 {
            deque.push(value);
        }
        assert_eq!(deque.len(), 3);
        assert_eq!(contents(&deque), vec![3, 4, 5]);
        assert_eq!(deque.iter_rev().copied().collect::<Vec<_>>(), vec![5, 4, 3]);
    }

    #[test]
    fn test_bounded_deque_zero_capacity() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), 0);
    }

    #[test]
    fn test_bounded_deque_clear() {
        let mut deque = BoundedDeque::new(2);
        deque.push(1);
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.last(), None);
    }
}
