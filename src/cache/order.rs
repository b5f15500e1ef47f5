//! Order Tracker Module
//!
//! Ordered key queue shared by every bounded eviction policy.

use std::collections::VecDeque;

// == Order Tracker ==
/// Tracks the position of each stored key.
///
/// Keys are stored in a VecDeque where:
/// - Front = oldest position
/// - Back = newest position
///
/// FIFO only appends, LIFO and the recency policies also move keys to the back.
#[derive(Debug)]
pub struct OrderTracker<K> {
    order: VecDeque<K>,
}

impl<K> Default for OrderTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> OrderTracker<K> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Appends a key that is not yet tracked at the newest position.
    pub fn push(&mut self, key: K) {
        self.order.push_back(key);
    }

    // == Pop Oldest ==
    /// Removes and returns the key at the oldest position.
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    // == Pop Newest ==
    /// Removes and returns the key at the newest position.
    pub fn pop_newest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    // == Peek ==
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    pub fn peek_newest(&self) -> Option<&K> {
        self.order.back()
    }

    // == Iteration ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K: PartialEq> OrderTracker<K> {
    // == Touch ==
    /// Moves a key to the newest position, appending it if untracked.
    pub fn touch(&mut self, key: K) {
        self.remove(&key);
        self.order.push_back(key);
    }

    // == Remove ==
    pub fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
