// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notify queue: a freeze counter plus deduplicated pending keys.

use core::hash::Hash;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::batch::Batch;
use crate::error::NotifyError;

/// A freeze counter with a set of pending keys.
///
/// Keys added while the queue is frozen are kept once each, in the order
/// they were first added. When the outermost [`thaw`](Self::thaw) brings the
/// counter back to zero the pending keys are handed out as a [`Batch`].
///
/// # Type Parameters
///
/// - `K`: The key type, typically a property descriptor. Duplicates are
///   detected with `Eq + Hash`, so a key type with identity equality
///   deduplicates by identity.
///
/// # Example
///
/// ```
/// use livery_notify::NotifyQueue;
///
/// let mut queue = NotifyQueue::<&str>::new();
/// queue.freeze();
/// queue.add("width");
/// queue.add("height");
/// queue.add("width");
///
/// let batch = queue.thaw().unwrap();
/// assert_eq!(batch.as_slice(), ["width", "height"]);
/// assert!(!queue.is_frozen());
/// ```
#[derive(Clone, Debug)]
pub struct NotifyQueue<K>
where
    K: Clone + Eq + Hash,
{
    freeze_count: u32,
    /// Keys already pending, for dedup.
    seen: HashSet<K>,
    /// Pending keys in first-added order.
    pending: SmallVec<[K; 8]>,
}

impl<K> Default for NotifyQueue<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> NotifyQueue<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a new, unfrozen queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            freeze_count: 0,
            seen: HashSet::new(),
            pending: SmallVec::new(),
        }
    }

    /// Increments the freeze counter and returns the new count.
    pub fn freeze(&mut self) -> u32 {
        self.freeze_count = self.freeze_count.saturating_add(1);
        self.freeze_count
    }

    /// Adds a key to the pending set.
    ///
    /// Returns `true` if the key was not already pending. Keys are accepted
    /// whether or not the queue is frozen; an unfrozen owner normally
    /// dispatches instead of adding.
    pub fn add(&mut self, key: K) -> bool {
        if !self.seen.insert(key.clone()) {
            return false;
        }
        self.pending.push(key);
        true
    }

    /// Decrements the freeze counter.
    ///
    /// When the counter reaches zero every pending key is returned once and
    /// the pending set is cleared. While the queue stays frozen the returned
    /// batch is empty.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotFrozen`] and changes nothing if the counter
    /// is already zero.
    pub fn thaw(&mut self) -> Result<Batch<K>, NotifyError> {
        if self.freeze_count == 0 {
            log::warn!("notify queue thawed more often than frozen");
            return Err(NotifyError::NotFrozen);
        }
        self.freeze_count -= 1;
        if self.freeze_count > 0 {
            return Ok(Batch::default());
        }
        self.seen.clear();
        Ok(Batch::from_keys(core::mem::take(&mut self.pending)))
    }

    /// Returns the current freeze count.
    #[must_use]
    #[inline]
    pub fn freeze_count(&self) -> u32 {
        self.freeze_count
    }

    /// Returns `true` if the freeze count is above zero.
    #[must_use]
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.freeze_count > 0
    }

    /// Returns the number of distinct pending keys.
    #[must_use]
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if `key` is pending.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    /// Returns an iterator over the pending keys in first-added order.
    pub fn pending(&self) -> impl Iterator<Item = &K> + '_ {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfrozen_by_default() {
        let queue = NotifyQueue::<u32>::new();
        assert_eq!(queue.freeze_count(), 0);
        assert!(!queue.is_frozen());
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn add_deduplicates() {
        let mut queue = NotifyQueue::<u32>::new();
        queue.freeze();
        assert!(queue.add(1));
        assert!(queue.add(2));
        assert!(!queue.add(1));
        assert_eq!(queue.pending_len(), 2);
        assert!(queue.is_pending(&2));
        assert!(!queue.is_pending(&3));
    }

    #[test]
    fn thaw_returns_keys_once_in_order() {
        let mut queue = NotifyQueue::<u32>::new();
        queue.freeze();
        queue.add(7);
        queue.add(3);
        queue.add(7);
        queue.add(5);

        let batch = queue.thaw().unwrap();
        assert_eq!(batch.as_slice(), [7, 3, 5]);
        assert_eq!(queue.pending_len(), 0);
        assert!(!queue.is_pending(&7));
    }

    #[test]
    fn nested_freeze_releases_on_outermost_thaw() {
        let mut queue = NotifyQueue::<u32>::new();
        assert_eq!(queue.freeze(), 1);
        assert_eq!(queue.freeze(), 2);
        queue.add(1);

        assert!(queue.thaw().unwrap().is_empty());
        assert!(queue.is_frozen());
        assert_eq!(queue.pending_len(), 1);

        assert_eq!(queue.thaw().unwrap().as_slice(), [1]);
        assert!(!queue.is_frozen());
    }

    #[test]
    fn thaw_without_freeze_is_an_error() {
        let mut queue = NotifyQueue::<u32>::new();
        queue.add(1);
        assert_eq!(queue.thaw(), Err(NotifyError::NotFrozen));
        assert_eq!(queue.freeze_count(), 0);
        assert_eq!(queue.pending_len(), 1);
    }

    #[test]
    fn keys_can_repeat_after_a_thaw() {
        let mut queue = NotifyQueue::<u32>::new();
        queue.freeze();
        queue.add(1);
        queue.thaw().unwrap();

        queue.freeze();
        assert!(queue.add(1));
        assert_eq!(queue.thaw().unwrap().len(), 1);
    }
}
