// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object notification slot.

use core::hash::Hash;

use crate::batch::Batch;
use crate::error::NotifyError;
use crate::queue::NotifyQueue;

/// What to do with a key passed to [`NotifyContext::enqueue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Enqueued<K> {
    /// The context is frozen and the key is held until the outermost thaw.
    Buffered,
    /// The context is not frozen; dispatch the key now.
    Dispatch(K),
}

/// The notification slot an object embeds.
///
/// A `NotifyContext` holds no queue until the first [`freeze`](Self::freeze)
/// and drops it again when the outermost [`thaw`](Self::thaw) releases the
/// pending keys, so idle objects carry no queue storage.
///
/// # Example
///
/// ```
/// use livery_notify::{Enqueued, NotifyContext};
///
/// let mut notify = NotifyContext::<&str>::new();
///
/// // Unfrozen: dispatch immediately.
/// assert_eq!(notify.enqueue("x"), Enqueued::Dispatch("x"));
///
/// notify.freeze();
/// assert_eq!(notify.enqueue("x"), Enqueued::Buffered);
/// assert_eq!(notify.enqueue("y"), Enqueued::Buffered);
/// assert_eq!(notify.enqueue("x"), Enqueued::Buffered);
///
/// let batch = notify.thaw().unwrap();
/// assert_eq!(batch.as_slice(), ["x", "y"]);
/// assert!(notify.thaw().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct NotifyContext<K>
where
    K: Clone + Eq + Hash,
{
    queue: Option<NotifyQueue<K>>,
}

impl<K> Default for NotifyContext<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> NotifyContext<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an unfrozen context with no queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { queue: None }
    }

    /// Freezes notifications, creating the queue on first use.
    ///
    /// Freezing is reentrant; returns the new freeze count.
    pub fn freeze(&mut self) -> u32 {
        let count = self.queue.get_or_insert_with(NotifyQueue::new).freeze();
        log::trace!("notify frozen (count {count})");
        count
    }

    /// Routes a changed key.
    ///
    /// While frozen the key joins the pending set, collapsing with earlier
    /// adds of the same key. Otherwise the key is handed back for immediate
    /// dispatch.
    pub fn enqueue(&mut self, key: K) -> Enqueued<K> {
        match &mut self.queue {
            Some(queue) if queue.is_frozen() => {
                queue.add(key);
                Enqueued::Buffered
            }
            _ => Enqueued::Dispatch(key),
        }
    }

    /// Thaws notifications.
    ///
    /// On the outermost thaw every distinct pending key is returned once and
    /// the queue is dropped. Inner thaws return an empty batch.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotFrozen`] and changes nothing if the context
    /// is not frozen.
    pub fn thaw(&mut self) -> Result<Batch<K>, NotifyError> {
        let Some(queue) = &mut self.queue else {
            log::warn!("notify thawed without a matching freeze");
            return Err(NotifyError::NotFrozen);
        };
        let batch = queue.thaw()?;
        if !queue.is_frozen() {
            log::trace!("notify thawed, dispatching {} keys", batch.len());
            self.queue = None;
        }
        Ok(batch)
    }

    /// Drops the queue and its pending keys without dispatching them.
    ///
    /// Returns the number of keys discarded.
    pub fn discard(&mut self) -> usize {
        self.queue.take().map_or(0, |queue| queue.pending_len())
    }

    /// Returns the current freeze count.
    #[must_use]
    pub fn freeze_count(&self) -> u32 {
        self.queue.as_ref().map_or(0, NotifyQueue::freeze_count)
    }

    /// Returns `true` if notifications are frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.freeze_count() > 0
    }

    /// Returns the number of distinct pending keys.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.queue.as_ref().map_or(0, NotifyQueue::pending_len)
    }

    /// Returns `true` if a queue is currently allocated.
    #[must_use]
    pub fn has_queue(&self) -> bool {
        self.queue.is_some()
    }
}
