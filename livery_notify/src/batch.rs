// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// The distinct keys released by a thaw, in first-added order.
///
/// A batch is empty when the thaw left the queue frozen or nothing was
/// pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch<K> {
    keys: SmallVec<[K; 8]>,
}

impl<K> Default for Batch<K> {
    fn default() -> Self {
        Self {
            keys: SmallVec::new(),
        }
    }
}

impl<K> Batch<K> {
    pub(crate) fn from_keys(keys: SmallVec<[K; 8]>) -> Self {
        Self { keys }
    }

    /// Returns the number of keys.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there is nothing to dispatch.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys as a slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Returns an iterator over the keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.keys.iter()
    }
}

impl<K> IntoIterator for Batch<K> {
    type Item = K;
    type IntoIter = smallvec::IntoIter<[K; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Batch<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
