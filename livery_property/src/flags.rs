// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Access flags for property descriptors.

bitflags::bitflags! {
    /// Access and construction flags of a property.
    ///
    /// Style properties must be [`READABLE`](Self::READABLE) and must not be
    /// construction-time properties; the registry rejects anything else.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// The value can be read.
        const READABLE       = 0b0000_0001;
        /// The value can be written.
        const WRITABLE       = 0b0000_0010;
        /// The value is set during construction.
        const CONSTRUCT      = 0b0000_0100;
        /// The value can only be set during construction.
        const CONSTRUCT_ONLY = 0b0000_1000;
        /// Readable and writable.
        const READWRITE = Self::READABLE.bits() | Self::WRITABLE.bits();
    }
}

impl PropertyFlags {
    /// Returns `true` if either construction flag is set.
    #[must_use]
    #[inline]
    pub const fn is_construct_time(self) -> bool {
        self.intersects(Self::CONSTRUCT.union(Self::CONSTRUCT_ONLY))
    }
}

impl Default for PropertyFlags {
    fn default() -> Self {
        Self::READWRITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_readwrite() {
        let flags = PropertyFlags::default();
        assert!(flags.contains(PropertyFlags::READABLE));
        assert!(flags.contains(PropertyFlags::WRITABLE));
        assert!(!flags.is_construct_time());
    }

    #[test]
    fn construct_time() {
        assert!(PropertyFlags::CONSTRUCT.is_construct_time());
        assert!((PropertyFlags::READABLE | PropertyFlags::CONSTRUCT_ONLY).is_construct_time());
        assert!(!PropertyFlags::READABLE.is_construct_time());
    }
}
