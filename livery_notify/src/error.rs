// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Misuse of the freeze/thaw protocol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// A thaw was requested with no freeze outstanding.
    #[error("thaw called without a matching freeze")]
    NotFrozen,
}
