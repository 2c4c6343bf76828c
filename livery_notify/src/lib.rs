// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Livery Notify: freeze/thaw coalescing of change notifications.
//!
//! Objects that change several properties in a row often want observers to
//! hear about each property once, after the whole batch is done. This crate
//! provides the bookkeeping for that pattern without knowing anything about
//! what a key is or how it is dispatched.
//!
//! ## Core Concepts
//!
//! - [`NotifyQueue`]: a freeze counter plus a set of pending keys,
//!   deduplicated with `Eq + Hash` and kept in first-added order.
//! - [`NotifyContext`]: the per-object slot. It creates the queue on the
//!   first freeze, routes each changed key (buffer or dispatch now), and
//!   drops the queue when the outermost thaw releases a [`Batch`].
//!
//! ## Protocol
//!
//! 1. `freeze()` increments the counter. Freezes nest.
//! 2. `enqueue(key)` returns [`Enqueued::Buffered`] while frozen; otherwise it
//!    returns [`Enqueued::Dispatch`] and the caller notifies immediately.
//! 3. `thaw()` decrements the counter. At zero it returns every distinct
//!    pending key once. Thawing an unfrozen context is reported as
//!    [`NotifyError::NotFrozen`] and logged through the [`log`] facade.
//!
//! ```rust
//! use livery_notify::{Enqueued, NotifyContext};
//!
//! let mut notify = NotifyContext::new();
//! notify.freeze();
//! notify.freeze();
//! notify.enqueue("padding");
//! notify.enqueue("border-image");
//! notify.enqueue("padding");
//!
//! // Inner thaw: still frozen, nothing released.
//! assert!(notify.thaw().unwrap().is_empty());
//!
//! // Outermost thaw: each key once.
//! let batch = notify.thaw().unwrap();
//! assert_eq!(batch.as_slice(), ["padding", "border-image"]);
//!
//! assert_eq!(notify.enqueue("padding"), Enqueued::Dispatch("padding"));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod batch;
mod context;
mod error;
mod queue;

pub use batch::Batch;
pub use context::{Enqueued, NotifyContext};
pub use error::NotifyError;
pub use queue::NotifyQueue;
