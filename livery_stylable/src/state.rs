// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object stylable storage.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use livery_notify::NotifyContext;
use livery_property::PropertyDescriptor;

use crate::resource::{EmptyStyle, StyleResource};
use crate::signals::{HandlerId, Signal};
use crate::stylable::Stylable;

/// Handler for `style-changed`; receives the style that was replaced.
pub type StyleChangedHandler = dyn Fn(&dyn Stylable, Option<&Rc<dyn StyleResource>>);
/// Handler for `style-notify`; receives the changed property.
pub type StyleNotifyHandler = dyn Fn(&dyn Stylable, &PropertyDescriptor);
/// Handler for `stylable-changed`.
pub type StylableChangedHandler = dyn Fn(&dyn Stylable);
/// Handler for the generic `notify` signal; receives the attribute name.
pub type NotifyHandler = dyn Fn(&dyn Stylable, &str);

/// The storage a [`Stylable`] object embeds.
///
/// Holds the attached style resource, the notification freeze state and the
/// connected signal handlers. All access goes through `&self`; the state
/// uses interior mutability and is meant for a single UI thread.
///
/// A new state starts with an [`EmptyStyle`] attached.
pub struct StylableState {
    style: RefCell<Option<Rc<dyn StyleResource>>>,
    pub(crate) notify: RefCell<NotifyContext<PropertyDescriptor>>,
    next_handler: Cell<u64>,
    pub(crate) style_changed: Signal<StyleChangedHandler>,
    pub(crate) style_notify: Signal<StyleNotifyHandler>,
    pub(crate) stylable_changed: Signal<StylableChangedHandler>,
    pub(crate) notify_signal: Signal<NotifyHandler>,
}

impl Default for StylableState {
    fn default() -> Self {
        Self::new()
    }
}

impl StylableState {
    /// Creates a state with an [`EmptyStyle`] attached.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(Some(Rc::new(EmptyStyle)))
    }

    /// Creates a state with `style` attached.
    #[must_use]
    pub fn with_style(style: Option<Rc<dyn StyleResource>>) -> Self {
        Self {
            style: RefCell::new(style),
            notify: RefCell::new(NotifyContext::new()),
            next_handler: Cell::new(1),
            style_changed: Signal::new(),
            style_notify: Signal::new(),
            stylable_changed: Signal::new(),
            notify_signal: Signal::new(),
        }
    }

    /// Returns the attached style.
    #[must_use]
    pub fn style(&self) -> Option<Rc<dyn StyleResource>> {
        self.style.borrow().clone()
    }

    /// Attaches `style` and returns the previously attached one.
    pub fn replace_style(
        &self,
        style: Option<Rc<dyn StyleResource>>,
    ) -> Option<Rc<dyn StyleResource>> {
        self.style.replace(style)
    }

    /// Returns `true` if notifications are frozen.
    #[must_use]
    pub fn is_notify_frozen(&self) -> bool {
        self.notify.borrow().is_frozen()
    }

    /// Returns the number of property notifications waiting for a thaw.
    #[must_use]
    pub fn pending_notifications(&self) -> usize {
        self.notify.borrow().pending_len()
    }

    pub(crate) fn next_handler_id(&self) -> HandlerId {
        let raw = self.next_handler.get();
        self.next_handler.set(raw + 1);
        HandlerId::new(raw)
    }

    pub(crate) fn disconnect(&self, id: HandlerId) -> bool {
        self.style_changed.disconnect(id)
            || self.style_notify.disconnect(id)
            || self.stylable_changed.disconnect(id)
            || self.notify_signal.disconnect(id)
    }
}

impl Drop for StylableState {
    fn drop(&mut self) {
        let discarded = self.notify.get_mut().discard();
        if discarded > 0 {
            log::debug!("discarding {discarded} pending style notifications");
        }
    }
}

impl fmt::Debug for StylableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notify = self.notify.borrow();
        f.debug_struct("StylableState")
            .field("has_style", &self.style.borrow().is_some())
            .field("notify_freeze_count", &notify.freeze_count())
            .field("pending_notifications", &notify.pending_len())
            .field("style_changed", &self.style_changed)
            .field("style_notify", &self.style_notify)
            .field("stylable_changed", &self.stylable_changed)
            .field("notify", &self.notify_signal)
            .finish_non_exhaustive()
    }
}
