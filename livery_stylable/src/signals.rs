// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signal handler lists.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

/// Identifies a connected signal handler.
///
/// Returned by the `connect_*` methods of
/// [`StylableExt`](crate::StylableExt) and accepted by
/// [`StylableExt::disconnect`](crate::StylableExt::disconnect). Ids are
/// unique per object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl HandlerId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

struct Handler<F: ?Sized> {
    id: HandlerId,
    /// Restricts the handler to emissions with this detail.
    detail: Option<String>,
    callback: Rc<F>,
}

/// The handlers connected to one signal of one object.
///
/// Emission works on a snapshot of the matching handlers, so handlers may
/// connect or disconnect while the signal is being emitted.
pub(crate) struct Signal<F: ?Sized> {
    handlers: RefCell<SmallVec<[Handler<F>; 2]>>,
}

impl<F: ?Sized> Signal<F> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: RefCell::new(SmallVec::new()),
        }
    }

    pub(crate) fn connect(&self, id: HandlerId, detail: Option<String>, callback: Rc<F>) {
        self.handlers.borrow_mut().push(Handler {
            id,
            detail,
            callback,
        });
    }

    pub(crate) fn disconnect(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|handler| handler.id != id);
        handlers.len() != before
    }

    /// Returns the handlers to run for an emission with `detail`.
    ///
    /// Handlers connected without a detail match every emission.
    pub(crate) fn matching(&self, detail: Option<&str>) -> SmallVec<[Rc<F>; 2]> {
        self.handlers
            .borrow()
            .iter()
            .filter(|handler| match (&handler.detail, detail) {
                (None, _) => true,
                (Some(wanted), Some(emitted)) => wanted == emitted,
                (Some(_), None) => false,
            })
            .map(|handler| Rc::clone(&handler.callback))
            .collect()
    }
}

impl<F: ?Sized> fmt::Debug for Signal<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    type Callback = dyn Fn(&Cell<u32>);

    fn bump(amount: u32) -> Rc<Callback> {
        Rc::new(move |counter: &Cell<u32>| counter.set(counter.get() + amount))
    }

    fn emit(signal: &Signal<Callback>, detail: Option<&str>, counter: &Cell<u32>) {
        for callback in signal.matching(detail) {
            callback(counter);
        }
    }

    #[test]
    fn undetailed_handlers_match_everything() {
        let signal = Signal::<Callback>::new();
        signal.connect(HandlerId::new(1), None, bump(1));

        let counter = Cell::new(0);
        emit(&signal, None, &counter);
        emit(&signal, Some("padding"), &counter);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn detailed_handlers_match_their_detail_only() {
        let signal = Signal::<Callback>::new();
        signal.connect(HandlerId::new(1), Some("padding".into()), bump(1));
        signal.connect(HandlerId::new(2), Some("border-image".into()), bump(10));

        let counter = Cell::new(0);
        emit(&signal, Some("padding"), &counter);
        emit(&signal, None, &counter);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn disconnect_removes_by_id() {
        let signal = Signal::<Callback>::new();
        signal.connect(HandlerId::new(1), None, bump(1));
        signal.connect(HandlerId::new(2), None, bump(10));

        assert!(signal.disconnect(HandlerId::new(1)));
        assert!(!signal.disconnect(HandlerId::new(1)));
        assert_eq!(signal.handlers.borrow().len(), 1);

        let counter = Cell::new(0);
        emit(&signal, None, &counter);
        assert_eq!(counter.get(), 10);
    }
}
