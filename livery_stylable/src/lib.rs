// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Livery Stylable: the capability that lets objects be styled.
//!
//! An object implements [`Stylable`] to expose the information a style
//! resource matches on (type, id, class, pseudo class, container) and gains,
//! through [`StylableExt`], typed reads of its declared style properties and
//! batched change notification.
//!
//! ## Core Concepts
//!
//! ### Style Resources
//!
//! A [`StyleResource`] supplies values for style properties. An object holds
//! one as an `Rc<dyn StyleResource>`; [`StylableExt::set_style`] replaces it,
//! emitting `style-changed` with the previous resource and then `notify`.
//!
//! Two resources are provided: [`EmptyStyle`], which resolves nothing, and
//! [`StaticStyle`], a fixed map from property name to value.
//!
//! ### Reading Properties
//!
//! Style properties are declared with
//! [`livery_property::install_property`]. [`StylableExt::get_property`]
//! resolves a name through the object's type and its ancestors, asks the
//! style for a value and converts shorthand strings into typed values.
//!
//! ### Notification
//!
//! [`StylableExt::notify_property`] emits `style-notify` for one property.
//! Between [`freeze_notify`](StylableExt::freeze_notify) and
//! [`thaw_notify`](StylableExt::thaw_notify) (or for the life of a
//! [`NotifyFreezeGuard`]) notifications are collected and delivered once per
//! property when the outermost freeze ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use livery_property::{ObjectType, PropertyDescriptor, install_property};
//! use livery_stylable::{StaticStyle, Stylable, StylableExt, StylableState};
//! use livery_values::{BoxEdges, Value};
//!
//! static FRAME: ObjectType = ObjectType::root("Frame");
//!
//! struct Frame {
//!     state: StylableState,
//! }
//!
//! impl Stylable for Frame {
//!     fn object_type(&self) -> &'static ObjectType {
//!         &FRAME
//!     }
//!
//!     fn stylable_state(&self) -> &StylableState {
//!         &self.state
//!     }
//! }
//!
//! install_property(&FRAME, PropertyDescriptor::new("padding", BoxEdges::ZERO)).unwrap();
//! install_property(&FRAME, PropertyDescriptor::new("spacing", 0)).unwrap();
//!
//! let frame = Frame { state: StylableState::new() };
//! frame.set_style(Rc::new(
//!     StaticStyle::builder().set("padding", "2 4").set("spacing", 6).build(),
//! ));
//! assert_eq!(
//!     frame.get_property("padding"),
//!     Some(Value::BoxEdges(BoxEdges::new(2, 4, 2, 4)))
//! );
//!
//! // Coalesced notification.
//! let notified = Rc::new(RefCell::new(Vec::new()));
//! let log = notified.clone();
//! frame.connect_style_notify(None, move |_, property| {
//!     log.borrow_mut().push(property.name().to_owned());
//! });
//! {
//!     let _frozen = frame.freeze_notify_guard();
//!     frame.notify_property("padding");
//!     frame.notify_property("spacing");
//!     frame.notify_property("padding");
//! }
//! assert_eq!(*notified.borrow(), ["padding", "spacing"]);
//! ```
//!
//! Usage errors (unknown property names, unbalanced thaws, values a style
//! supplies that cannot be converted) are reported through the [`log`]
//! facade and never panic.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It relies on the shared property
//! registry of `livery_property` and always enables that crate's `std`
//! feature.

#![no_std]

extern crate alloc;

mod resource;
mod signals;
mod state;
mod static_style;
mod stylable;

pub use resource::{EmptyStyle, StyleResource};
pub use signals::HandlerId;
pub use state::{
    NotifyHandler, StylableChangedHandler, StylableState, StyleChangedHandler, StyleNotifyHandler,
};
pub use static_style::{StaticStyle, StaticStyleBuilder};
pub use stylable::{NotifyFreezeGuard, Stylable, StylableExt, Viewport};
