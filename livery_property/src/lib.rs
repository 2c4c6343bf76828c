// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Livery Property: style property descriptors and their registry.
//!
//! A stylable type declares the named, typed attributes a style resource can
//! supply values for. This crate holds those declarations and resolves them
//! through a single-inheritance type hierarchy.
//!
//! ## Core Concepts
//!
//! ### Types
//!
//! [`ObjectType`] describes a type and its parent. Types are `static` items;
//! [`ObjectType::ancestors`] walks from a type up to its root.
//!
//! ### Descriptors
//!
//! [`PropertyDescriptor`] is the immutable record for one style property:
//! name, value type (fixed by the default value), default, [`PropertyFlags`]
//! and, once installed, the owner type. Descriptors are shared handles with
//! identity semantics.
//!
//! ### Registry
//!
//! [`PropertyRegistry`] pools descriptors by owner type:
//!
//! - `install(owner, descriptor)` - add a property, rejecting duplicates,
//!   unreadable and construction-time descriptors
//! - `lookup(name, ty, walk_ancestors)` - exact or ancestor-walking lookup
//! - `list_for(ty)` - every property visible to a type, most derived winning
//! - `remove_all_for(owner)` - purge one owner's properties
//!
//! With the `std` feature (enabled by default) a shared per-thread registry
//! is available through [`install_property`], [`find_property`] and friends.
//!
//! ## Quick Start
//!
//! ```rust
//! use livery_property::{ObjectType, PropertyDescriptor, PropertyRegistry, RegistryError};
//! use livery_values::{BoxEdges, Value};
//!
//! static WIDGET: ObjectType = ObjectType::root("Widget");
//! static BUTTON: ObjectType = ObjectType::derived("Button", &WIDGET);
//!
//! let mut registry = PropertyRegistry::new();
//! registry
//!     .install(&WIDGET, PropertyDescriptor::new("padding", BoxEdges::ZERO))
//!     .unwrap();
//! registry
//!     .install(&BUTTON, PropertyDescriptor::new("padding", BoxEdges::all(6)))
//!     .unwrap();
//!
//! // The derived declaration shadows the inherited one.
//! let padding = registry.lookup("padding", &BUTTON, true).unwrap();
//! assert_eq!(padding.default_value(), &Value::BoxEdges(BoxEdges::all(6)));
//! assert_eq!(registry.list_for(&BUTTON).len(), 1);
//!
//! // Installing the same name twice on one owner is rejected.
//! let again = registry.install(&BUTTON, PropertyDescriptor::new("padding", BoxEdges::ZERO));
//! assert!(matches!(again, Err(RegistryError::AlreadyExists { .. })));
//! ```
//!
//! Rejected installs are also reported through the [`log`] facade.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The shared registry needs
//! thread-local storage and is only available with the `std` feature.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod descriptor;
mod error;
mod flags;
mod object_type;
mod registry;
#[cfg(feature = "std")]
mod shared;

pub use descriptor::PropertyDescriptor;
pub use error::RegistryError;
pub use flags::PropertyFlags;
pub use object_type::{Ancestors, ObjectType};
pub use registry::PropertyRegistry;
#[cfg(feature = "std")]
pub use shared::{
    find_property, install_property, list_properties, remove_properties_for, reset_registry,
    with_registry, with_registry_mut,
};
