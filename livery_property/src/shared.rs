// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared per-thread registry.
//!
//! Stylable types install their properties here once, and every stylable
//! object on the same thread resolves names against it. The registry is
//! created on first access and lives until the thread exits;
//! [`reset_registry`] empties it, which tests use to isolate cases.
//!
//! # Panics
//!
//! The closures passed to [`with_registry`] and [`with_registry_mut`] must not
//! access the shared registry themselves. A nested mutable access panics.

use alloc::vec::Vec;
use core::cell::RefCell;

use crate::descriptor::PropertyDescriptor;
use crate::error::RegistryError;
use crate::object_type::ObjectType;
use crate::registry::PropertyRegistry;

std::thread_local! {
    static SHARED: RefCell<PropertyRegistry> = RefCell::new(PropertyRegistry::new());
}

/// Runs `f` with shared access to this thread's registry.
pub fn with_registry<R>(f: impl FnOnce(&PropertyRegistry) -> R) -> R {
    SHARED.with(|registry| f(&registry.borrow()))
}

/// Runs `f` with exclusive access to this thread's registry.
pub fn with_registry_mut<R>(f: impl FnOnce(&mut PropertyRegistry) -> R) -> R {
    SHARED.with(|registry| f(&mut registry.borrow_mut()))
}

/// Installs a style property on `owner` in the shared registry.
///
/// See [`PropertyRegistry::install`].
///
/// # Example
///
/// ```rust
/// use livery_property::{ObjectType, PropertyDescriptor, find_property, install_property};
///
/// static ENTRY: ObjectType = ObjectType::root("Entry");
///
/// install_property(&ENTRY, PropertyDescriptor::new("caret-color", "black")).unwrap();
/// assert!(install_property(&ENTRY, PropertyDescriptor::new("caret-color", "red")).is_err());
/// assert!(find_property("caret-color", &ENTRY, true).is_some());
/// ```
pub fn install_property(
    owner: &'static ObjectType,
    descriptor: PropertyDescriptor,
) -> Result<PropertyDescriptor, RegistryError> {
    with_registry_mut(|registry| registry.install(owner, descriptor))
}

/// Looks up a style property in the shared registry.
///
/// See [`PropertyRegistry::lookup`].
#[must_use]
pub fn find_property(
    name: &str,
    ty: &ObjectType,
    walk_ancestors: bool,
) -> Option<PropertyDescriptor> {
    with_registry(|registry| registry.lookup(name, ty, walk_ancestors))
}

/// Lists the style properties visible to `ty` in the shared registry.
///
/// See [`PropertyRegistry::list_for`].
#[must_use]
pub fn list_properties(ty: &ObjectType) -> Vec<PropertyDescriptor> {
    with_registry(|registry| registry.list_for(ty))
}

/// Removes every style property `owner` installed in the shared registry.
///
/// Returns the number of descriptors removed.
pub fn remove_properties_for(owner: &ObjectType) -> usize {
    with_registry_mut(|registry| registry.remove_all_for(owner))
}

/// Empties this thread's shared registry.
pub fn reset_registry() {
    with_registry_mut(|registry| {
        log::debug!("resetting shared style property registry ({} entries)", registry.len());
        *registry = PropertyRegistry::new();
    });
}
