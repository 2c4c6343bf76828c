// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property descriptors.
//!
//! This module provides [`PropertyDescriptor`], the immutable, shared record
//! describing one style property.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use livery_values::{Value, ValueType};

use crate::flags::PropertyFlags;
use crate::object_type::ObjectType;

#[derive(Clone)]
struct DescriptorData {
    name: String,
    default_value: Value,
    flags: PropertyFlags,
    owner: Option<&'static ObjectType>,
    blurb: Option<String>,
}

/// Metadata for one style property.
///
/// A descriptor names the property, fixes its value type through the default
/// value, and carries access flags. Once installed in a
/// [`PropertyRegistry`](crate::PropertyRegistry) it is also stamped with the
/// owner type that installed it.
///
/// Descriptors are cheap to clone: clones share the same record. Equality
/// and hashing are by identity, so two separately created descriptors with
/// the same contents are distinct.
///
/// # Example
///
/// ```rust
/// use livery_property::{PropertyDescriptor, PropertyFlags};
/// use livery_values::{BoxEdges, ValueType};
///
/// let padding = PropertyDescriptor::new("padding", BoxEdges::ZERO)
///     .with_flags(PropertyFlags::READABLE)
///     .with_blurb("Inner spacing");
///
/// assert_eq!(padding.name(), "padding");
/// assert_eq!(padding.value_type(), ValueType::BoxEdges);
/// assert!(padding.is_readable());
/// assert!(!padding.is_writable());
/// assert_eq!(padding.owner_type(), None);
///
/// let copy = padding.clone();
/// assert_eq!(copy, padding);
/// assert_ne!(PropertyDescriptor::new("padding", BoxEdges::ZERO), padding);
/// ```
#[derive(Clone)]
pub struct PropertyDescriptor(Rc<DescriptorData>);

impl PropertyDescriptor {
    /// Creates a readable and writable descriptor.
    ///
    /// The value type is taken from `default_value` and never changes.
    #[must_use]
    pub fn new(name: impl Into<String>, default_value: impl Into<Value>) -> Self {
        Self(Rc::new(DescriptorData {
            name: name.into(),
            default_value: default_value.into(),
            flags: PropertyFlags::default(),
            owner: None,
            blurb: None,
        }))
    }

    /// Replaces the access flags.
    #[must_use]
    pub fn with_flags(mut self, flags: PropertyFlags) -> Self {
        Rc::make_mut(&mut self.0).flags = flags;
        self
    }

    /// Sets a human-readable description.
    #[must_use]
    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        Rc::make_mut(&mut self.0).blurb = Some(blurb.into());
        self
    }

    /// Returns a new descriptor with the same contents, owned by `owner`.
    pub(crate) fn stamped(&self, owner: &'static ObjectType) -> Self {
        let mut data = DescriptorData::clone(&self.0);
        data.owner = Some(owner);
        Self(Rc::new(data))
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the value type.
    #[must_use]
    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.0.default_value.value_type()
    }

    /// Returns the default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &Value {
        &self.0.default_value
    }

    /// Returns the access flags.
    #[must_use]
    #[inline]
    pub fn flags(&self) -> PropertyFlags {
        self.0.flags
    }

    /// Returns `true` if the property can be read.
    #[must_use]
    #[inline]
    pub fn is_readable(&self) -> bool {
        self.0.flags.contains(PropertyFlags::READABLE)
    }

    /// Returns `true` if the property can be written.
    #[must_use]
    #[inline]
    pub fn is_writable(&self) -> bool {
        self.0.flags.contains(PropertyFlags::WRITABLE)
    }

    /// Returns the type that installed this descriptor, if installed.
    #[must_use]
    #[inline]
    pub fn owner_type(&self) -> Option<&'static ObjectType> {
        self.0.owner
    }

    /// Returns the name of the owner type, if installed.
    #[must_use]
    pub fn owner_type_name(&self) -> Option<&'static str> {
        self.0.owner.map(ObjectType::name)
    }

    /// Returns the human-readable description, if any.
    #[must_use]
    pub fn blurb(&self) -> Option<&str> {
        self.0.blurb.as_deref()
    }

    /// Returns `true` if `value` has this property's value type.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        value.value_type() == self.value_type()
    }

    /// Returns `true` if both handles refer to the same descriptor.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for PropertyDescriptor {}

impl Hash for PropertyDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.0.name)
            .field("value_type", &self.value_type())
            .field("flags", &self.0.flags)
            .field("owner", &self.owner_type_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use hashbrown::HashSet;

    static OWNER: ObjectType = ObjectType::root("Owner");

    #[test]
    fn value_type_follows_default() {
        let spacing = PropertyDescriptor::new("spacing", 4);
        assert_eq!(spacing.value_type(), ValueType::Int);
        assert_eq!(spacing.default_value(), &Value::Int(4));
        assert!(spacing.accepts(&Value::Int(9)));
        assert!(!spacing.accepts(&Value::from("9")));
    }

    #[test]
    fn builder_methods_do_not_leak_into_clones() {
        let base = PropertyDescriptor::new("color", "black");
        let shared = base.clone();
        let narrowed = base.with_flags(PropertyFlags::READABLE);

        assert!(shared.is_writable());
        assert!(!narrowed.is_writable());
    }

    #[test]
    fn stamping_creates_a_new_identity() {
        let unowned = PropertyDescriptor::new("font", "Sans 10").with_blurb("Font name");
        let owned = unowned.stamped(&OWNER);

        assert_ne!(owned, unowned);
        assert_eq!(owned.owner_type_name(), Some("Owner"));
        assert_eq!(owned.blurb(), Some("Font name"));
        assert_eq!(unowned.owner_type(), None);
    }

    #[test]
    fn hashing_is_by_identity() {
        let a = PropertyDescriptor::new("a", 0);
        let b = PropertyDescriptor::new("a", 0);
        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_output() {
        let debug = format!("{:?}", PropertyDescriptor::new("spacing", 1));
        assert!(debug.contains("PropertyDescriptor"));
        assert!(debug.contains("spacing"));
    }
}
