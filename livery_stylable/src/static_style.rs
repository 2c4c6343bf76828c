// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed name-to-value style resource.
//!
//! This module provides [`StaticStyle`], a shared, immutable map from property
//! name to value that implements [`StyleResource`].

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use livery_property::PropertyDescriptor;
use livery_values::Value;

use crate::resource::StyleResource;
use crate::stylable::Stylable;

/// A shared, immutable set of style values keyed by property name.
///
/// `StaticStyle` answers every stylable object the same way: a property
/// resolves to the value stored under its name, whatever the object's type
/// or class. Values may be stored as shorthand strings; readers convert them
/// to the property's type.
///
/// Cloning is cheap: clones share the same data. Use [`StaticStyleBuilder`]
/// to construct one.
///
/// # Example
///
/// ```rust
/// use livery_stylable::StaticStyle;
/// use livery_values::Value;
///
/// let style = StaticStyle::builder()
///     .set("padding", "4 8")
///     .set("spacing", 6)
///     .source_path("/usr/share/themes/default.css")
///     .build();
///
/// assert_eq!(style.len(), 2);
/// assert_eq!(style.get("spacing"), Some(&Value::Int(6)));
/// assert_eq!(style.get("padding"), Some(&Value::from("4 8")));
/// assert_eq!(style.get("margin"), None);
/// ```
#[derive(Clone, Debug)]
pub struct StaticStyle {
    inner: Rc<StaticStyleData>,
}

#[derive(Debug, Default)]
struct StaticStyleData {
    /// Sorted by name for binary search lookup.
    entries: Vec<(String, Value)>,
    source_path: Option<String>,
}

impl StaticStyle {
    /// Returns a builder for a new style.
    #[must_use]
    pub fn builder() -> StaticStyleBuilder {
        StaticStyleBuilder::new()
    }

    /// Returns `true` if this style holds no values.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Returns the number of values in this style.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Gets the value stored for a property name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inner
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(name))
            .ok()
            .map(|idx| &self.inner.entries[idx].1)
    }

    /// Returns the property names set in this style, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns `true` if both handles share the same data.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl StyleResource for StaticStyle {
    fn get_property(&self, _: &dyn Stylable, descriptor: &PropertyDescriptor) -> Option<Value> {
        self.get(descriptor.name()).cloned()
    }

    fn source_path(&self) -> Option<&str> {
        self.inner.source_path.as_deref()
    }
}

/// Builder for [`StaticStyle`].
#[derive(Debug, Default)]
pub struct StaticStyleBuilder {
    entries: Vec<(String, Value)>,
    source_path: Option<String>,
}

impl StaticStyleBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a property name.
    ///
    /// If the name was already set, the value is replaced.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .binary_search_by(|(key, _)| key.as_str().cmp(&name))
        {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (name, value)),
        }
        self
    }

    /// Sets the file relative image paths resolve against.
    #[must_use]
    pub fn source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Builds the style.
    #[must_use]
    pub fn build(self) -> StaticStyle {
        StaticStyle {
            inner: Rc::new(StaticStyleData {
                entries: self.entries,
                source_path: self.source_path,
            }),
        }
    }
}
