// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-inheritance object types.
//!
//! This module provides [`ObjectType`], a static description of a type and
//! its parent, and [`Ancestors`] for walking the chain from a type up to its
//! root.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A node in a single-inheritance type hierarchy.
///
/// Types are declared as `static` items so that parents can be referenced
/// with a `'static` lifetime. Type names must be unique; equality and hashing
/// use the name.
///
/// # Example
///
/// ```rust
/// use livery_property::ObjectType;
///
/// static WIDGET: ObjectType = ObjectType::root("Widget");
/// static BUTTON: ObjectType = ObjectType::derived("Button", &WIDGET);
///
/// assert!(BUTTON.is_a(&WIDGET));
/// assert!(!WIDGET.is_a(&BUTTON));
///
/// let names: Vec<_> = BUTTON.ancestors().map(|t| t.name()).collect();
/// assert_eq!(names, ["Button", "Widget"]);
/// ```
pub struct ObjectType {
    name: &'static str,
    parent: Option<&'static ObjectType>,
}

impl ObjectType {
    /// Creates a type with no parent.
    #[must_use]
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Creates a type deriving from `parent`.
    #[must_use]
    pub const fn derived(name: &'static str, parent: &'static Self) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// Returns the type name.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parent type, if any.
    #[must_use]
    #[inline]
    pub const fn parent(&self) -> Option<&'static Self> {
        self.parent
    }

    /// Returns an iterator over this type and its ancestors, most derived first.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Returns `true` if this type is `other` or derives from it.
    #[must_use]
    pub fn is_a(&self, other: &Self) -> bool {
        self.ancestors().any(|t| t == other)
    }

    /// Returns the number of ancestors above this type.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ObjectType {}

impl Hash for ObjectType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("parent", &self.parent.map(Self::name))
            .finish()
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator over a type and its ancestors.
///
/// Created by [`ObjectType::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    next: Option<&'a ObjectType>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ObjectType;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;
        Some(current)
    }
}

impl core::iter::FusedIterator for Ancestors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    static ACTOR: ObjectType = ObjectType::root("Actor");
    static WIDGET: ObjectType = ObjectType::derived("Widget", &ACTOR);
    static BUTTON: ObjectType = ObjectType::derived("Button", &WIDGET);
    static LABEL: ObjectType = ObjectType::derived("Label", &WIDGET);

    #[test]
    fn ancestors_most_derived_first() {
        let names: Vec<_> = BUTTON.ancestors().map(ObjectType::name).collect();
        assert_eq!(names, ["Button", "Widget", "Actor"]);
        assert_eq!(ACTOR.ancestors().count(), 1);
    }

    #[test]
    fn is_a_follows_parents_only() {
        assert!(BUTTON.is_a(&BUTTON));
        assert!(BUTTON.is_a(&ACTOR));
        assert!(!BUTTON.is_a(&LABEL));
        assert!(!ACTOR.is_a(&WIDGET));
    }

    #[test]
    fn depth() {
        assert_eq!(ACTOR.depth(), 0);
        assert_eq!(BUTTON.depth(), 2);
    }

    #[test]
    fn debug_shows_parent_name() {
        let debug = format!("{BUTTON:?}");
        assert!(debug.contains("Button"));
        assert!(debug.contains("Widget"));
        assert!(!debug.contains("Actor"));
    }
}
