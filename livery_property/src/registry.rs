// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style property registry.
//!
//! This module provides [`PropertyRegistry`] for installing descriptors per
//! owner type and resolving them through the type hierarchy.

use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::descriptor::PropertyDescriptor;
use crate::error::RegistryError;
use crate::object_type::ObjectType;

/// Most stylable types declare only a handful of style properties.
type OwnerProperties = SmallVec<[PropertyDescriptor; 8]>;

/// A pool of style property descriptors keyed by owner type and name.
///
/// Each owner type holds its descriptors in install order. Lookup can be
/// restricted to one type or walk from a type up through its ancestors, in
/// which case the most derived declaration wins.
///
/// # Example
///
/// ```rust
/// use livery_property::{ObjectType, PropertyDescriptor, PropertyRegistry};
/// use livery_values::BoxEdges;
///
/// static WIDGET: ObjectType = ObjectType::root("Widget");
/// static BUTTON: ObjectType = ObjectType::derived("Button", &WIDGET);
///
/// let mut registry = PropertyRegistry::new();
/// let padding = registry
///     .install(&WIDGET, PropertyDescriptor::new("padding", BoxEdges::ZERO))
///     .unwrap();
///
/// assert_eq!(registry.lookup("padding", &BUTTON, true), Some(padding.clone()));
/// assert_eq!(registry.lookup("padding", &BUTTON, false), None);
/// assert_eq!(padding.owner_type_name(), Some("Widget"));
/// ```
#[derive(Default)]
pub struct PropertyRegistry {
    by_owner: HashMap<&'static str, OwnerProperties>,
    /// Owner names in first-install order, for deterministic iteration.
    owners: Vec<&'static str>,
    len: usize,
}

impl PropertyRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `descriptor` as a style property of `owner`.
    ///
    /// On success the registry stores a copy stamped with `owner` and
    /// returns it. The returned handle is the one [`lookup`](Self::lookup)
    /// yields afterwards.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AlreadyExists`] if `owner` already has a property
    ///   with this name; the original is kept.
    /// - [`RegistryError::NotReadable`] if the descriptor is not readable.
    /// - [`RegistryError::ConstructTime`] if the descriptor is flagged as a
    ///   construction-time property.
    ///
    /// Each rejection is also logged as a warning.
    pub fn install(
        &mut self,
        owner: &'static ObjectType,
        descriptor: PropertyDescriptor,
    ) -> Result<PropertyDescriptor, RegistryError> {
        let result = self.try_install(owner, descriptor);
        match &result {
            Ok(installed) => {
                log::debug!(
                    "installed style property `{}` ({}) on `{}`",
                    installed.name(),
                    installed.value_type(),
                    owner
                );
            }
            Err(err) => log::warn!("{err}"),
        }
        result
    }

    fn try_install(
        &mut self,
        owner: &'static ObjectType,
        descriptor: PropertyDescriptor,
    ) -> Result<PropertyDescriptor, RegistryError> {
        if self.lookup_exact(descriptor.name(), owner.name()).is_some() {
            return Err(RegistryError::AlreadyExists {
                owner: owner.name(),
                name: descriptor.name().into(),
            });
        }
        if !descriptor.is_readable() {
            return Err(RegistryError::NotReadable {
                name: descriptor.name().into(),
            });
        }
        if descriptor.flags().is_construct_time() {
            return Err(RegistryError::ConstructTime {
                name: descriptor.name().into(),
            });
        }

        let stamped = descriptor.stamped(owner);
        if !self.by_owner.contains_key(owner.name()) {
            self.owners.push(owner.name());
        }
        self.by_owner
            .entry(owner.name())
            .or_default()
            .push(stamped.clone());
        self.len += 1;
        Ok(stamped)
    }

    /// Looks up a style property by name.
    ///
    /// With `walk_ancestors` false only descriptors installed by `ty` itself
    /// are considered. Otherwise the search starts at `ty` and moves up the
    /// parent chain, returning the first match.
    #[must_use]
    pub fn lookup(
        &self,
        name: &str,
        ty: &ObjectType,
        walk_ancestors: bool,
    ) -> Option<PropertyDescriptor> {
        if walk_ancestors {
            ty.ancestors()
                .find_map(|t| self.lookup_exact(name, t.name()))
                .cloned()
        } else {
            self.lookup_exact(name, ty.name()).cloned()
        }
    }

    fn lookup_exact(&self, name: &str, owner: &str) -> Option<&PropertyDescriptor> {
        self.by_owner
            .get(owner)?
            .iter()
            .find(|descriptor| descriptor.name() == name)
    }

    /// Returns every style property visible to `ty`.
    ///
    /// Each name appears once, resolved the way
    /// [`lookup`](Self::lookup) with `walk_ancestors` would resolve it.
    /// Descriptors are ordered root ancestor first, then by install order
    /// within each type; shadowed descriptors are omitted.
    #[must_use]
    pub fn list_for(&self, ty: &ObjectType) -> Vec<PropertyDescriptor> {
        let chain: SmallVec<[&ObjectType; 8]> = ty.ancestors().collect();
        let mut visible = Vec::new();
        for (depth, owner) in chain.iter().enumerate().rev() {
            let Some(entries) = self.by_owner.get(owner.name()) else {
                continue;
            };
            for descriptor in entries {
                let shadowed = chain[..depth]
                    .iter()
                    .any(|derived| self.lookup_exact(descriptor.name(), derived.name()).is_some());
                if !shadowed {
                    visible.push(descriptor.clone());
                }
            }
        }
        visible
    }

    /// Removes every descriptor installed by `owner`.
    ///
    /// Descriptors of other types, including ancestors and descendants of
    /// `owner`, are untouched. Returns the number of descriptors removed.
    pub fn remove_all_for(&mut self, owner: &ObjectType) -> usize {
        let Some(entries) = self.by_owner.remove(owner.name()) else {
            return 0;
        };
        self.owners.retain(|name| *name != owner.name());
        self.len -= entries.len();
        log::debug!(
            "removed {} style properties owned by `{}`",
            entries.len(),
            owner
        );
        entries.len()
    }

    /// Returns the number of installed descriptors.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is installed.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over all installed descriptors.
    ///
    /// Owners are visited in the order they first installed a property and
    /// each owner's descriptors in install order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.owners
            .iter()
            .filter_map(|owner| self.by_owner.get(owner))
            .flatten()
    }
}

impl core::fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("count", &self.len)
            .field(
                "properties",
                &self
                    .iter()
                    .map(|d| (d.owner_type_name().unwrap_or_default(), d.name()))
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::PropertyFlags;
    use alloc::{format, vec, vec::Vec};
    use livery_values::{BorderedImage, BoxEdges, Value};

    static ACTOR: ObjectType = ObjectType::root("Actor");
    static WIDGET: ObjectType = ObjectType::derived("Widget", &ACTOR);
    static BUTTON: ObjectType = ObjectType::derived("Button", &WIDGET);
    static LABEL: ObjectType = ObjectType::derived("Label", &WIDGET);

    fn names(descriptors: &[PropertyDescriptor]) -> Vec<(&str, &str)> {
        descriptors
            .iter()
            .map(|d| (d.owner_type_name().unwrap_or_default(), d.name()))
            .collect()
    }

    #[test]
    fn registry_new() {
        let registry = PropertyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn install_then_exact_lookup() {
        let mut registry = PropertyRegistry::new();
        let installed = registry
            .install(&WIDGET, PropertyDescriptor::new("padding", BoxEdges::ZERO))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("padding", &WIDGET, false), Some(installed.clone()));
        assert_eq!(registry.lookup("padding", &WIDGET, true), Some(installed));
        assert_eq!(registry.lookup("margin", &WIDGET, true), None);
    }

    #[test]
    fn duplicate_install_keeps_original() {
        let mut registry = PropertyRegistry::new();
        let first = registry
            .install(&WIDGET, PropertyDescriptor::new("spacing", 1))
            .unwrap();

        let err = registry
            .install(&WIDGET, PropertyDescriptor::new("spacing", 2))
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::AlreadyExists {
                owner: "Widget",
                name: "spacing".into()
            }
        );
        assert_eq!(registry.len(), 1);
        let found = registry.lookup("spacing", &WIDGET, false).unwrap();
        assert_eq!(found, first);
        assert_eq!(found.default_value(), &Value::Int(1));
    }

    #[test]
    fn same_name_on_different_owners_is_allowed() {
        let mut registry = PropertyRegistry::new();
        registry
            .install(&WIDGET, PropertyDescriptor::new("spacing", 1))
            .unwrap();
        registry
            .install(&BUTTON, PropertyDescriptor::new("spacing", 2))
            .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn write_only_and_construct_descriptors_are_rejected() {
        let mut registry = PropertyRegistry::new();

        let write_only =
            PropertyDescriptor::new("secret", 0).with_flags(PropertyFlags::WRITABLE);
        assert!(matches!(
            registry.install(&WIDGET, write_only),
            Err(RegistryError::NotReadable { .. })
        ));

        let construct_only = PropertyDescriptor::new("mode", 0)
            .with_flags(PropertyFlags::READWRITE | PropertyFlags::CONSTRUCT_ONLY);
        assert!(matches!(
            registry.install(&WIDGET, construct_only),
            Err(RegistryError::ConstructTime { .. })
        ));

        assert!(registry.is_empty());
        assert_eq!(registry.lookup("secret", &WIDGET, true), None);
    }

    #[test]
    fn ancestor_walk_finds_inherited_property() {
        let mut registry = PropertyRegistry::new();
        let inherited = registry
            .install(&ACTOR, PropertyDescriptor::new("x", 0))
            .unwrap();

        assert_eq!(registry.lookup("x", &BUTTON, true), Some(inherited));
        assert_eq!(registry.lookup("x", &BUTTON, false), None);
    }

    #[test]
    fn derived_declaration_shadows_ancestor() {
        let mut registry = PropertyRegistry::new();
        let base = registry
            .install(&WIDGET, PropertyDescriptor::new("x", 0))
            .unwrap();
        let derived = registry
            .install(&BUTTON, PropertyDescriptor::new("x", 1))
            .unwrap();

        assert_eq!(registry.lookup("x", &BUTTON, true), Some(derived));
        assert_eq!(registry.lookup("x", &LABEL, true), Some(base.clone()));
        assert_eq!(registry.lookup("x", &WIDGET, true), Some(base));
    }

    #[test]
    fn list_for_orders_root_first_and_omits_shadowed() {
        let mut registry = PropertyRegistry::new();
        registry
            .install(&ACTOR, PropertyDescriptor::new("opacity", 1.0))
            .unwrap();
        registry
            .install(&WIDGET, PropertyDescriptor::new("padding", BoxEdges::ZERO))
            .unwrap();
        registry
            .install(&WIDGET, PropertyDescriptor::new("border-image", BorderedImage::default()))
            .unwrap();
        registry
            .install(&BUTTON, PropertyDescriptor::new("padding", BoxEdges::all(4)))
            .unwrap();
        registry
            .install(&LABEL, PropertyDescriptor::new("text-color", "black"))
            .unwrap();

        assert_eq!(
            names(&registry.list_for(&BUTTON)),
            vec![
                ("Actor", "opacity"),
                ("Widget", "border-image"),
                ("Button", "padding"),
            ]
        );
        assert_eq!(
            names(&registry.list_for(&WIDGET)),
            vec![
                ("Actor", "opacity"),
                ("Widget", "padding"),
                ("Widget", "border-image"),
            ]
        );
        assert_eq!(names(&registry.list_for(&ACTOR)), vec![("Actor", "opacity")]);
    }

    #[test]
    fn remove_all_for_leaves_other_owners() {
        let mut registry = PropertyRegistry::new();
        registry
            .install(&WIDGET, PropertyDescriptor::new("a", 0))
            .unwrap();
        registry
            .install(&WIDGET, PropertyDescriptor::new("b", 0))
            .unwrap();
        let kept = registry
            .install(&BUTTON, PropertyDescriptor::new("a", 1))
            .unwrap();

        assert_eq!(registry.remove_all_for(&WIDGET), 2);
        assert_eq!(registry.remove_all_for(&WIDGET), 0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("a", &BUTTON, true), Some(kept));
        assert_eq!(registry.lookup("b", &BUTTON, true), None);

        // The owner can install again after removal.
        assert!(
            registry
                .install(&WIDGET, PropertyDescriptor::new("a", 0))
                .is_ok()
        );
    }

    #[test]
    fn iter_in_install_order() {
        let mut registry = PropertyRegistry::new();
        registry
            .install(&BUTTON, PropertyDescriptor::new("x", 0))
            .unwrap();
        registry
            .install(&WIDGET, PropertyDescriptor::new("y", 0))
            .unwrap();
        registry
            .install(&BUTTON, PropertyDescriptor::new("z", 0))
            .unwrap();

        let listed: Vec<_> = registry.iter().map(PropertyDescriptor::name).collect();
        assert_eq!(listed, vec!["x", "z", "y"]);
    }

    #[test]
    fn registry_debug() {
        let mut registry = PropertyRegistry::new();
        registry
            .install(&WIDGET, PropertyDescriptor::new("padding", BoxEdges::ZERO))
            .unwrap();

        let debug = format!("{:?}", registry);
        assert!(debug.contains("PropertyRegistry"));
        assert!(debug.contains("padding"));
    }
}
