// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style resource contract.

use alloc::vec::Vec;

use livery_property::PropertyDescriptor;
use livery_values::Value;

use crate::stylable::Stylable;

/// A source of concrete values for style properties.
///
/// A style resource is typically a parsed stylesheet: given a stylable object
/// (its type, id, class, pseudo class and container chain) and a property
/// descriptor, it decides which value applies. Stylable objects hold their
/// resource as an `Rc<dyn StyleResource>`.
///
/// Values may be returned in the descriptor's value type or as shorthand
/// strings; [`StylableExt::get_property`](crate::StylableExt::get_property)
/// converts them, resolving relative image paths against
/// [`source_path`](Self::source_path).
pub trait StyleResource {
    /// Resolves one property for `stylable`.
    ///
    /// Returns `None` if this resource has no value for it, in which case the
    /// descriptor's default applies.
    fn get_property(
        &self,
        stylable: &dyn Stylable,
        descriptor: &PropertyDescriptor,
    ) -> Option<Value>;

    /// Resolves several properties in one pass.
    ///
    /// The result has one entry per descriptor, in order. The default
    /// resolves each descriptor with [`get_property`](Self::get_property);
    /// resources that can share matching work across properties should
    /// override it.
    fn get_properties(
        &self,
        stylable: &dyn Stylable,
        descriptors: &[PropertyDescriptor],
    ) -> Vec<Option<Value>> {
        descriptors
            .iter()
            .map(|descriptor| self.get_property(stylable, descriptor))
            .collect()
    }

    /// Returns the file this resource was loaded from, if any.
    fn source_path(&self) -> Option<&str> {
        None
    }
}

/// A style resource that resolves nothing.
///
/// Every property reads as its descriptor default. New
/// [`StylableState`](crate::StylableState)s start with this resource.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptyStyle;

impl StyleResource for EmptyStyle {
    fn get_property(&self, _: &dyn Stylable, _: &PropertyDescriptor) -> Option<Value> {
        None
    }

    fn get_properties(
        &self,
        _: &dyn Stylable,
        descriptors: &[PropertyDescriptor],
    ) -> Vec<Option<Value>> {
        alloc::vec![None; descriptors.len()]
    }
}
