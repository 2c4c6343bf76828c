// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stylable capability.
//!
//! This module provides the [`Stylable`] trait for objects that can be
//! styled, and [`StylableExt`] for style attachment, typed property reads and
//! change notification.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use livery_notify::{Enqueued, NotifyError};
use livery_property::{ObjectType, PropertyDescriptor, find_property, list_properties};
use livery_values::{Value, ValueType};

use crate::resource::StyleResource;
use crate::signals::HandlerId;
use crate::state::StylableState;

/// The visible area of a scrolled object, in its own coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
    /// Visible width.
    pub width: i32,
    /// Visible height.
    pub height: i32,
}

/// An object whose appearance is driven by a style resource.
///
/// Implementors supply their [`ObjectType`] and a [`StylableState`]. Every
/// other accessor has a default, listed below; override the ones the object
/// can answer better. Style resources use the accessors to match the object
/// against their rules.
///
/// | Accessor | Default |
/// |----------|---------|
/// | [`style`](Self::style) | the style held in the [`StylableState`] |
/// | [`store_style`](Self::store_style) | replaces the style held in the [`StylableState`] |
/// | [`container`](Self::container) | `None` |
/// | [`base_style`](Self::base_style) | `None` |
/// | [`style_id`](Self::style_id) | `None` |
/// | [`style_type`](Self::style_type) | the [`ObjectType`] name |
/// | [`style_class`](Self::style_class) | `None` |
/// | [`pseudo_class`](Self::pseudo_class) | `None` |
/// | [`viewport`](Self::viewport) | `None` |
/// | [`attribute`](Self::attribute) | [`object_property`](Self::object_property) as a string |
/// | [`object_property`](Self::object_property) | `None` |
///
/// The trait is object safe; [`StylableExt`] is available on `dyn Stylable`
/// as well as on concrete types.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
///
/// use livery_property::{ObjectType, PropertyDescriptor, install_property};
/// use livery_stylable::{Stylable, StylableExt, StylableState};
/// use livery_values::{BoxEdges, Value};
///
/// static BUTTON: ObjectType = ObjectType::root("Button");
///
/// struct Button {
///     state: StylableState,
/// }
///
/// impl Stylable for Button {
///     fn object_type(&self) -> &'static ObjectType {
///         &BUTTON
///     }
///
///     fn stylable_state(&self) -> &StylableState {
///         &self.state
///     }
///
///     fn style_class(&self) -> Option<Cow<'_, str>> {
///         Some("primary".into())
///     }
/// }
///
/// install_property(&BUTTON, PropertyDescriptor::new("padding", BoxEdges::all(2))).unwrap();
///
/// let button = Button { state: StylableState::new() };
/// assert_eq!(button.style_type(), "Button");
/// assert_eq!(
///     button.get_property("padding"),
///     Some(Value::BoxEdges(BoxEdges::all(2)))
/// );
/// ```
pub trait Stylable {
    /// Returns the object's type, used for property lookup.
    fn object_type(&self) -> &'static ObjectType;

    /// Returns the object's stylable storage.
    fn stylable_state(&self) -> &StylableState;

    /// Returns the attached style resource.
    fn style(&self) -> Option<Rc<dyn StyleResource>> {
        self.stylable_state().style()
    }

    /// Stores `style` as the attached style resource.
    ///
    /// This only stores; [`StylableExt::set_style`] wraps it with the change
    /// signals.
    fn store_style(&self, style: Option<Rc<dyn StyleResource>>) {
        self.stylable_state().replace_style(style);
    }

    /// Returns the stylable object containing this one.
    fn container(&self) -> Option<Rc<dyn Stylable>> {
        None
    }

    /// Returns the stylable this object takes its base style from.
    fn base_style(&self) -> Option<Rc<dyn Stylable>> {
        None
    }

    /// Returns the style id.
    fn style_id(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Returns the style type name.
    fn style_type(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.object_type().name())
    }

    /// Returns the style class.
    fn style_class(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Returns the pseudo class, such as `hover` or `active`.
    fn pseudo_class(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Returns the visible area, for objects that scroll.
    fn viewport(&self) -> Option<Viewport> {
        None
    }

    /// Returns a named attribute as a string, for attribute selectors.
    ///
    /// The default reads [`object_property`](Self::object_property) and
    /// converts the value to a string. Object values have no string form.
    fn attribute(&self, name: &str) -> Option<String> {
        match self.object_property(name)?.transform(ValueType::String)? {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns a generic (non-style) property of the object by name.
    fn object_property(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Style attachment, property reads and notification for [`Stylable`]s.
///
/// Implemented for every sized `Stylable` and for `dyn Stylable`.
///
/// Signal handlers receive the emitting object. They run after all internal
/// borrows are released, so a handler may call back into the object.
pub trait StylableExt: Stylable {
    /// Returns `self` as a trait object.
    fn as_stylable(&self) -> &dyn Stylable;

    /// Attaches `style`, replacing the current style.
    ///
    /// The previous style is kept alive until `style-changed` handlers have
    /// seen it, then released; afterwards `notify` fires with `"style"`.
    /// Attaching the style that is already attached is safe and still
    /// emits both signals.
    fn set_style(&self, style: Rc<dyn StyleResource>) {
        replace_style(self.as_stylable(), Some(style));
    }

    /// Detaches the current style, leaving none attached.
    ///
    /// Emits the same signals as [`set_style`](Self::set_style).
    fn detach_style(&self) {
        replace_style(self.as_stylable(), None);
    }

    /// Reads a style property.
    ///
    /// The name is resolved through the object's type and its ancestors.
    ///
    /// - With no style attached, the result is the empty value of the
    ///   property's type.
    /// - If the style has no value, the result is the property's default.
    /// - A style value of another type is converted; shorthand strings
    ///   become [`BoxEdges`](livery_values::BoxEdges) or
    ///   [`BorderedImage`](livery_values::BorderedImage), with relative
    ///   image paths resolved against the style's source path. A value that
    ///   cannot be converted is reported and the default is used.
    ///
    /// Returns `None`, with a warning, if the object has no readable style
    /// property of that name.
    fn get_property(&self, name: &str) -> Option<Value> {
        let this = self.as_stylable();
        let descriptor = readable_property(this, name)?;
        let value = match this.style() {
            None => descriptor.value_type().empty_value(),
            Some(style) => {
                let raw = style.get_property(this, &descriptor);
                from_style(this, &descriptor, raw, style.source_path())
            }
        };
        Some(value)
    }

    /// Returns the default of a style property, ignoring the style.
    ///
    /// Returns `None`, with a warning, if the object has no readable style
    /// property of that name.
    fn get_default_value(&self, name: &str) -> Option<Value> {
        readable_property(self.as_stylable(), name)
            .map(|descriptor| descriptor.default_value().clone())
    }

    /// Reads several style properties in one style resolution pass.
    ///
    /// The result has one entry per name, in order, each resolved as
    /// [`get_property`](Self::get_property) would. Unknown names yield `None`.
    fn get_multiple(&self, names: &[&str]) -> Vec<Option<Value>> {
        let this = self.as_stylable();
        let descriptors: Vec<Option<PropertyDescriptor>> = names
            .iter()
            .map(|name| readable_property(this, name))
            .collect();
        let found: Vec<PropertyDescriptor> = descriptors.iter().flatten().cloned().collect();

        let mut resolved = match this.style() {
            None => found
                .iter()
                .map(|descriptor| descriptor.value_type().empty_value())
                .collect::<Vec<_>>(),
            Some(style) => {
                let mut raw = style.get_properties(this, &found).into_iter();
                found
                    .iter()
                    .map(|descriptor| {
                        from_style(this, descriptor, raw.next().flatten(), style.source_path())
                    })
                    .collect()
            }
        }
        .into_iter();

        descriptors
            .iter()
            .map(|descriptor| descriptor.as_ref().and_then(|_| resolved.next()))
            .collect()
    }

    /// Looks up a style property through the object's type and ancestors.
    fn find_property(&self, name: &str) -> Option<PropertyDescriptor> {
        find_property(name, self.object_type(), true)
    }

    /// Returns every style property visible to the object's type.
    fn list_properties(&self) -> Vec<PropertyDescriptor> {
        list_properties(self.object_type())
    }

    /// Freezes property notifications.
    ///
    /// Notifications raised while frozen are held and delivered once per
    /// property by the outermost [`thaw_notify`](Self::thaw_notify). Freezes
    /// nest. Prefer [`freeze_notify_guard`](Self::freeze_notify_guard).
    fn freeze_notify(&self) {
        self.stylable_state().notify.borrow_mut().freeze();
    }

    /// Thaws property notifications.
    ///
    /// The outermost thaw emits `style-notify` once for each distinct
    /// property notified while frozen, in first-notified order.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::NotFrozen`] if notifications are not frozen;
    /// nothing is emitted.
    fn thaw_notify(&self) -> Result<(), NotifyError> {
        let batch = self.stylable_state().notify.borrow_mut().thaw()?;
        let this = self.as_stylable();
        for descriptor in &batch {
            emit_style_notify(this, descriptor);
        }
        Ok(())
    }

    /// Freezes property notifications until the returned guard is dropped.
    ///
    /// ```rust
    /// # use livery_property::ObjectType;
    /// # use livery_stylable::{Stylable, StylableExt, StylableState};
    /// # static LABEL: ObjectType = ObjectType::root("Label");
    /// # struct Label { state: StylableState }
    /// # impl Stylable for Label {
    /// #     fn object_type(&self) -> &'static ObjectType { &LABEL }
    /// #     fn stylable_state(&self) -> &StylableState { &self.state }
    /// # }
    /// let label = Label { state: StylableState::new() };
    /// {
    ///     let _frozen = label.freeze_notify_guard();
    ///     assert!(label.stylable_state().is_notify_frozen());
    /// }
    /// assert!(!label.stylable_state().is_notify_frozen());
    /// ```
    fn freeze_notify_guard(&self) -> NotifyFreezeGuard<'_> {
        let this = self.as_stylable();
        this.freeze_notify();
        NotifyFreezeGuard { stylable: this }
    }

    /// Notifies that a style property changed.
    ///
    /// While frozen the notification is held; otherwise `style-notify` is
    /// emitted now. Returns `false`, with a warning, if the object has no
    /// style property of that name.
    fn notify_property(&self, name: &str) -> bool {
        let this = self.as_stylable();
        let Some(descriptor) = this.find_property(name) else {
            log::warn!(
                "type `{}` has no style property named `{name}` to notify",
                this.object_type()
            );
            return false;
        };
        let routed = this.stylable_state().notify.borrow_mut().enqueue(descriptor);
        if let Enqueued::Dispatch(descriptor) = routed {
            emit_style_notify(this, &descriptor);
        }
        true
    }

    /// Announces that something affecting style matching changed, such as
    /// the object's class or pseudo class. Emits `stylable-changed`.
    fn notify_style_change(&self) {
        let this = self.as_stylable();
        for handler in this.stylable_state().stylable_changed.matching(None) {
            handler(this);
        }
    }

    /// Connects a handler to `style-changed`, emitted when the style is
    /// replaced. The handler receives the replaced style.
    fn connect_style_changed<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&dyn Stylable, Option<&Rc<dyn StyleResource>>) + 'static,
    {
        let state = self.stylable_state();
        let id = state.next_handler_id();
        state.style_changed.connect(id, None, Rc::new(handler));
        id
    }

    /// Connects a handler to `style-notify`, emitted per changed style
    /// property.
    ///
    /// With a `detail` the handler only runs for the property of that name.
    fn connect_style_notify<F>(&self, detail: Option<&str>, handler: F) -> HandlerId
    where
        F: Fn(&dyn Stylable, &PropertyDescriptor) + 'static,
    {
        let state = self.stylable_state();
        let id = state.next_handler_id();
        state
            .style_notify
            .connect(id, detail.map(String::from), Rc::new(handler));
        id
    }

    /// Connects a handler to `stylable-changed`.
    fn connect_stylable_changed<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&dyn Stylable) + 'static,
    {
        let state = self.stylable_state();
        let id = state.next_handler_id();
        state.stylable_changed.connect(id, None, Rc::new(handler));
        id
    }

    /// Connects a handler to the generic `notify` signal, which receives the
    /// name of the changed attribute (`"style"` for style replacement).
    fn connect_notify<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&dyn Stylable, &str) + 'static,
    {
        let state = self.stylable_state();
        let id = state.next_handler_id();
        state.notify_signal.connect(id, None, Rc::new(handler));
        id
    }

    /// Disconnects a handler. Returns `false` if no handler has this id.
    fn disconnect(&self, id: HandlerId) -> bool {
        self.stylable_state().disconnect(id)
    }
}

impl<T: Stylable> StylableExt for T {
    #[inline]
    fn as_stylable(&self) -> &dyn Stylable {
        self
    }
}

impl StylableExt for dyn Stylable + '_ {
    #[inline]
    fn as_stylable(&self) -> &dyn Stylable {
        self
    }
}

/// Holds notifications frozen while alive.
///
/// Created by [`StylableExt::freeze_notify_guard`]; dropping it thaws once.
#[must_use = "notifications thaw as soon as the guard is dropped"]
pub struct NotifyFreezeGuard<'a> {
    stylable: &'a dyn Stylable,
}

impl Drop for NotifyFreezeGuard<'_> {
    fn drop(&mut self) {
        // The guard froze once, so this thaw is always matched.
        let _ = self.stylable.thaw_notify();
    }
}

impl core::fmt::Debug for NotifyFreezeGuard<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NotifyFreezeGuard")
            .field("object_type", &self.stylable.object_type().name())
            .finish()
    }
}

fn readable_property(this: &dyn Stylable, name: &str) -> Option<PropertyDescriptor> {
    let Some(descriptor) = find_property(name, this.object_type(), true) else {
        log::warn!(
            "type `{}` has no style property named `{name}`",
            this.object_type()
        );
        return None;
    };
    if !descriptor.is_readable() {
        log::warn!(
            "style property `{name}` of type `{}` is not readable",
            this.object_type()
        );
        return None;
    }
    Some(descriptor)
}

/// Converts a value supplied by a style to the descriptor's type.
fn from_style(
    this: &dyn Stylable,
    descriptor: &PropertyDescriptor,
    raw: Option<Value>,
    source_path: Option<&str>,
) -> Value {
    let Some(raw) = raw else {
        return descriptor.default_value().clone();
    };
    if descriptor.accepts(&raw) {
        return raw;
    }
    match raw.transform_relative_to(descriptor.value_type(), source_path.unwrap_or_default()) {
        Some(converted) => converted,
        None => {
            log::warn!(
                "style value of type {} for `{}` on `{}` cannot be converted to {}",
                raw.value_type(),
                descriptor.name(),
                this.object_type(),
                descriptor.value_type()
            );
            descriptor.default_value().clone()
        }
    }
}

fn replace_style(this: &dyn Stylable, style: Option<Rc<dyn StyleResource>>) {
    // Hold the previous style across the emission so handlers can inspect it.
    let previous = this.style();
    this.store_style(style);
    for handler in this.stylable_state().style_changed.matching(None) {
        handler(this, previous.as_ref());
    }
    drop(previous);
    for handler in this.stylable_state().notify_signal.matching(None) {
        handler(this, "style");
    }
}

fn emit_style_notify(this: &dyn Stylable, descriptor: &PropertyDescriptor) {
    for handler in this
        .stylable_state()
        .style_notify
        .matching(Some(descriptor.name()))
    {
        handler(this, descriptor);
    }
}
