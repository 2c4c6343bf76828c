// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed style values.
//!
//! This module provides [`Value`], the typed union every style property
//! carries, and its tag [`ValueType`].

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::any::Any;
use core::fmt;

use crate::edges::{BorderedImage, BoxEdges};
use crate::shorthand::{parse_bordered_image, parse_box_edges};

/// The declared type of a style property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A boolean flag.
    Bool,
    /// A signed integer.
    Int,
    /// A floating-point number.
    Float,
    /// A string.
    String,
    /// A [`BoxEdges`] quad.
    BoxEdges,
    /// A [`BorderedImage`] descriptor.
    BorderedImage,
    /// A shared object reference.
    Object,
}

impl ValueType {
    /// Returns the type-appropriate reset value.
    ///
    /// This is what a stylable object reports for a property when no style
    /// is attached to it.
    ///
    /// ```rust
    /// use livery_values::{BoxEdges, Value, ValueType};
    ///
    /// assert_eq!(ValueType::Int.empty_value(), Value::Int(0));
    /// assert_eq!(ValueType::BoxEdges.empty_value(), Value::BoxEdges(BoxEdges::ZERO));
    /// assert_eq!(ValueType::Object.empty_value(), Value::Object(None));
    /// ```
    #[must_use]
    pub fn empty_value(self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Int => Value::Int(0),
            Self::Float => Value::Float(0.0),
            Self::String => Value::String(String::new()),
            Self::BoxEdges => Value::BoxEdges(BoxEdges::ZERO),
            Self::BorderedImage => Value::BorderedImage(BorderedImage::default()),
            Self::Object => Value::Object(None),
        }
    }

    /// Returns a short lowercase name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::BoxEdges => "box-edges",
            Self::BorderedImage => "bordered-image",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shared, type-erased object reference.
///
/// Two references are equal when they point at the same object.
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn Any>);

impl ObjectRef {
    /// Wraps a value in a new shared reference.
    #[must_use]
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Wraps an existing shared object.
    #[must_use]
    pub fn from_rc(object: Rc<dyn Any>) -> Self {
        Self(object)
    }

    /// Attempts to view the object as a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Returns `true` if both references point at the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("strong_count", &Rc::strong_count(&self.0))
            .finish_non_exhaustive()
    }
}

/// A typed style property value.
///
/// # Example
///
/// ```rust
/// use livery_values::{BoxEdges, Value, ValueType};
///
/// let value = Value::from(BoxEdges::all(2));
/// assert_eq!(value.value_type(), ValueType::BoxEdges);
/// assert_eq!(value.as_box_edges(), Some(BoxEdges::all(2)));
/// assert_eq!(value.to_string(), "2 2 2 2");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i32),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// A [`BoxEdges`] quad.
    BoxEdges(BoxEdges),
    /// A [`BorderedImage`] descriptor.
    BorderedImage(BorderedImage),
    /// A shared object reference, or none.
    Object(Option<ObjectRef>),
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::BoxEdges(_) => ValueType::BoxEdges,
            Self::BorderedImage(_) => ValueType::BorderedImage,
            Self::Object(_) => ValueType::Object,
        }
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number, if this is a [`Value::Float`] or [`Value::Int`].
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    /// Returns the string, if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the edges, if this is a [`Value::BoxEdges`].
    #[must_use]
    pub fn as_box_edges(&self) -> Option<BoxEdges> {
        match self {
            Self::BoxEdges(edges) => Some(*edges),
            _ => None,
        }
    }

    /// Returns the image, if this is a [`Value::BorderedImage`].
    #[must_use]
    pub fn as_bordered_image(&self) -> Option<&BorderedImage> {
        match self {
            Self::BorderedImage(image) => Some(image),
            _ => None,
        }
    }

    /// Returns the object reference, if this is a non-empty [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => object.as_ref(),
            _ => None,
        }
    }

    /// Converts this value to `target`.
    ///
    /// Relative image paths in bordered-image shorthand resolve against the
    /// current directory. Use [`transform_relative_to`](Self::transform_relative_to)
    /// when the text came from a file.
    ///
    /// Returns `None` when no conversion exists.
    #[must_use]
    pub fn transform(&self, target: ValueType) -> Option<Self> {
        self.transform_relative_to(target, "")
    }

    /// Converts this value to `target`, resolving relative image paths
    /// against the directory of `base_path`.
    ///
    /// | From | To | Rule |
    /// |------|----|------|
    /// | any | same type | clone |
    /// | `Int` | `Float` | exact |
    /// | `Float` | `Int` | truncates toward zero, saturating |
    /// | `Bool` | `Int` | `0` or `1` |
    /// | `Int` | `Bool` | non-zero |
    /// | anything but `Object` | `String` | [`Display`](fmt::Display) form |
    /// | `String` | `BoxEdges` | [`parse_box_edges`] |
    /// | `String` | `BorderedImage` | [`parse_bordered_image`] |
    ///
    /// Returns `None` when no conversion exists.
    #[must_use]
    pub fn transform_relative_to(&self, target: ValueType, base_path: &str) -> Option<Self> {
        if self.value_type() == target {
            return Some(self.clone());
        }
        let converted = match (self, target) {
            (Self::Int(i), ValueType::Float) => Self::Float(f64::from(*i)),
            #[expect(
                clippy::cast_possible_truncation,
                reason = "float to int casts saturate, which is the intended conversion"
            )]
            (Self::Float(f), ValueType::Int) => Self::Int(*f as i32),
            (Self::Bool(b), ValueType::Int) => Self::Int(i32::from(*b)),
            (Self::Int(i), ValueType::Bool) => Self::Bool(*i != 0),
            (Self::Object(_), ValueType::String) => return None,
            (_, ValueType::String) => Self::String(self.to_string()),
            (Self::String(s), ValueType::BoxEdges) => Self::BoxEdges(parse_box_edges(s)),
            (Self::String(s), ValueType::BorderedImage) => {
                Self::BorderedImage(parse_bordered_image(s, base_path))
            }
            _ => return None,
        };
        Some(converted)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::BoxEdges(edges) => write!(f, "{edges}"),
            Self::BorderedImage(image) => write!(f, "{image}"),
            Self::Object(Some(_)) => f.write_str("object"),
            Self::Object(None) => f.write_str("none"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<BoxEdges> for Value {
    fn from(value: BoxEdges) -> Self {
        Self::BoxEdges(value)
    }
}

impl From<BorderedImage> for Value {
    fn from(value: BorderedImage) -> Self {
        Self::BorderedImage(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Self::Object(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn value_type_tags() {
        assert_eq!(Value::from(true).value_type(), ValueType::Bool);
        assert_eq!(Value::from(1).value_type(), ValueType::Int);
        assert_eq!(Value::from(1.5).value_type(), ValueType::Float);
        assert_eq!(Value::from("x").value_type(), ValueType::String);
        assert_eq!(
            Value::from(BorderedImage::default()).value_type(),
            ValueType::BorderedImage
        );
        assert_eq!(Value::Object(None).value_type(), ValueType::Object);
    }

    #[test]
    fn empty_values_match_their_type() {
        for ty in [
            ValueType::Bool,
            ValueType::Int,
            ValueType::Float,
            ValueType::String,
            ValueType::BoxEdges,
            ValueType::BorderedImage,
            ValueType::Object,
        ] {
            assert_eq!(ty.empty_value().value_type(), ty);
        }
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_float(), Some(3.0));
        assert_eq!(Value::Int(3).as_str(), None);
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert!(Value::Object(None).as_object().is_none());
    }

    #[test]
    fn transform_numbers() {
        assert_eq!(Value::Int(2).transform(ValueType::Float), Some(Value::Float(2.0)));
        assert_eq!(Value::Float(2.9).transform(ValueType::Int), Some(Value::Int(2)));
        assert_eq!(Value::Bool(true).transform(ValueType::Int), Some(Value::Int(1)));
        assert_eq!(Value::Int(0).transform(ValueType::Bool), Some(Value::Bool(false)));
    }

    #[test]
    fn transform_to_string() {
        assert_eq!(
            Value::Int(12).transform(ValueType::String),
            Some(Value::from("12"))
        );
        assert_eq!(
            Value::BoxEdges(BoxEdges::symmetric(1, 2)).transform(ValueType::String),
            Some(Value::from("1 2 1 2"))
        );
        assert_eq!(
            Value::from(ObjectRef::new(5_u8)).transform(ValueType::String),
            None
        );
    }

    #[test]
    fn transform_shorthand_strings() {
        assert_eq!(
            Value::from("1 2 3 4").transform(ValueType::BoxEdges),
            Some(Value::BoxEdges(BoxEdges::new(1, 2, 3, 4)))
        );
        assert_eq!(
            Value::from("url(\"frame.png\") 2").transform_relative_to(
                ValueType::BorderedImage,
                "/themes/default/style.css"
            ),
            Some(Value::BorderedImage(BorderedImage::new(
                "/themes/default/frame.png",
                BoxEdges::all(2)
            )))
        );
    }

    #[test]
    fn transform_unsupported() {
        assert_eq!(Value::from("12").transform(ValueType::Int), None);
        assert_eq!(Value::BoxEdges(BoxEdges::ZERO).transform(ValueType::Int), None);
    }

    #[test]
    fn object_refs_compare_by_identity() {
        let a = ObjectRef::new(1_u32);
        let b = ObjectRef::new(1_u32);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.downcast_ref::<u32>(), Some(&1));
        assert!(format!("{a:?}").contains("ObjectRef"));
    }
}
