// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-model composite values.
//!
//! This module provides [`BoxEdges`] for padding-like quads and
//! [`BorderedImage`] for border-image descriptors.

use alloc::string::String;
use core::fmt;

/// Four integer edges in CSS box-model order.
///
/// `BoxEdges` is a plain copyable value. The default is all zero.
///
/// Its [`Display`](fmt::Display) form is the canonical 4-token shorthand,
/// which [`parse_box_edges`](crate::parse_box_edges) reads back unchanged.
///
/// # Example
///
/// ```rust
/// use livery_values::{BoxEdges, parse_box_edges};
///
/// let edges = BoxEdges::new(1, 2, 3, 4);
/// assert_eq!(edges.to_string(), "1 2 3 4");
/// assert_eq!(parse_box_edges(&edges.to_string()), edges);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxEdges {
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
    /// Left edge.
    pub left: i32,
}

impl BoxEdges {
    /// All edges zero.
    pub const ZERO: Self = Self::all(0);

    /// Creates edges from `top`, `right`, `bottom` and `left`.
    #[must_use]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edges with the same value on every side.
    #[must_use]
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates edges from a vertical (top/bottom) and horizontal (left/right) value.
    #[must_use]
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Returns `true` if every edge is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }
}

impl fmt::Display for BoxEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// A border image: an image location plus four slice insets.
///
/// The value owns its `uri`; cloning copies the string. The default value
/// (empty uri, zero insets) is what the `none` shorthand produces.
///
/// Insets without an image have no shorthand form, so any value with an
/// empty uri displays as `none`.
///
/// # Example
///
/// ```rust
/// use livery_values::{BorderedImage, BoxEdges};
///
/// let image = BorderedImage::new("/themes/button.png", BoxEdges::all(4));
/// assert_eq!(image.to_string(), "url(\"/themes/button.png\") 4 4 4 4");
/// assert_eq!(BorderedImage::default().to_string(), "none");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderedImage {
    /// Absolute or resolved-relative image path.
    pub uri: String,
    /// Slice insets.
    pub edges: BoxEdges,
}

impl BorderedImage {
    /// Creates a bordered image from a uri and slice insets.
    #[must_use]
    pub fn new(uri: impl Into<String>, edges: BoxEdges) -> Self {
        Self {
            uri: uri.into(),
            edges,
        }
    }

    /// Returns `true` for the empty value produced by `none`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.uri.is_empty() && self.edges.is_zero()
    }
}

impl fmt::Display for BorderedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.uri.is_empty() {
            return f.write_str("none");
        }
        write!(f, "url(\"{}\") {}", self.uri, self.edges)
    }
}
