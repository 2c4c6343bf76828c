// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Livery Values: typed style values and shorthand coercion.
//!
//! This crate holds the value model shared by the rest of the Livery
//! workspace, along with the pure functions that turn CSS box-model
//! shorthand text into typed composite values.
//!
//! ## Core Concepts
//!
//! ### Values
//!
//! [`Value`] is a small typed union covering everything a style property can
//! hold, and [`ValueType`] is its tag. Every tag has an *empty* value
//! ([`ValueType::empty_value`]) that stylable objects report when no style is
//! attached.
//!
//! ### Composites
//!
//! - [`BoxEdges`]: four integer edges (padding, margins, borders).
//! - [`BorderedImage`]: an image uri plus four slice insets.
//!
//! Both serialize back to their canonical shorthand through [`Display`](core::fmt::Display).
//!
//! ### Shorthand
//!
//! ```rust
//! use livery_values::{BoxEdges, parse_bordered_image, parse_box_edges};
//!
//! assert_eq!(parse_box_edges("10"), BoxEdges::all(10));
//! assert_eq!(parse_box_edges("10 20"), BoxEdges::new(10, 20, 10, 20));
//! assert_eq!(parse_box_edges("1 2 3 4"), BoxEdges::new(1, 2, 3, 4));
//!
//! let image = parse_bordered_image("url(\"img.png\") 3", "/a/b/style.css");
//! assert_eq!(image.uri, "/a/b/img.png");
//! assert_eq!(image.edges, BoxEdges::all(3));
//! ```
//!
//! Malformed shorthand never fails hard: it degrades to the zero/empty value
//! and, where the format is recognisably wrong, logs a warning through the
//! [`log`] facade.
//!
//! ### Conversions
//!
//! [`Value::transform`] converts between value types the way a style
//! resource needs: numbers between each other, anything printable to a
//! string, and shorthand strings into composites.
//!
//! ```rust
//! use livery_values::{BoxEdges, Value, ValueType};
//!
//! let raw = Value::from("4 8");
//! assert_eq!(
//!     raw.transform(ValueType::BoxEdges),
//!     Some(Value::BoxEdges(BoxEdges::new(4, 8, 4, 8)))
//! );
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod edges;
mod shorthand;
mod value;

pub use edges::{BorderedImage, BoxEdges};
pub use shorthand::{
    ShorthandError, parse_bordered_image, parse_box_edges, try_parse_bordered_image,
};
pub use value::{ObjectRef, Value, ValueType};
