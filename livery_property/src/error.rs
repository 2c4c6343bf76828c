// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Reasons a descriptor cannot be installed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The owner type already has a property with this name.
    #[error("type `{owner}` already has a style property named `{name}`")]
    AlreadyExists {
        /// Owner type name.
        owner: &'static str,
        /// Property name.
        name: String,
    },
    /// Style properties must be readable.
    #[error("style property `{name}` is not readable")]
    NotReadable {
        /// Property name.
        name: String,
    },
    /// Style properties cannot be construction-time properties.
    #[error("style property `{name}` is a construction-time property")]
    ConstructTime {
        /// Property name.
        name: String,
    },
}
