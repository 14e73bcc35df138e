//! pkgcheck Core - resource model for package metadata
//!
//! This crate defines the `Package` and `PackageVersion` resources as they
//! appear in manifests and admission requests, plus the `Document` wrapper
//! used to decode either kind from a generic JSON value.
//!
//! # Example
//!
//! ```
//! use pkgcheck_core::{Document, ResourceKind};
//! use serde_json::json;
//!
//! let doc = Document::from_value(json!({
//!     "kind": "Package",
//!     "metadata": {"name": "my.pkg.example.com"}
//! }))
//! .unwrap();
//! assert_eq!(doc.kind(), ResourceKind::Package);
//! ```
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Document, ObjectMeta, Package, PackageSpec, PackageVersion, PackageVersionSpec,
    ResourceKind, API_VERSION,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
