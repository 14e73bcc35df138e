//! pkgcheck Schemas - naming validators for package metadata
//!
//! This crate decides whether `Package` and `PackageVersion` resources are
//! well-formed before they are admitted or displayed. It reports every
//! violation it finds, in order, as structured field errors.
//!
//! ## Rules
//!
//! ### Package
//! - `metadata.name` is a fully qualified name: a DNS-1123 subdomain with at
//!   least three dot-separated segments
//!
//! ### PackageVersion
//! - `spec.packageName` is present and a fully qualified name
//! - `spec.version` is present
//! - `metadata.name` starts with `spec.packageName` followed by `.`
//!
//! ## Quick Start
//!
//! ```rust
//! use pkgcheck_core::PackageVersion;
//! use pkgcheck_schemas::{validate_package_version, ErrorKind};
//!
//! let pv = PackageVersion::new("other.1.0.0", "my.pkg.example.com", "1.0.0");
//! let errors = validate_package_version(&pv);
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.errors[0].kind, ErrorKind::Invalid);
//! assert_eq!(errors.errors[0].field.to_string(), "metadata.name");
//! ```
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    ErrorKind, FieldError, FieldErrors, FieldPath, PathSegment,
    is_dns1123_subdomain, is_fully_qualified_name,
    validate_package, validate_package_name, validate_package_version,
    validate_package_version_name, validate_package_version_spec_package_name,
    validate_package_version_spec_version, Validate,
    ValidationConfig, DocumentReport, validate_documents,
};
