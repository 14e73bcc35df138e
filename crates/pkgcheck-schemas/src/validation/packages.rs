//! Naming rules for Package and PackageVersion resources
//!
//! Every rule runs regardless of what earlier rules reported, so a single call
//! surfaces all problems with a resource.
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FieldError, FieldErrors};
use crate::validation::names::is_fully_qualified_name;
use crate::validation::path::FieldPath;
use pkgcheck_core::{Document, Package, PackageVersion};

/// Detail reported when a version name does not extend its package name
pub const VERSION_NAME_PREFIX_MESSAGE: &str = "must begin with <spec.packageName> + '.'";

/// Validate a `Package`: its name must be fully qualified
pub fn validate_package(pkg: &Package) -> FieldErrors {
    let mut all_errs = FieldErrors::new();

    all_errs.append(validate_package_name(
        &pkg.metadata.name,
        &FieldPath::new("metadata").child("name"),
    ));

    all_errs
}

/// Validate a package name found at `field`
pub fn validate_package_name(pkg_name: &str, field: &FieldPath) -> FieldErrors {
    is_fully_qualified_name(field, pkg_name)
}

/// Validate a `PackageVersion`
///
/// Runs, in order: the `spec.packageName` rules, the `spec.version` rule and
/// the `metadata.name` prefix rule.
pub fn validate_package_version(pv: &PackageVersion) -> FieldErrors {
    let mut all_errs = FieldErrors::new();

    all_errs.append(validate_package_version_spec_package_name(
        &pv.spec.package_name,
        &FieldPath::from_fields(["spec", "packageName"]),
    ));

    all_errs.append(validate_package_version_spec_version(
        &pv.spec.version,
        &FieldPath::from_fields(["spec", "version"]),
    ));

    all_errs.append(validate_package_version_name(
        &pv.metadata.name,
        &pv.spec.package_name,
        &FieldPath::new("metadata").child("name"),
    ));

    all_errs
}

/// `metadata.name` must be `spec.packageName` followed by `.` and a suffix
pub fn validate_package_version_name(
    pv_name: &str,
    pkg_name: &str,
    field: &FieldPath,
) -> FieldErrors {
    let mut all_errs = FieldErrors::new();

    let prefixed = pv_name
        .strip_prefix(pkg_name)
        .is_some_and(|rest| rest.starts_with('.'));
    if !prefixed {
        all_errs.push(FieldError::invalid(field, pv_name, VERSION_NAME_PREFIX_MESSAGE));
    }

    all_errs
}

/// `spec.version` must not be empty
pub fn validate_package_version_spec_version(version: &str, field: &FieldPath) -> FieldErrors {
    let mut all_errs = FieldErrors::new();

    if version.is_empty() {
        all_errs.push(FieldError::required(field, "cannot be empty"));
    }

    all_errs
}

/// `spec.packageName` must be present and a valid package name
///
/// An empty name is reported twice: once here and once by the name grammar.
pub fn validate_package_version_spec_package_name(name: &str, field: &FieldPath) -> FieldErrors {
    let mut all_errs = FieldErrors::new();

    if name.is_empty() {
        all_errs.push(FieldError::required(field, "can not be empty"));
    }

    all_errs.append(validate_package_name(name, field));
    all_errs
}

/// Resources that can check their own naming rules
pub trait Validate {
    /// Run every rule and return all violations in order
    fn validate(&self) -> FieldErrors;
}

impl Validate for Package {
    fn validate(&self) -> FieldErrors {
        validate_package(self)
    }
}

impl Validate for PackageVersion {
    fn validate(&self) -> FieldErrors {
        validate_package_version(self)
    }
}

impl Validate for Document {
    fn validate(&self) -> FieldErrors {
        match self {
            Document::Package(pkg) => validate_package(pkg),
            Document::PackageVersion(pv) => validate_package_version(pv),
        }
    }
}
