//! Validation module for package metadata resources
//!
//! This module provides the naming and consistency rules for `Package` and
//! `PackageVersion` resources:
//!
//! - **path**: immutable field paths such as `spec.packageName`
//! - **error**: `Required`/`Invalid` field errors and their ordered aggregate
//! - **names**: DNS-1123 subdomain and fully-qualified-name grammar
//! - **packages**: the per-resource rules
//!
//! All validators are pure: they read their arguments and return errors as
//! data. Surfacing the errors (logging, rejecting, printing) is the caller's job.
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod names;
pub mod packages;
pub mod path;

// Re-export commonly used types
pub use error::{ErrorKind, FieldError, FieldErrors};
pub use names::{is_dns1123_subdomain, is_fully_qualified_name};
pub use packages::{
    validate_package, validate_package_name, validate_package_version,
    validate_package_version_name, validate_package_version_spec_package_name,
    validate_package_version_spec_version, Validate,
};
pub use path::{FieldPath, PathSegment};

use pkgcheck_core::{Document, ResourceKind};
use serde::{Deserialize, Serialize};

/// Validation configuration for batch operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Whether to stop after the first rejected document
    pub fail_fast: bool,
    /// Maximum number of errors to keep per document (0 = unlimited)
    pub max_errors: usize,
}

impl ValidationConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to keep per document
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    /// Where the document came from (file path, request id, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Position of the document in its batch
    pub index: usize,
    pub kind: ResourceKind,
    /// The document's `metadata.name`
    pub name: String,
    /// True when no rule was violated
    pub accepted: bool,
    /// Number of errors found, before any truncation
    pub total_errors: usize,
    /// Errors kept after applying `max_errors`
    pub errors: FieldErrors,
}

impl DocumentReport {
    /// Validate a single document
    pub fn new(index: usize, document: &Document, config: &ValidationConfig) -> Self {
        let mut errors = document.validate();
        let total_errors = errors.len();
        errors.truncate(config.max_errors);

        Self {
            source: None,
            index,
            kind: document.kind(),
            name: document.name().to_string(),
            accepted: total_errors == 0,
            total_errors,
            errors,
        }
    }

    /// Attach a source description
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Number of errors dropped by `max_errors`
    pub fn truncated(&self) -> usize {
        self.total_errors - self.errors.len()
    }
}

/// Batch validation for multiple documents
///
/// Every document gets a report unless `fail_fast` is set, in which case the
/// batch stops after the first rejected document.
pub fn validate_documents(documents: &[Document], config: &ValidationConfig) -> Vec<DocumentReport> {
    let mut reports = Vec::with_capacity(documents.len());

    for (i, document) in documents.iter().enumerate() {
        let report = DocumentReport::new(i, document, config);
        let rejected = !report.accepted;
        reports.push(report);

        if rejected && config.fail_fast {
            break;
        }
    }

    reports
}
