//! Name grammar: DNS-1123 subdomains and fully qualified names
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FieldError, FieldErrors};
use crate::validation::path::FieldPath;
use regex::Regex;
use std::sync::OnceLock;

/// Maximum total length of a DNS-1123 subdomain
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

/// Maximum length of a single dot-delimited label
pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;

/// Minimum number of dot-separated segments in a fully qualified name
pub const FULLY_QUALIFIED_NAME_MIN_SEGMENTS: usize = 3;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";

const DNS1123_SUBDOMAIN_ERROR: &str = "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";

/// Detail reported when a name has too few segments
pub const SEGMENT_COUNT_MESSAGE: &str =
    "should be a domain with at least three segments separated by dots";

static DNS1123_SUBDOMAIN_REGEX: OnceLock<Regex> = OnceLock::new();

fn dns1123_subdomain_fmt() -> String {
    format!("{0}(\\.{0})*", DNS1123_LABEL_FMT)
}

fn dns1123_subdomain_regex() -> &'static Regex {
    DNS1123_SUBDOMAIN_REGEX.get_or_init(|| {
        Regex::new(&format!("^{}$", dns1123_subdomain_fmt()))
            .expect("DNS-1123 subdomain pattern is a valid regex")
    })
}

/// Check `value` against DNS-1123 subdomain syntax
///
/// Returns the list of syntax problems; an empty list means `value` is a valid
/// subdomain.
///
/// ```
/// use pkgcheck_schemas::is_dns1123_subdomain;
///
/// assert!(is_dns1123_subdomain("pkg.example.com").is_empty());
/// assert!(!is_dns1123_subdomain("Pkg.example.com").is_empty());
/// ```
pub fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errs = Vec::new();

    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errs.push(format!(
            "must be no more than {} characters",
            DNS1123_SUBDOMAIN_MAX_LENGTH
        ));
    }

    if value.split('.').any(|label| label.len() > DNS1123_LABEL_MAX_LENGTH) {
        errs.push(format!(
            "each part must be no more than {} characters",
            DNS1123_LABEL_MAX_LENGTH
        ));
    }

    if !dns1123_subdomain_regex().is_match(value) {
        errs.push(format!(
            "{} (e.g. 'example.com', regex used for validation is '{}')",
            DNS1123_SUBDOMAIN_ERROR,
            dns1123_subdomain_fmt()
        ));
    }

    errs
}

/// Check that `name` is a DNS-1123 subdomain with at least three segments
///
/// An empty name yields a single `Required` error and nothing else. Otherwise
/// the syntax check and the segment check both run, so a short malformed name
/// reports two `Invalid` errors.
pub fn is_fully_qualified_name(field: &FieldPath, name: &str) -> FieldErrors {
    let mut all_errs = FieldErrors::new();

    if name.is_empty() {
        all_errs.push(FieldError::required(field, ""));
        return all_errs;
    }

    let syntax_errs = is_dns1123_subdomain(name);
    if !syntax_errs.is_empty() {
        all_errs.push(FieldError::invalid(field, name, syntax_errs.join(",")));
    }

    if name.split('.').count() < FULLY_QUALIFIED_NAME_MIN_SEGMENTS {
        all_errs.push(FieldError::invalid(field, name, SEGMENT_COUNT_MESSAGE));
    }

    all_errs
}
