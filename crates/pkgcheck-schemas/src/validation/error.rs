//! Field-level validation errors and their ordered aggregate
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

use crate::validation::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A mandatory value is absent
    Required,
    /// A value is present but malformed or inconsistent
    Invalid,
}

impl ErrorKind {
    /// Human-readable description used when rendering errors
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::Required => "Required value",
            ErrorKind::Invalid => "Invalid value",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A single violation located at a field path
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Where it went wrong
    pub field: FieldPath,
    /// The offending value; absent for `Required`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_value: Option<String>,
    /// Human-readable detail, may be empty
    pub detail: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)?;
        if let Some(value) = &self.bad_value {
            write!(f, ": {:?}", value)?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl FieldError {
    /// A mandatory value is missing at `field`
    pub fn required<D: Into<String>>(field: &FieldPath, detail: D) -> Self {
        Self {
            kind: ErrorKind::Required,
            field: field.clone(),
            bad_value: None,
            detail: detail.into(),
        }
    }

    /// `value` at `field` violates a rule
    pub fn invalid<V, D>(field: &FieldPath, value: V, detail: D) -> Self
    where
        V: Into<String>,
        D: Into<String>,
    {
        Self {
            kind: ErrorKind::Invalid,
            field: field.clone(),
            bad_value: Some(value.into()),
            detail: detail.into(),
        }
    }
}

/// Ordered collection of field errors; empty means the input was accepted
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct FieldErrors {
    /// Errors in the order the checks ran
    pub errors: Vec<FieldError>,
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "no validation errors"),
            [only] => write!(f, "{}", only),
            many => {
                write!(f, "{} validation errors occurred:", many.len())?;
                for (i, error) in many.iter().enumerate() {
                    write!(f, "\n{}. {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

impl FieldErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the end of the list
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Move all errors from `other` to the end of this list
    pub fn append(&mut self, mut other: FieldErrors) {
        self.errors.append(&mut other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Errors of a single kind, in order
    pub fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &FieldError> + '_ {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Errors reported at exactly `field`, in order
    pub fn at<'a>(&'a self, field: &'a FieldPath) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| &e.field == field)
    }

    /// Keep at most `max` errors (0 keeps everything)
    pub fn truncate(&mut self, max: usize) {
        if max > 0 {
            self.errors.truncate(max);
        }
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldError> for FieldErrors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_path() -> FieldPath {
        FieldPath::from_fields(["spec", "version"])
    }

    #[test]
    fn test_required_display() {
        let err = FieldError::required(&version_path(), "cannot be empty");
        assert_eq!(err.to_string(), "spec.version: Required value: cannot be empty");
        assert_eq!(err.bad_value, None);

        let bare = FieldError::required(&FieldPath::new("metadata").child("name"), "");
        assert_eq!(bare.to_string(), "metadata.name: Required value");
    }

    #[test]
    fn test_invalid_display_quotes_value() {
        let err = FieldError::invalid(
            &FieldPath::new("metadata").child("name"),
            "x",
            "must begin with <spec.packageName> + '.'",
        );
        assert_eq!(
            err.to_string(),
            "metadata.name: Invalid value: \"x\": must begin with <spec.packageName> + '.'"
        );
    }

    #[test]
    fn test_aggregate_preserves_order() {
        let mut errors = FieldErrors::new();
        errors.push(FieldError::required(&version_path(), "first"));
        errors.append(FieldErrors::from(FieldError::invalid(&version_path(), "v", "second")));

        let details: Vec<_> = errors.iter().map(|e| e.detail.as_str()).collect();
        assert_eq!(details, ["first", "second"]);
        assert_eq!(errors.of_kind(ErrorKind::Invalid).count(), 1);
        assert_eq!(errors.at(&version_path()).count(), 2);
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());
        let errors = FieldErrors::from(FieldError::required(&version_path(), ""));
        assert_eq!(errors.clone().into_result().unwrap_err(), errors);
    }

    #[test]
    fn test_truncate_zero_is_unlimited() {
        let mut errors: FieldErrors = (0..5)
            .map(|i| FieldError::invalid(&version_path(), i.to_string(), ""))
            .collect();
        errors.truncate(0);
        assert_eq!(errors.len(), 5);
        errors.truncate(2);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_multi_error_display() {
        let errors: FieldErrors = vec![
            FieldError::required(&version_path(), "a"),
            FieldError::required(&version_path(), "b"),
        ]
        .into();
        let rendered = errors.to_string();
        assert!(rendered.starts_with("2 validation errors occurred:"));
        assert!(rendered.contains("\n2. spec.version: Required value: b"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = FieldError::invalid(&version_path(), "", "cannot be empty");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["field"], "spec.version");
        assert_eq!(value["kind"], "Invalid");
        assert_eq!(value["badValue"], "");

        let required = serde_json::to_value(FieldError::required(&version_path(), "")).unwrap();
        assert!(required.get("badValue").is_none());
    }
}
