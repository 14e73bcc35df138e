//! Field paths locating a value inside a resource
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field, e.g. `spec`
    Field(String),
    /// A list index, e.g. `[0]`
    Index(usize),
}

/// Immutable location of a field, e.g. `spec.packageName`
///
/// Builder methods return new paths; the receiver is never modified, so a
/// parent path can be shared between sibling rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Create a path rooted at a single field
    pub fn new<S: Into<String>>(root: S) -> Self {
        Self {
            segments: vec![PathSegment::Field(root.into())],
        }
    }

    /// Create a path from a sequence of field names
    ///
    /// ```
    /// use pkgcheck_schemas::FieldPath;
    ///
    /// let path = FieldPath::from_fields(["spec", "packageName"]);
    /// assert_eq!(path.to_string(), "spec.packageName");
    /// assert_eq!(path, FieldPath::new("spec").child("packageName"));
    /// ```
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: fields
                .into_iter()
                .map(|f| PathSegment::Field(f.into()))
                .collect(),
        }
    }

    /// Create a child path with an extra field segment
    pub fn child<S: Into<String>>(&self, field: S) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(field.into()));
        Self { segments }
    }

    /// Create a child path for a list index
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Error returned when a path string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid field path '{path}': {reason}")]
pub struct ParsePathError {
    pub path: String,
    pub reason: String,
}

impl FromStr for FieldPath {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| ParsePathError {
            path: s.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        for part in s.split('.') {
            let (field, mut rest) = match part.find('[') {
                Some(pos) => (&part[..pos], &part[pos..]),
                None => (part, ""),
            };
            if field.is_empty() {
                return Err(fail("empty field name"));
            }
            segments.push(PathSegment::Field(field.to_string()));

            while !rest.is_empty() {
                let close = rest.find(']').ok_or_else(|| fail("unclosed index"))?;
                let index = rest[1..close]
                    .parse::<usize>()
                    .map_err(|_| fail("index is not a number"))?;
                segments.push(PathSegment::Index(index));
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(fail("unexpected text after index"));
                }
            }
        }

        Ok(Self { segments })
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
