//! Resource types for package metadata
//!
//! These mirror the wire shape of the packaging API (`apiVersion`, `kind`,
//! `metadata`, `spec`). Absent string fields decode to empty strings so that
//! presence rules are reported by the validator rather than the parser.
//! Explicit nulls (`version: ~`, or a bare `version:` in YAML) decode the same
//! way.
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// API group/version the package resources are served under
pub const API_VERSION: &str = "data.packaging.carvel.dev/v1alpha1";

/// Object metadata shared by every resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    /// Resource identifier
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Namespace the resource lives in, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A package: the named unit that versions are published under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    #[serde(deserialize_with = "null_as_default")]
    pub api_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub spec: PackageSpec,
}

/// Descriptive package fields (not inspected by the naming rules)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

/// One published version of a package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageVersion {
    #[serde(deserialize_with = "null_as_default")]
    pub api_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub spec: PackageVersionSpec,
}

/// Version-specific fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageVersionSpec {
    /// Name of the `Package` this version belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub package_name: String,

    /// Opaque version token
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<String>,
}

/// Decode a field, treating an explicit null like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Package {
    /// Create a package with the given `metadata.name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: ResourceKind::Package.to_string(),
            metadata: ObjectMeta {
                name: name.into(),
                namespace: None,
            },
            spec: PackageSpec::default(),
        }
    }
}

impl PackageVersion {
    /// Create a package version from its name, package reference and version
    pub fn new(
        name: impl Into<String>,
        package_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: ResourceKind::PackageVersion.to_string(),
            metadata: ObjectMeta {
                name: name.into(),
                namespace: None,
            },
            spec: PackageVersionSpec {
                package_name: package_name.into(),
                version: version.into(),
                release_notes: None,
            },
        }
    }
}

/// Resource kinds the validator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Package,
    PackageVersion,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Package => "Package",
            ResourceKind::PackageVersion => "PackageVersion",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Package" => Ok(ResourceKind::Package),
            "PackageVersion" => Ok(ResourceKind::PackageVersion),
            other => Err(Error::UnsupportedKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// A decoded manifest document of either supported kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Package(Package),
    PackageVersion(PackageVersion),
}

impl Document {
    /// Decode a document, dispatching on its `kind` field
    pub fn from_value(value: Value) -> Result<Self> {
        let kind: ResourceKind = value
            .get("kind")
            .and_then(Value::as_str)
            .filter(|kind| !kind.is_empty())
            .ok_or(Error::MissingKind)?
            .parse()?;
        Self::from_value_as(value, kind)
    }

    /// Decode a document as a specific kind, ignoring its `kind` field
    pub fn from_value_as(value: Value, kind: ResourceKind) -> Result<Self> {
        match kind {
            ResourceKind::Package => serde_json::from_value(value)
                .map(Document::Package)
                .map_err(|e| Error::decode(kind.as_str(), e)),
            ResourceKind::PackageVersion => serde_json::from_value(value)
                .map(Document::PackageVersion)
                .map_err(|e| Error::decode(kind.as_str(), e)),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Document::Package(_) => ResourceKind::Package,
            Document::PackageVersion(_) => ResourceKind::PackageVersion,
        }
    }

    /// The document's `metadata.name`
    pub fn name(&self) -> &str {
        match self {
            Document::Package(pkg) => &pkg.metadata.name,
            Document::PackageVersion(pv) => &pv.metadata.name,
        }
    }
}

impl From<Package> for Document {
    fn from(pkg: Package) -> Self {
        Document::Package(pkg)
    }
}

impl From<PackageVersion> for Document {
    fn from(pv: PackageVersion) -> Self {
        Document::PackageVersion(pv)
    }
}
