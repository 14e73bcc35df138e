//! Shared utilities for command handlers

use crate::config::is_yaml;
use crate::error::{Error, Result};
use pkgcheck_core::{Document, ResourceKind};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load every document from a manifest file
///
/// YAML files may hold several `---`-separated documents; empty documents are
/// skipped. A JSON file holds one document or an array of documents.
pub fn load_documents(path: &Path, kind: Option<ResourceKind>) -> Result<Vec<Document>> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let values = if is_yaml(path) {
        parse_yaml_documents(path, &content)?
    } else {
        parse_json_documents(path, &content)?
    };

    values
        .into_iter()
        .map(|value| {
            match kind {
                Some(kind) => Document::from_value_as(value, kind),
                None => Document::from_value(value),
            }
            .map_err(|source| Error::Document {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

fn parse_yaml_documents(path: &Path, content: &str) -> Result<Vec<Value>> {
    let mut values = Vec::new();

    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
            message: e.to_string(),
        })?;
        if !value.is_null() {
            values.push(value);
        }
    }

    Ok(values)
}

fn parse_json_documents(path: &Path, content: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content).map_err(|e| Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: "JSON".to_string(),
        message: e.to_string(),
    })?;

    Ok(match value {
        Value::Array(items) => items,
        single => vec![single],
    })
}
