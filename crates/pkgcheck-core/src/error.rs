//! Error types for the pkgcheck core library
//!
//! Decoding a manifest into a typed resource is the only fallible operation in
//! this crate. Validation outcomes are data, see `pkgcheck-schemas`.
//!
//! Copyright (c) 2025 pkgcheck authors
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for resource decoding
#[derive(Error, Debug)]
pub enum Error {
    /// The document carries no `kind` and no override was supplied
    #[error("Document has no 'kind' field")]
    MissingKind,

    /// The document is some other resource kind
    #[error("Unsupported document kind: {kind}")]
    UnsupportedKind { kind: String },

    /// The document shape did not match the resource
    #[error("Failed to decode {kind}: {message}")]
    Decode {
        kind: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a serde failure for a specific resource kind
    pub fn decode(kind: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            kind: kind.into(),
            message: source.to_string(),
            source,
        }
    }
}
