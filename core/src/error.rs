//! Error types for endpoint resolution and request building.
//!
//! # Design
//! Only `InvalidUrl` can come out of resolving an endpoint, and only when an
//! endpoint overrides its URL with a string that does not parse. The other
//! variants belong to the steps around resolution: turning parameters into a
//! request body and parsing method tokens.

use thiserror::Error;

/// Errors returned while resolving endpoints and building requests.
#[derive(Debug, Error)]
pub enum SugarError {
    /// An endpoint supplied an absolute URL that could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The parameters could not be serialized into a JSON body.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A method token outside the known set.
    #[error("unknown HTTP method: {0}")]
    UnknownMethod(String),
}
