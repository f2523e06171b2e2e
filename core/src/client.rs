//! Stateless request builder for any `Endpoint`.
//!
//! # Design
//! `RequestFactory` holds only the headers every request should carry and
//! never changes after construction. `build` resolves an endpoint and encodes
//! its parameters into an `HttpRequest`. The caller executes the actual HTTP
//! round-trip, keeping this crate deterministic and free of I/O dependencies.

use crate::endpoint::{Endpoint, ResolvedRequest};
use crate::error::SugarError;
use crate::http::HttpRequest;

/// Turns endpoint definitions into plain `HttpRequest` values.
///
/// Default headers are applied first. Headers an endpoint supplies replace
/// defaults of the same name, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct RequestFactory {
    default_headers: Vec<(String, String)>,
}

impl RequestFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.default_headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
        self.default_headers.push((name, value.into()));
        self
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    pub fn resolve<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<ResolvedRequest, SugarError> {
        endpoint.resolve()
    }

    pub fn build<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<HttpRequest, SugarError> {
        self.resolve(endpoint)?
            .into_http_request_with(&self.default_headers)
    }
}
