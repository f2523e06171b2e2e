//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests as plain data. The crate resolves
//! endpoints into `HttpRequest` values without ever touching the network; the
//! caller (host) is responsible for executing the actual I/O and for making
//! sense of whatever comes back.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::encoding::ParameterEncoding;
use crate::error::SugarError;
use crate::parameters::ParameterMap;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
    Connect,
}

impl HttpMethod {
    /// The upper-case method token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = SugarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            "TRACE" => Ok(HttpMethod::Trace),
            "CONNECT" => Ok(HttpMethod::Connect),
            other => Err(SugarError::UnknownMethod(other.to_string())),
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `RequestFactory::build` or `ResolvedRequest::into_http_request`.
/// The caller is responsible for executing this request against the network.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// First value of the header called `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Replace every header called `name` with a single `name: value` entry.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Add `name: value` only when no header called `name` exists yet.
    pub(crate) fn set_default_header(&mut self, name: &str, value: &str) {
        if self.header(name).is_none() {
            self.headers.push((name.to_string(), value.to_string()));
        }
    }
}

/// What an endpoint sends along with its URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// No parameters and no body.
    Plain,
    /// Parameters serialized by `encoding` into the query string or body.
    Parameters {
        parameters: ParameterMap,
        encoding: ParameterEncoding,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, Url::parse("https://api.github.com").unwrap())
    }

    #[test]
    fn method_tokens_round_trip_through_from_str() {
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
            HttpMethod::Head,
            HttpMethod::Options,
            HttpMethod::Trace,
            HttpMethod::Connect,
        ] {
            assert_eq!(method.as_str().parse::<HttpMethod>().unwrap(), method);
        }
    }

    #[test]
    fn lower_case_method_is_rejected() {
        let err = "get".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, SugarError::UnknownMethod(ref m) if m == "get"));
    }

    #[test]
    fn method_displays_as_token() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut req = request();
        req.headers.push(("Content-Type".to_string(), "text/plain".to_string()));
        assert_eq!(req.header("content-type"), Some("text/plain"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn set_header_replaces_existing_value() {
        let mut req = request();
        req.headers.push(("accept".to_string(), "text/html".to_string()));
        req.set_header("Accept", "application/json");
        assert_eq!(req.headers, vec![("Accept".to_string(), "application/json".to_string())]);
    }

    #[test]
    fn default_header_keeps_existing_value() {
        let mut req = request();
        req.set_header("Content-Type", "text/plain");
        req.set_default_header("content-type", "application/json");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.header("Content-Type"), Some("text/plain"));
    }
}
