//! Parameter encoding strategies.
//!
//! # Design
//! The set of strategies is closed: URL encoding (query string or form body)
//! and JSON encoding (body). Each strategy is a small value type with an
//! `encode` method that writes a parameter map into an `HttpRequest`;
//! `ParameterEncoding` is the sum of them and dispatches with a `match`.
//!
//! URL encoding follows the conventions most web frameworks understand:
//! keys are emitted in sorted order, nested objects become `key[sub]=value`,
//! arrays become one `key[]=value` pair per element, booleans are `1`/`0` and
//! null becomes an empty value.

use serde_json::Value;
use tracing::trace;
use url::form_urlencoded;

use crate::error::SugarError;
use crate::http::{HttpMethod, HttpRequest};
use crate::parameters::ParameterMap;

const CONTENT_TYPE: &str = "Content-Type";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Where URL-encoded parameters are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Destination {
    /// Query string for GET, HEAD and DELETE; form body for everything else.
    #[default]
    MethodDependent,
    QueryString,
    HttpBody,
}

/// Percent-encoded `key=value` pairs in the query string or a form body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlEncoding {
    pub destination: Destination,
}

impl UrlEncoding {
    pub fn query_string() -> Self {
        Self {
            destination: Destination::QueryString,
        }
    }

    pub fn http_body() -> Self {
        Self {
            destination: Destination::HttpBody,
        }
    }

    fn encodes_in_url(&self, method: HttpMethod) -> bool {
        match self.destination {
            Destination::MethodDependent => {
                matches!(method, HttpMethod::Get | HttpMethod::Head | HttpMethod::Delete)
            }
            Destination::QueryString => true,
            Destination::HttpBody => false,
        }
    }

    /// Write `parameters` into the query string or body of `request`.
    ///
    /// An empty map leaves the request untouched.
    pub fn encode(&self, request: &mut HttpRequest, parameters: &ParameterMap) -> Result<(), SugarError> {
        let query = query(parameters);
        if query.is_empty() {
            return Ok(());
        }
        trace!(count = parameters.len(), destination = ?self.destination, "url-encoding parameters");

        if self.encodes_in_url(request.method) {
            let combined = match request.url.query() {
                Some(existing) if !existing.is_empty() => format!("{existing}&{query}"),
                _ => query,
            };
            request.url.set_query(Some(&combined));
        } else {
            request.set_default_header(CONTENT_TYPE, FORM_CONTENT_TYPE);
            request.body = Some(query);
        }
        Ok(())
    }
}

/// The parameter map serialized as a JSON object in the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonEncoding {
    pub pretty: bool,
}

impl JsonEncoding {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn encode(&self, request: &mut HttpRequest, parameters: &ParameterMap) -> Result<(), SugarError> {
        trace!(count = parameters.len(), pretty = self.pretty, "json-encoding parameters");
        let body = if self.pretty {
            serde_json::to_string_pretty(parameters)?
        } else {
            serde_json::to_string(parameters)?
        };
        request.set_default_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        request.body = Some(body);
        Ok(())
    }
}

/// One of the supported parameter encoding strategies.
///
/// Defaults to method-dependent URL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterEncoding {
    Url(UrlEncoding),
    Json(JsonEncoding),
}

impl ParameterEncoding {
    pub fn encode(&self, request: &mut HttpRequest, parameters: &ParameterMap) -> Result<(), SugarError> {
        match self {
            ParameterEncoding::Url(encoding) => encoding.encode(request, parameters),
            ParameterEncoding::Json(encoding) => encoding.encode(request, parameters),
        }
    }
}

impl Default for ParameterEncoding {
    fn default() -> Self {
        ParameterEncoding::Url(UrlEncoding::default())
    }
}

impl From<UrlEncoding> for ParameterEncoding {
    fn from(encoding: UrlEncoding) -> Self {
        ParameterEncoding::Url(encoding)
    }
}

impl From<JsonEncoding> for ParameterEncoding {
    fn from(encoding: JsonEncoding) -> Self {
        ParameterEncoding::Json(encoding)
    }
}

/// Serialize `parameters` as `k=v&k=v` with form escaping.
fn query(parameters: &ParameterMap) -> String {
    let mut components = Vec::new();
    for (key, value) in sorted(parameters) {
        query_components(key, value, &mut components);
    }
    components
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn query_components(key: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (nested_key, nested) in sorted(map) {
                query_components(&format!("{key}[{nested_key}]"), nested, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                query_components(&format!("{key}[]"), item, out);
            }
        }
        Value::Bool(flag) => out.push((key.to_string(), if *flag { "1" } else { "0" }.to_string())),
        Value::Null => out.push((key.to_string(), String::new())),
        Value::Number(number) => out.push((key.to_string(), number.to_string())),
        Value::String(text) => out.push((key.to_string(), text.clone())),
    }
}

fn sorted(map: &ParameterMap) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

fn escape(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
