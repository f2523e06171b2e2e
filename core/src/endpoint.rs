//! Declarative endpoint definitions and their resolution into requests.
//!
//! # Design
//! An API is described by one type, usually an enum with a variant per
//! endpoint, implementing [`Endpoint`]. Only `base_url` and `route` are
//! required. Every other property has a default derived from those two plus
//! the optional `params` and `headers`, and any of them can be overridden for
//! the variants that need something different (for example a variant that
//! carries a complete absolute URL).
//!
//! Properties are recomputed on every call. Nothing is cached and nothing is
//! mutated, so resolving the same value twice yields the same request.

use std::collections::BTreeMap;

use tracing::debug;
use url::Url;

use crate::encoding::ParameterEncoding;
use crate::error::SugarError;
use crate::http::{HttpMethod, HttpRequest, Task};
use crate::parameters::{ParameterMap, Parameters};
use crate::route::Route;

/// Header names mapped to values.
pub type Headers = BTreeMap<String, String>;

/// A declarative description of one or more HTTP endpoints.
///
/// ```
/// use route_sugar::{Associate, Endpoint, JsonEncoding, Parameters, Route};
/// use serde_json::json;
/// use url::Url;
///
/// enum Api {
///     Me,
///     Login { username: String },
/// }
///
/// impl Endpoint for Api {
///     fn base_url(&self) -> Url {
///         Url::parse("https://api.example.com").unwrap()
///     }
///
///     fn route(&self) -> Route {
///         match self {
///             Api::Me => Route::get("/me"),
///             Api::Login { .. } => Route::post("/login"),
///         }
///     }
///
///     fn params(&self) -> Option<Parameters> {
///         match self {
///             Api::Me => None,
///             Api::Login { username } => {
///                 let values = json!({ "username": username });
///                 Some(JsonEncoding::default().with(values.as_object()?.clone()))
///             }
///         }
///     }
/// }
///
/// let resolved = Api::Me.resolve().unwrap();
/// assert_eq!(resolved.url.as_str(), "https://api.example.com/me");
/// assert!(resolved.parameters.is_none());
/// ```
pub trait Endpoint {
    /// URL every path of this API is appended to.
    fn base_url(&self) -> Url;

    /// Method and path of this endpoint.
    fn route(&self) -> Route;

    fn path(&self) -> String {
        self.route().path().to_string()
    }

    fn method(&self) -> HttpMethod {
        self.route().method()
    }

    /// `base_url` with `path` appended, or `base_url` itself for an empty path.
    fn default_url(&self) -> Url {
        let base_url = self.base_url();
        let path = self.path();
        if path.is_empty() {
            base_url
        } else {
            append_path(&base_url, &path)
        }
    }

    /// Final request URL. Override to bypass `base_url` and `path` entirely.
    fn url(&self) -> Result<Url, SugarError> {
        Ok(self.default_url())
    }

    fn params(&self) -> Option<Parameters> {
        None
    }

    fn parameters(&self) -> Option<ParameterMap> {
        self.params().map(|params| params.into_parts().1)
    }

    fn parameter_encoding(&self) -> ParameterEncoding {
        self.params()
            .map(|params| params.encoding())
            .unwrap_or_default()
    }

    fn headers(&self) -> Option<Headers> {
        None
    }

    fn task(&self) -> Task {
        match self.parameters() {
            Some(parameters) => Task::Parameters {
                parameters,
                encoding: self.parameter_encoding(),
            },
            None => Task::Plain,
        }
    }

    /// Collect URL, method, parameters, encoding and headers in one value.
    ///
    /// Fails only when `url` fails.
    fn resolve(&self) -> Result<ResolvedRequest, SugarError> {
        let request = ResolvedRequest {
            url: self.url()?,
            method: self.method(),
            parameters: self.parameters(),
            encoding: self.parameter_encoding(),
            headers: self.headers(),
        };
        debug!(method = %request.method, url = %request.url, "resolved endpoint");
        Ok(request)
    }
}

/// Append `component` to the path of `base`, separated by exactly one `/`.
///
/// Query and fragment of `base` are preserved.
pub fn append_path(base: &Url, component: &str) -> Url {
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        component.trim_start_matches('/')
    );
    url.set_path(&joined);
    url
}

/// Everything a transport needs to issue the request for one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub url: Url,
    pub method: HttpMethod,
    pub parameters: Option<ParameterMap>,
    pub encoding: ParameterEncoding,
    pub headers: Option<Headers>,
}

impl ResolvedRequest {
    pub fn task(&self) -> Task {
        match &self.parameters {
            Some(parameters) => Task::Parameters {
                parameters: parameters.clone(),
                encoding: self.encoding,
            },
            None => Task::Plain,
        }
    }

    /// Apply headers and encode the parameters into a plain `HttpRequest`.
    pub fn into_http_request(self) -> Result<HttpRequest, SugarError> {
        self.into_http_request_with(&[])
    }

    /// Like `into_http_request`, starting from `default_headers`. Endpoint
    /// headers replace defaults of the same name.
    pub(crate) fn into_http_request_with(
        self,
        default_headers: &[(String, String)],
    ) -> Result<HttpRequest, SugarError> {
        let ResolvedRequest {
            url,
            method,
            parameters,
            encoding,
            headers,
        } = self;

        let mut request = HttpRequest::new(method, url);
        for (name, value) in default_headers {
            request.set_header(name, value);
        }
        for (name, value) in headers.iter().flatten() {
            request.set_header(name, value);
        }
        if let Some(parameters) = &parameters {
            encoding.encode(&mut request, parameters)?;
        }
        Ok(request)
    }
}
