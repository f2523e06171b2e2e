//! The (method, path) pair an endpoint is addressed by.

use crate::http::HttpMethod;

/// HTTP method plus URL path for one endpoint.
///
/// Any string is accepted as a path, including the empty string, which
/// addresses the base URL itself.
///
/// ```
/// use route_sugar::{HttpMethod, Route};
///
/// let route = Route::get("/users/devxoul/repos");
/// assert_eq!(route.method(), HttpMethod::Get);
/// assert_eq!(route.path(), "/users/devxoul/repos");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    method: HttpMethod,
    path: String,
}

impl Route {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn head(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Head, path)
    }

    pub fn options(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Options, path)
    }

    pub fn trace(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Trace, path)
    }

    pub fn connect(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Connect, path)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
