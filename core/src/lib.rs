//! Declarative HTTP endpoint definitions.
//!
//! # Overview
//! Describe an API as a type implementing [`Endpoint`], usually an enum with
//! one variant per endpoint. Each variant yields a [`Route`] (method plus
//! path), optional [`Parameters`] (values plus an encoding strategy) and
//! optional headers. Resolution turns that description into the URL, method,
//! parameters, encoding and headers a transport needs.
//!
//! # Design
//! - Host-does-IO: the crate builds [`HttpRequest`] values and never touches
//!   the network. The caller executes the request and handles the response.
//! - Every derived property is recomputed from the endpoint value on each
//!   call; there is no shared state, so endpoints resolve on any thread.
//! - The only intrinsic failure is an endpoint overriding its URL with a
//!   string that does not parse.

pub mod client;
pub mod encoding;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod parameters;
pub mod route;

pub use client::RequestFactory;
pub use encoding::{Destination, JsonEncoding, ParameterEncoding, UrlEncoding};
pub use endpoint::{append_path, Endpoint, Headers, ResolvedRequest};
pub use error::SugarError;
pub use http::{HttpMethod, HttpRequest, Task};
pub use parameters::{Associate, ParameterMap, Parameters};
pub use route::Route;
