//! HTTP I/O layer.
//!
//! * `UreqBlocking` / `ReqwestAsync` respect the `no_proxy` flag to ignore
//!   system proxy environment variables (HTTP_PROXY, HTTPS_PROXY, etc.).
//! * Both keep a cookie store so the session a crumb is scoped to survives
//!   between the crumb fetch and the request that carries it.

use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::time::Duration;
use url::Url;

#[cfg(feature = "async")]
pub mod async_transport;
#[cfg(feature = "blocking")]
pub mod blocking_transport;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
pub mod middleware;
pub(crate) mod request;

/// Fully resolved request handed to a transport.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub form: Vec<(String, String)>,
    pub body: Option<TransportBody>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct TransportBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<HeaderValue>,
}

/// Raw response as read off the wire; status is not interpreted here.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}
