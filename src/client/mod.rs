//! Client implementations (blocking + optional async).
//!
//! Both flavours run every request through the same [`Inner`] pipeline:
//! resolve the path, attach credentials and headers, hand the request to a
//! transport, then apply the status policy of the verb.

#[cfg(feature = "async")]
pub mod async_client;
#[cfg(feature = "blocking")]
pub mod blocking_client;

#[cfg(feature = "async")]
pub use async_client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use blocking_client::{BlockingClient, BlockingClientBuilder};

use crate::{
    Auth, BodySnippetConfig, Codec, Error, HttpError,
    codec::Format,
    transport::{
        TransportBody, TransportRequest, TransportResponse,
        request::{NotFound, Request, Response},
    },
    types::Crumb,
    util::{
        diagnostics,
        url::{PathResolver, sanitize_url_for_error},
    },
};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime};
use url::Url;

pub(crate) const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) const CRUMB_ISSUER_PATH: &str = "/crumbIssuer";
pub(crate) const SCRIPT_TEXT_PATH: &str = "/scriptText";

/// State shared by every clone of a client.
pub(crate) struct Inner<T> {
    pub(crate) base: Url,
    pub(crate) resolver: PathResolver,
    pub(crate) auth: Option<Auth>,
    pub(crate) timeout: Duration,
    pub(crate) default_headers: HeaderMap,
    pub(crate) body_snippet: BodySnippetConfig,
    pub(crate) codec: Codec,
    pub(crate) transport: T,
}

impl<T> Inner<T> {
    /// Resolve the URL and merge headers: defaults, then credentials, then per-request.
    pub(crate) fn prepare(&self, req: &Request) -> Result<TransportRequest, Error> {
        let url = self.resolver.resolve(&req.path, req.kind)?;

        let mut headers = self.default_headers.clone();
        if let Some(auth) = self.auth.as_ref().filter(|auth| !auth.is_anonymous()) {
            auth.apply(&mut headers)?;
        }
        headers.extend(req.headers.clone());

        Ok(TransportRequest {
            method: req.method.clone(),
            url,
            headers,
            form: req.form.clone(),
            body: req.body.clone().map(|body| TransportBody {
                bytes: body.bytes,
                content_type: body.content_type,
            }),
            timeout: self.timeout,
        })
    }

    /// Apply the status policy: `[200, 400)` succeeds, 404 may mean "absent",
    /// everything else becomes an [`Error`].
    pub(crate) fn finish(
        &self,
        req: &Request,
        url: Url,
        resp: TransportResponse,
    ) -> Result<Option<Response>, Error> {
        if resp.status == StatusCode::NOT_FOUND && req.not_found == NotFound::Absent {
            return Ok(None);
        }

        if !(200..400).contains(&resp.status.as_u16()) {
            let message = diagnostics::extract_message(&resp.body).map(|msg| {
                diagnostics::redact_text(msg.into(), self.auth.as_ref()).into_boxed_str()
            });
            let http_error = HttpError {
                status: resp.status,
                reason: resp.status.canonical_reason(),
                method: req.method.clone(),
                url: Box::new(sanitize_url_for_error(&url)),
                message,
                request_id: diagnostics::request_id(&resp.headers),
                body_snippet: diagnostics::body_snippet(
                    &resp.body,
                    self.body_snippet,
                    self.auth.as_ref(),
                ),
            };
            let retry_after = diagnostics::parse_retry_after(&resp.headers, SystemTime::now());
            return Err(Error::from_http(http_error, retry_after));
        }

        Ok(Some(Response {
            method: req.method.clone(),
            url,
            status: resp.status,
            headers: resp.headers,
            body: resp.body,
        }))
    }

    /// Decode with the format the response declares.
    pub(crate) fn decode<D: DeserializeOwned>(&self, resp: &Response) -> Result<D, Error> {
        let format = self.codec.format_for(resp.content_type());
        self.decode_as(resp, format)
    }

    pub(crate) fn decode_as<D: DeserializeOwned>(
        &self,
        resp: &Response,
        format: Format,
    ) -> Result<D, Error> {
        self.codec
            .decode(format, &resp.body)
            .map_err(|source| Error::Decode {
                status: resp.status,
                method: resp.method.clone(),
                path: resp.url.path().to_string().into_boxed_str(),
                format,
                request_id: diagnostics::request_id(&resp.headers),
                body_snippet: diagnostics::body_snippet(
                    &resp.body,
                    self.body_snippet,
                    self.auth.as_ref(),
                ),
                source,
            })
    }
}

/// Add the crumb header when the server issued one.
pub(crate) fn with_crumb(req: Request, crumb: Option<&Crumb>) -> Result<Request, Error> {
    let Some(crumb) = crumb else {
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %req.path, "no crumb issuer; sending without crumb header");
        return Ok(req);
    };
    let (name, value) = crumb.header()?;
    Ok(req.header(name, value))
}

/// Per-request span, timing and metrics.
pub(crate) struct RequestObserver {
    #[cfg(any(feature = "tracing", feature = "metrics"))]
    start: std::time::Instant,
    #[cfg(feature = "metrics")]
    method: http::Method,
    #[cfg(feature = "metrics")]
    _pending: crate::transport::metrics::Pending,
    #[cfg(feature = "tracing")]
    pub(crate) span: tracing::Span,
}

impl RequestObserver {
    #[cfg_attr(
        not(any(feature = "tracing", feature = "metrics")),
        allow(unused_variables)
    )]
    pub(crate) fn new(req: &TransportRequest) -> Self {
        Self {
            #[cfg(any(feature = "tracing", feature = "metrics"))]
            start: std::time::Instant::now(),
            #[cfg(feature = "metrics")]
            method: req.method.clone(),
            #[cfg(feature = "metrics")]
            _pending: crate::transport::metrics::Pending::start(),
            #[cfg(feature = "tracing")]
            span: tracing::info_span!(
                "jenkins.request",
                http.method = %req.method,
                http.host = %req.url.host_str().unwrap_or_default(),
                http.path = %req.url.path(),
                http.status = tracing::field::Empty,
                request_id = tracing::field::Empty,
                latency_ms = tracing::field::Empty,
                error_kind = tracing::field::Empty,
            ),
        }
    }

    #[cfg_attr(
        not(any(feature = "tracing", feature = "metrics")),
        allow(unused_variables)
    )]
    pub(crate) fn record(&self, outcome: &Result<Option<Response>, Error>) {
        #[cfg(any(feature = "tracing", feature = "metrics"))]
        {
            let status = match outcome {
                Ok(Some(resp)) => Some(resp.status),
                Ok(None) => Some(StatusCode::NOT_FOUND),
                Err(err) => err.status(),
            };
            let elapsed = self.start.elapsed();

            #[cfg(feature = "metrics")]
            {
                use crate::transport::metrics::{Outcome, record};

                let outcome = match outcome {
                    Ok(Some(_)) => Outcome::Found,
                    Ok(None) => Outcome::Absent,
                    Err(err) => Outcome::Failed(err.kind()),
                };
                record(&self.method, status, outcome, elapsed);
            }

            #[cfg(feature = "tracing")]
            {
                use tracing::field;

                if let Some(status) = status {
                    self.span.record("http.status", status.as_u16() as i64);
                }
                if let Some(request_id) = match outcome {
                    Ok(Some(resp)) => diagnostics::request_id(&resp.headers),
                    Err(err) => err.request_id().map(Into::into),
                    Ok(None) => None,
                } {
                    self.span.record("request_id", field::display(request_id));
                }
                if let Err(err) = outcome {
                    self.span.record("error_kind", field::debug(err.kind()));
                }
                self.span.record("latency_ms", elapsed.as_millis() as i64);
            }
        }
    }
}
