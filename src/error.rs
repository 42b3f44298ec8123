use crate::codec::Format;
use http::{Method, StatusCode};
use std::{error::Error as StdError, fmt, time::Duration};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

/// Controls how much of a failing response body is kept on errors.
#[derive(Debug, Clone, Copy)]
pub struct BodySnippetConfig {
    pub enabled: bool,
    pub max_bytes: usize,
}

impl Default for BodySnippetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_bytes: 4096,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    Auth,
    NotFound,
    Conflict,
    RateLimited,
    Api,
    Transport,
    Decode,
    Encode,
    InvalidConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

/// A response whose status fell outside `[200, 400)`.
#[derive(Debug, Clone)]
pub struct HttpError {
    pub status: StatusCode,
    /// Reason phrase for `status`, when the code has a registered one.
    pub reason: Option<&'static str>,
    pub method: Method,
    /// Sanitized URL: no query/fragment/userinfo.
    pub url: Box<Url>,
    pub message: Option<Box<str>>,
    pub request_id: Option<Box<str>>,
    pub body_snippet: Option<Box<str>>,
}

impl HttpError {
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// All errors returned by the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    Auth(HttpError),

    #[error("{0}")]
    NotFound(HttpError),

    #[error("{0}")]
    Conflict(HttpError),

    #[error("{error}")]
    RateLimited {
        error: HttpError,
        retry_after: Option<Duration>,
    },

    #[error("{0}")]
    Api(HttpError),

    #[error("Transport error during {method} {path}: {source}")]
    Transport {
        method: Method,
        path: Box<str>,
        kind: TransportErrorKind,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Decode error ({format} body, HTTP {status}) during {method} {path}: {source}")]
    Decode {
        status: StatusCode,
        method: Method,
        path: Box<str>,
        format: Format,
        request_id: Option<Box<str>>,
        body_snippet: Option<Box<str>>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Encode error ({format} body): {source}")]
    Encode {
        format: Format,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(_) => ErrorKind::Auth,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Api(_) => ErrorKind::Api,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// The HTTP error carried by this error, if the server answered with one.
    #[must_use]
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            Self::Auth(e) | Self::NotFound(e) | Self::Conflict(e) | Self::Api(e) => Some(e),
            Self::RateLimited { error, .. } => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            other => other.http().map(|e| e.status),
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        self.http().and_then(|e| e.reason)
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Decode { request_id, .. } => request_id.as_deref(),
            other => other.http().and_then(|e| e.request_id.as_deref()),
        }
    }

    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether repeating the same call might succeed. The client itself never retries.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Api(e) => matches!(
                e.status,
                StatusCode::BAD_GATEWAY
                    | StatusCode::SERVICE_UNAVAILABLE
                    | StatusCode::GATEWAY_TIMEOUT
            ),
            Self::Transport { kind, .. } => matches!(
                kind,
                TransportErrorKind::Timeout | TransportErrorKind::Connect
            ),
            _ => false,
        }
    }

    pub(crate) fn from_http(error: HttpError, retry_after: Option<Duration>) -> Self {
        match error.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth(error),
            StatusCode::NOT_FOUND => Self::NotFound(error),
            StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED => Self::Conflict(error),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited { error, retry_after },
            _ => Self::Api(error),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into().into_boxed_str(),
            source: None,
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status.as_u16())?;
        if let Some(reason) = self.reason {
            write!(f, " {reason}")?;
        }
        write!(f, " ({} {})", self.method, self.path())?;
        if let Some(message) = self.message.as_deref() {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = self.request_id.as_deref() {
            write!(f, " [request-id: {request_id}]")?;
        }
        Ok(())
    }
}
