use crate::util::url::PathKind;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header::CONTENT_TYPE};
use url::Url;

/// What a `404 Not Found` response means for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NotFound {
    /// The entity is absent; the verb returns `None`.
    Absent,
    /// Treated like any other failing status.
    Error,
}

#[derive(Clone, Debug)]
pub(crate) struct RequestBody {
    pub(crate) bytes: Vec<u8>,
    pub(crate) content_type: Option<HeaderValue>,
}

impl RequestBody {
    pub(crate) fn with_content_type(bytes: impl Into<Vec<u8>>, content_type: &'static str) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: Some(HeaderValue::from_static(content_type)),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) kind: PathKind,
    pub(crate) not_found: NotFound,
    pub(crate) form: Vec<(String, String)>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<RequestBody>,
}

impl Request {
    fn new(method: Method, path: impl Into<String>, kind: PathKind) -> Self {
        Self {
            method,
            path: path.into(),
            kind,
            not_found: NotFound::Absent,
            form: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// `GET` with `api/json` appended to the path.
    pub(crate) fn get_json(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, PathKind::JsonApi)
    }

    /// `GET` of the path as given.
    pub(crate) fn get_raw(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, PathKind::Raw)
    }

    pub(crate) fn post(path: impl Into<String>, kind: PathKind) -> Self {
        Self::new(Method::POST, path, kind)
    }

    pub(crate) fn not_found(mut self, policy: NotFound) -> Self {
        self.not_found = policy;
        self
    }

    pub(crate) fn form_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.body = None;
        self.form
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub(crate) fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub(crate) fn body(mut self, body: RequestBody) -> Self {
        self.form.clear();
        self.body = Some(body);
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Response {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Vec<u8>,
}

impl Response {
    pub(crate) fn content_type(&self) -> Option<&HeaderValue> {
        self.headers.get(CONTENT_TYPE)
    }

    pub(crate) fn into_text(self) -> String {
        match String::from_utf8(self.body) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}
