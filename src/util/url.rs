use crate::Error;
use url::{Url, form_urlencoded};

const JSON_API: &str = "api/json";

/// How a caller-supplied path is turned into a request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathKind {
    /// Append `api/json` so the server answers with JSON.
    JsonApi,
    /// Use the path as given (e.g. `config.xml`, form endpoints).
    Raw,
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw).map_err(|err| Error::InvalidConfig {
        message: "invalid base_url".into(),
        source: Some(Box::new(err)),
    })?;

    if url.cannot_be_a_base() {
        return Err(Error::invalid_config("base_url must be a hierarchical URL"));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::invalid_config(
            "base_url must not include query or fragment",
        ));
    }

    let path = url.path();
    if path != "/" && !path.ends_with('/') {
        url.set_path(&format!("{path}/"));
    }
    Ok(url)
}

/// Resolves request paths under the context path of the configured server.
#[derive(Debug, Clone)]
pub(crate) struct PathResolver {
    root: Url,
    context: String,
}

impl PathResolver {
    pub(crate) fn new(base: &Url) -> Result<Self, Error> {
        let root = base.join("/").map_err(|err| Error::InvalidConfig {
            message: "base_url has no server root".into(),
            source: Some(Box::new(err)),
        })?;
        let mut context = base.path().to_owned();
        if !context.ends_with('/') {
            context.push('/');
        }
        Ok(Self { root, context })
    }

    pub(crate) fn context(&self) -> &str {
        &self.context
    }

    pub(crate) fn resolve(&self, path: &str, kind: PathKind) -> Result<Url, Error> {
        let full = match kind {
            PathKind::JsonApi => json_api_path(&self.context, path),
            PathKind::Raw => context_path(&self.context, path),
        };
        self.root.join(&full).map_err(|err| Error::InvalidConfig {
            message: format!("invalid request path `{path}`").into_boxed_str(),
            source: Some(Box::new(err)),
        })
    }
}

pub(crate) fn is_absolute(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Join two path fragments with exactly one `/` between them.
pub(crate) fn url_join(left: &str, right: &str) -> String {
    let right = right.trim_start_matches('/');
    if left.ends_with('/') {
        format!("{left}{right}")
    } else {
        format!("{left}/{right}")
    }
}

/// Place a relative path under the context; absolute URLs pass through.
pub(crate) fn context_path(context: &str, path: &str) -> String {
    if is_absolute(path) {
        path.to_owned()
    } else {
        url_join(context, path)
    }
}

/// Like [`context_path`], then add `api/json` ahead of any query string.
pub(crate) fn json_api_path(context: &str, path: &str) -> String {
    let path = context_path(context, path);
    match path.split_once('?') {
        Some((base, query)) => format!("{}?{query}", url_join(base, JSON_API)),
        None => url_join(&path, JSON_API),
    }
}

/// Percent-encode one user-supplied path segment.
///
/// Jenkins rejects `+` for spaces in paths, so spaces always become `%20`.
pub(crate) fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub(crate) fn sanitize_url_for_error(url: &Url) -> Url {
    let mut safe = url.clone();
    safe.set_query(None);
    safe.set_fragment(None);
    let _ = safe.set_username("");
    let _ = safe.set_password(None);
    safe
}
