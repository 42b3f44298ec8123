use crate::Error;
use http::{HeaderMap, HeaderValue, Method};
use std::sync::Arc;
use url::Url;

/// The outgoing request as the hook sees it.
///
/// Credentials, default headers and, on protected `POST`s, the crumb header
/// are already in `headers`. The crumb fetch itself passes through the hook
/// as a plain `GET`.
pub struct RequestHookContext<'a> {
    pub method: &'a Method,
    /// Resolved against the context path, query included.
    pub url: &'a Url,
    pub headers: &'a mut HeaderMap,
    /// Form fields, e.g. `script` for the script console. Empty when a raw body is sent.
    pub form: &'a [(String, String)],
    pub body: Option<&'a [u8]>,
    pub content_type: Option<&'a HeaderValue>,
}

impl RequestHookContext<'_> {
    /// Path of the request URL, without the query.
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// First form field named `name`.
    #[must_use]
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Called once per request, after the crumb is attached and before sending.
/// An `Err` aborts the request with that error.
pub type RequestHook =
    Arc<dyn for<'a> Fn(RequestHookContext<'a>) -> Result<(), Error> + Send + Sync + 'static>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_path_and_form_fields() {
        let url = Url::parse("https://ci.example.com/jenkins/scriptText?x=1").unwrap();
        let method = Method::POST;
        let mut headers = HeaderMap::new();
        let form = vec![("script".to_owned(), "println 1".to_owned())];
        let ctx = RequestHookContext {
            method: &method,
            url: &url,
            headers: &mut headers,
            form: &form,
            body: None,
            content_type: None,
        };

        assert_eq!(ctx.path(), "/jenkins/scriptText");
        assert_eq!(ctx.form_value("script"), Some("println 1"));
        assert_eq!(ctx.form_value("missing"), None);
    }
}
