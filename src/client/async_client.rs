//! High-level asynchronous Jenkins client.

use super::{CRUMB_ISSUER_PATH, DEFAULT_USER_AGENT, Inner, RequestObserver, SCRIPT_TEXT_PATH};
use crate::{
    Auth, BodySnippetConfig, Bound, Codec, Error, RequestHookContext, api,
    codec::Format,
    transport::{
        async_transport::{DynAsyncTransport, ReqwestAsync},
        middleware::HookLayer,
        request::{NotFound, Request, RequestBody, Response},
    },
    types::Crumb,
    util::{
        script::strip_result_line,
        url::{PathKind, PathResolver, normalize_base_url},
    },
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use std::{sync::Arc, time::Duration};
use url::Url;

/// Configures and constructs [`Client`].
pub struct ClientBuilder {
    base_url: Url,
    auth: Option<Auth>,
    insecure: bool,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    no_proxy: bool,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
    codec: Codec,
    request_hook: Option<crate::RequestHook>,
    transport: Option<DynAsyncTransport>,
}

impl ClientBuilder {
    /// Create a builder with opinionated defaults.
    fn try_new(base: impl AsRef<str>) -> Result<Self, Error> {
        let base_url = normalize_base_url(base.as_ref())?;
        Ok(Self {
            base_url,
            auth: None,
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            no_proxy: false,
            default_headers: HeaderMap::new(),
            body_snippet: BodySnippetConfig::default(),
            codec: Codec::default(),
            request_hook: None,
            transport: None,
        })
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// HTTP Basic credentials; a blank `user` leaves the client anonymous.
    pub fn auth_basic(mut self, user: impl Into<String>, token: impl Into<String>) -> Self {
        self.auth = Some(Auth::basic(user, token));
        self
    }

    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.insecure = yes;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    pub fn connect_timeout(mut self, value: Duration) -> Self {
        self.connect_timeout = value;
        self
    }

    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers.extend(headers);
        self
    }

    pub fn capture_body_snippet(mut self, enabled: bool) -> Self {
        self.body_snippet.enabled = enabled;
        self
    }

    pub fn max_body_snippet_bytes(mut self, max_bytes: usize) -> Self {
        self.body_snippet.max_bytes = max_bytes;
        self
    }

    pub fn codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    /// Add a hook invoked for every request, crumb fetches included.
    pub fn request_hook<F>(mut self, hook: F) -> Self
    where
        F: for<'a> Fn(RequestHookContext<'a>) -> Result<(), Error> + Send + Sync + 'static,
    {
        self.request_hook = Some(Arc::new(hook));
        self
    }

    /// Replace the `reqwest` transport.
    pub fn transport(mut self, transport: DynAsyncTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let resolver = PathResolver::new(&self.base_url)?;

        let mut transport: DynAsyncTransport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestAsync::try_new(
                self.insecure,
                &self.user_agent,
                self.timeout,
                self.connect_timeout,
                self.no_proxy,
            )?),
        };

        if let Some(hook) = self.request_hook {
            transport = Arc::new(HookLayer::new(transport, hook));
        }

        Ok(Client {
            inner: Arc::new(Inner {
                base: self.base_url,
                resolver,
                auth: self.auth,
                timeout: self.timeout,
                default_headers: self.default_headers,
                body_snippet: self.body_snippet,
                codec: self.codec,
                transport,
            }),
        })
    }
}

/// Async client. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner<DynAsyncTransport>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base.as_str())
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder(base: impl AsRef<str>) -> Result<ClientBuilder, Error> {
        ClientBuilder::try_new(base)
    }

    pub fn new(base: impl AsRef<str>) -> Result<Self, Error> {
        Self::builder(base)?.build()
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base
    }

    #[must_use]
    pub fn system(&self) -> api::SystemService {
        api::SystemService::new(self.clone())
    }

    #[must_use]
    pub fn jobs(&self) -> api::JobsService {
        api::JobsService::new(self.clone())
    }

    #[must_use]
    pub fn views(&self) -> api::ViewsService {
        api::ViewsService::new(self.clone())
    }

    #[must_use]
    pub fn computers(&self) -> api::ComputersService {
        api::ComputersService::new(self.clone())
    }

    #[must_use]
    pub fn labels(&self) -> api::LabelsService {
        api::LabelsService::new(self.clone())
    }

    /// `GET <path>/api/json` as text. `None` on 404.
    pub async fn get_text(&self, path: &str) -> Result<Option<String>, Error> {
        Ok(self
            .execute(Request::get_json(path))
            .await?
            .map(Response::into_text))
    }

    /// `GET <path>/api/json`, decoded as XML or JSON by `Content-Type`. `None` on 404.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<Bound<T, Self>>, Error> {
        self.fetch(Request::get_json(path)).await
    }

    /// `GET <path>` without the `api/json` suffix, decoded like [`get`](Self::get).
    pub async fn get_xml<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<Bound<T, Self>>, Error> {
        self.fetch(Request::get_raw(path)).await
    }

    /// `GET <path>` without the `api/json` suffix, as text. `None` on 404.
    pub async fn get_raw_text(&self, path: &str) -> Result<Option<String>, Error> {
        Ok(self
            .execute(Request::get_raw(path))
            .await?
            .map(Response::into_text))
    }

    /// Download `path` (relative or absolute) as bytes. `None` on 404.
    pub async fn get_bytes(&self, path: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self
            .execute(Request::get_raw(path))
            .await?
            .map(|resp| resp.body))
    }

    /// Crumb-protected `POST <path>` with `data` as the JSON body.
    pub async fn post<D, T>(&self, path: &str, data: &D) -> Result<Option<Bound<T, Self>>, Error>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.inner.codec.encode_json(data)?;
        let req = Request::post(path, PathKind::Raw)
            .body(RequestBody::with_content_type(body, "application/json"));
        let req = self.protect(req).await?;
        self.fetch(req).await
    }

    /// Crumb-protected `POST <path>` without a body; the response is discarded.
    pub async fn post_empty(&self, path: &str) -> Result<(), Error> {
        let req = self.protect(Request::post(path, PathKind::Raw)).await?;
        self.execute(req).await?;
        Ok(())
    }

    /// Crumb-protected `POST <path>` of an XML document. `None` on 404.
    pub async fn post_xml(&self, path: &str, xml: &str) -> Result<Option<String>, Error> {
        let req = Request::post(path, PathKind::Raw)
            .body(RequestBody::with_content_type(xml, "application/xml"));
        let req = self.protect(req).await?;
        Ok(self.execute(req).await?.map(Response::into_text))
    }

    /// Form-encoded `POST <path>` without a crumb. A 404 is an error here.
    pub async fn post_form<K, V>(&self, path: &str, fields: &[(K, V)]) -> Result<String, Error>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let req = Request::post(path, PathKind::Raw)
            .not_found(NotFound::Error)
            .form_pairs(
                fields
                    .iter()
                    .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned())),
            );
        Ok(self
            .execute(req)
            .await?
            .map(Response::into_text)
            .unwrap_or_default())
    }

    /// Run a Groovy script through the script console and return its output.
    ///
    /// The trailing `Result: [...]` line the console appends is removed.
    pub async fn execute_script(&self, script: &str) -> Result<Option<String>, Error> {
        let req = Request::post(SCRIPT_TEXT_PATH, PathKind::Raw).form_pairs([("script", script)]);
        let req = self.protect(req).await?;
        Ok(self
            .execute(req)
            .await?
            .map(|resp| strip_result_line(resp.into_text())))
    }

    async fn protect(&self, req: Request) -> Result<Request, Error> {
        let crumb = self
            .execute(Request::get_json(CRUMB_ISSUER_PATH))
            .await?
            .map(|resp| self.inner.decode::<Crumb>(&resp))
            .transpose()?;
        super::with_crumb(req, crumb.as_ref())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        req: Request,
    ) -> Result<Option<Bound<T, Self>>, Error> {
        let Some(resp) = self.execute(req).await? else {
            return Ok(None);
        };
        let data = self.inner.decode(&resp)?;
        Ok(Some(Bound::new(data, self.clone())))
    }

    pub(crate) async fn get_xml_document<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, Error> {
        self.execute(Request::get_raw(path))
            .await?
            .map(|resp| self.inner.decode_as(&resp, Format::Xml))
            .transpose()
    }

    pub(crate) fn encode_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Error> {
        self.inner.codec.encode_json(value)
    }

    async fn execute(&self, req: Request) -> Result<Option<Response>, Error> {
        let transport_req = self.inner.prepare(&req)?;
        let url = transport_req.url.clone();

        let observer = RequestObserver::new(&transport_req);
        let sent = self.inner.transport.send(transport_req);
        #[cfg(feature = "tracing")]
        let sent = tracing::Instrument::instrument(sent, observer.span.clone());

        let outcome = sent
            .await
            .and_then(|resp| self.inner.finish(&req, url, resp));
        observer.record(&outcome);
        outcome
    }
}
