//! High-level blocking Jenkins client.

use super::{CRUMB_ISSUER_PATH, DEFAULT_USER_AGENT, Inner, RequestObserver, SCRIPT_TEXT_PATH};
use crate::{
    Auth, BodySnippetConfig, Bound, Codec, Error, RequestHookContext, api,
    codec::Format,
    transport::{
        blocking_transport::{DynBlockingTransport, UreqBlocking},
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

/// Configures and constructs [`BlockingClient`].
pub struct BlockingClientBuilder {
    base_url: Url,
    auth: Option<Auth>,
    insecure: bool,
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    read_timeout: Duration,
    no_proxy: bool,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
    codec: Codec,
    request_hook: Option<crate::RequestHook>,
    transport: Option<DynBlockingTransport>,
}

impl BlockingClientBuilder {
    fn try_new(base: impl AsRef<str>) -> Result<Self, Error> {
        let base_url = normalize_base_url(base.as_ref())?;
        Ok(Self {
            base_url,
            auth: None,
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
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

    /// Override the default `User-Agent` header.
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

    pub fn read_timeout(mut self, value: Duration) -> Self {
        self.read_timeout = value;
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

    /// Replace the `ureq` transport, e.g. with a recording fake.
    pub fn transport(mut self, transport: DynBlockingTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<BlockingClient, Error> {
        let resolver = PathResolver::new(&self.base_url)?;

        let mut transport: DynBlockingTransport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(UreqBlocking::try_new(
                self.insecure,
                &self.user_agent,
                self.timeout,
                self.connect_timeout,
                self.read_timeout,
                self.no_proxy,
            )?),
        };

        if let Some(hook) = self.request_hook {
            transport = Arc::new(HookLayer::new(transport, hook));
        }

        Ok(BlockingClient {
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

/// Blocking client. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<Inner<DynBlockingTransport>>,
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("base_url", &self.inner.base.as_str())
            .finish_non_exhaustive()
    }
}

impl BlockingClient {
    pub fn builder(base: impl AsRef<str>) -> Result<BlockingClientBuilder, Error> {
        BlockingClientBuilder::try_new(base)
    }

    pub fn new(base: impl AsRef<str>) -> Result<Self, Error> {
        Self::builder(base)?.build()
    }

    /// Base URL the client was built with (always ends with `/`).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base
    }

    #[must_use]
    pub fn system(&self) -> api::BlockingSystemService {
        api::BlockingSystemService::new(self.clone())
    }

    #[must_use]
    pub fn jobs(&self) -> api::BlockingJobsService {
        api::BlockingJobsService::new(self.clone())
    }

    #[must_use]
    pub fn views(&self) -> api::BlockingViewsService {
        api::BlockingViewsService::new(self.clone())
    }

    #[must_use]
    pub fn computers(&self) -> api::BlockingComputersService {
        api::BlockingComputersService::new(self.clone())
    }

    #[must_use]
    pub fn labels(&self) -> api::BlockingLabelsService {
        api::BlockingLabelsService::new(self.clone())
    }

    /// `GET <path>/api/json` as text. `None` on 404.
    pub fn get_text(&self, path: &str) -> Result<Option<String>, Error> {
        Ok(self.execute(Request::get_json(path))?.map(Response::into_text))
    }

    /// `GET <path>/api/json`, decoded as XML or JSON by `Content-Type`. `None` on 404.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<Bound<T, Self>>, Error> {
        self.fetch(Request::get_json(path))
    }

    /// `GET <path>` without the `api/json` suffix, decoded like [`get`](Self::get).
    pub fn get_xml<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<Bound<T, Self>>, Error> {
        self.fetch(Request::get_raw(path))
    }

    /// `GET <path>` without the `api/json` suffix, as text. `None` on 404.
    pub fn get_raw_text(&self, path: &str) -> Result<Option<String>, Error> {
        Ok(self.execute(Request::get_raw(path))?.map(Response::into_text))
    }

    /// Download `path` (relative or absolute) as bytes. `None` on 404.
    pub fn get_bytes(&self, path: &str) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.execute(Request::get_raw(path))?.map(|resp| resp.body))
    }

    /// Crumb-protected `POST <path>` with `data` as the JSON body.
    pub fn post<D, T>(&self, path: &str, data: &D) -> Result<Option<Bound<T, Self>>, Error>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.inner.codec.encode_json(data)?;
        let req = Request::post(path, PathKind::Raw)
            .body(RequestBody::with_content_type(body, "application/json"));
        let req = self.protect(req)?;
        self.fetch(req)
    }

    /// Crumb-protected `POST <path>` without a body; the response is discarded.
    pub fn post_empty(&self, path: &str) -> Result<(), Error> {
        let req = self.protect(Request::post(path, PathKind::Raw))?;
        self.execute(req)?;
        Ok(())
    }

    /// Crumb-protected `POST <path>` of an XML document. `None` on 404.
    pub fn post_xml(&self, path: &str, xml: &str) -> Result<Option<String>, Error> {
        let req = Request::post(path, PathKind::Raw)
            .body(RequestBody::with_content_type(xml, "application/xml"));
        let req = self.protect(req)?;
        Ok(self.execute(req)?.map(Response::into_text))
    }

    /// Form-encoded `POST <path>` without a crumb. A 404 is an error here.
    pub fn post_form<K, V>(&self, path: &str, fields: &[(K, V)]) -> Result<String, Error>
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
            .execute(req)?
            .map(Response::into_text)
            .unwrap_or_default())
    }

    /// Run a Groovy script through the script console and return its output.
    ///
    /// The trailing `Result: [...]` line the console appends is removed.
    pub fn execute_script(&self, script: &str) -> Result<Option<String>, Error> {
        let req = Request::post(SCRIPT_TEXT_PATH, PathKind::Raw).form_pairs([("script", script)]);
        let req = self.protect(req)?;
        Ok(self
            .execute(req)?
            .map(|resp| strip_result_line(resp.into_text())))
    }

    /// Fetch a fresh crumb and attach it.
    fn protect(&self, req: Request) -> Result<Request, Error> {
        let crumb = self
            .execute(Request::get_json(CRUMB_ISSUER_PATH))?
            .map(|resp| self.inner.decode::<Crumb>(&resp))
            .transpose()?;
        super::with_crumb(req, crumb.as_ref())
    }

    fn fetch<T: DeserializeOwned>(&self, req: Request) -> Result<Option<Bound<T, Self>>, Error> {
        let Some(resp) = self.execute(req)? else {
            return Ok(None);
        };
        let data = self.inner.decode(&resp)?;
        Ok(Some(Bound::new(data, self.clone())))
    }

    /// `GET <path>` decoded as XML whatever the declared `Content-Type`. `None` on 404.
    pub(crate) fn get_xml_document<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, Error> {
        self.execute(Request::get_raw(path))?
            .map(|resp| self.inner.decode_as(&resp, Format::Xml))
            .transpose()
    }

    pub(crate) fn encode_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Error> {
        self.inner.codec.encode_json(value)
    }

    fn execute(&self, req: Request) -> Result<Option<Response>, Error> {
        let transport_req = self.inner.prepare(&req)?;
        let url = transport_req.url.clone();

        let observer = RequestObserver::new(&transport_req);
        #[cfg(feature = "tracing")]
        let _enter = observer.span.enter();

        let outcome = self
            .inner
            .transport
            .send(transport_req)
            .and_then(|resp| self.inner.finish(&req, url, resp));
        observer.record(&outcome);
        outcome
    }
}
