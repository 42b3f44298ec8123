//! Runs the user's [`RequestHook`](crate::RequestHook) right before a request hits the wire.

use crate::transport::{TransportRequest, TransportResponse};
use crate::{Error, RequestHook, RequestHookContext};

#[cfg(feature = "async")]
use crate::transport::async_transport::AsyncTransport;
#[cfg(feature = "blocking")]
use crate::transport::blocking_transport::BlockingTransport;

/// Transport wrapper that lets a hook inspect the request and edit its headers.
///
/// The hook also sees the crumb fetch, since that is an ordinary `GET`.
#[derive(Clone)]
pub struct HookLayer<T> {
    inner: T,
    hook: RequestHook,
}

impl<T> HookLayer<T> {
    pub fn new(inner: T, hook: RequestHook) -> Self {
        Self { inner, hook }
    }

    fn run(&self, req: &mut TransportRequest) -> Result<(), Error> {
        let body = req.body.as_ref();
        (self.hook)(RequestHookContext {
            method: &req.method,
            url: &req.url,
            headers: &mut req.headers,
            form: &req.form,
            body: body.map(|b| b.bytes.as_slice()),
            content_type: body.and_then(|b| b.content_type.as_ref()),
        })
    }
}

#[cfg(feature = "blocking")]
impl<T: BlockingTransport> BlockingTransport for HookLayer<T> {
    fn send(&self, mut req: TransportRequest) -> Result<TransportResponse, Error> {
        self.run(&mut req)?;
        self.inner.send(req)
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<T: AsyncTransport> AsyncTransport for HookLayer<T> {
    async fn send(&self, mut req: TransportRequest) -> Result<TransportResponse, Error> {
        self.run(&mut req)?;
        self.inner.send(req).await
    }
}
