use crate::body::Body;
use futures::future::BoxFuture;
use http::{Request, Response};
use std::future::Future;
use std::sync::Arc;

/// Something that turns a request into a complete response.
///
/// Implemented by [`Redirector`](crate::redirect::Redirector) and the stock
/// [`Fallback`](crate::fallback::Fallback)s, so any of them can stand in as the
/// fallback of a redirector, or be mounted directly with [`serve`](crate::http::serve).
pub trait Handler<B>: Send + Sync {
    fn handle(&self, req: Request<B>) -> BoxFuture<'_, Response<Body>>;
}

impl<B, H> Handler<B> for Arc<H>
where
    H: Handler<B> + ?Sized,
{
    fn handle(&self, req: Request<B>) -> BoxFuture<'_, Response<Body>> {
        (**self).handle(req)
    }
}

/// Handler backed by a closure, see [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(F);

/// Wrap an async closure as a [`Handler`].
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn(f)
}

impl<B, F, Fut> Handler<B> for HandlerFn<F>
where
    F: Fn(Request<B>) -> Fut + Send + Sync,
    Fut: Future<Output = Response<Body>> + Send + 'static,
{
    fn handle(&self, req: Request<B>) -> BoxFuture<'_, Response<Body>> {
        Box::pin((self.0)(req))
    }
}
