use crate::body::{self, Body};
use crate::handler::Handler;
use crate::rules::{RuleParseError, Rules};
use futures::future::{self, BoxFuture};
use http::{header, HeaderValue, Request, Response, StatusCode, Uri};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Redirects requests whose path exactly matches a rule, and hands everything
/// else to `fallback`.
pub struct Redirector<H> {
    rules: Rules,
    fallback: H,
}

impl<H> Redirector<H> {
    pub fn new(rules: Rules, fallback: H) -> Self {
        Self { rules, fallback }
    }

    pub fn from_yaml(yaml: &[u8], fallback: H) -> Result<Self, RuleParseError> {
        Ok(Self::new(Rules::from_yaml(yaml)?, fallback))
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Rules are keyed by decoded paths; fall back to the raw path if it isn't UTF-8 once decoded.
    fn lookup(&self, uri: &Uri) -> Option<&HeaderValue> {
        let raw = uri.path();
        let path = percent_decode_str(raw)
            .decode_utf8()
            .unwrap_or(Cow::Borrowed(raw));
        self.rules.get(&path)
    }
}

impl<B, H> Handler<B> for Redirector<H>
where
    H: Handler<B>,
{
    fn handle(&self, req: Request<B>) -> BoxFuture<'_, Response<Body>> {
        match self.lookup(req.uri()) {
            Some(location) => {
                log::info!("{} -> {:?}", req.uri(), location);
                Box::pin(future::ready(found(location.clone())))
            }
            None => {
                log::debug!("{} -> [fallback]", req.uri());
                self.fallback.handle(req)
            }
        }
    }
}

/// Bare `302 Found`; unlike some servers, no HTML link body is sent along with it.
fn found(location: HeaderValue) -> Response<Body> {
    let mut resp = Response::new(body::empty());
    *resp.status_mut() = StatusCode::FOUND;
    resp.headers_mut().insert(header::LOCATION, location);
    resp
}
