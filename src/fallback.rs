use crate::body::{self, Body};
use crate::handler::Handler;
use futures::future::{self, BoxFuture};
use http::{Request, Response, StatusCode};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::fs::File;

/// Stock handlers for requests that no rule matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Empty response with this status.
    Status(StatusCode),
    /// The contents of this file, whatever the request.
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseFallbackError {
    #[error("invalid status code: {0}")]
    Status(#[from] http::status::InvalidStatusCode),
    #[error("empty file path")]
    EmptyPath,
    #[error("expected status://<code> or file://<path>, got {0:?}")]
    Scheme(String),
}

impl FromStr for Fallback {
    type Err = ParseFallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(code) = s.strip_prefix("status://") {
            Ok(Fallback::Status(StatusCode::from_str(code)?))
        } else if let Some(path) = s.strip_prefix("file://") {
            match path {
                "" => Err(ParseFallbackError::EmptyPath),
                path => Ok(Fallback::File(PathBuf::from(path))),
            }
        } else {
            Err(ParseFallbackError::Scheme(s.to_owned()))
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Status(status) => write!(f, "status://{}", status.as_u16()),
            Fallback::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback::Status(StatusCode::NOT_FOUND)
    }
}

fn status(status: StatusCode) -> Response<Body> {
    let mut resp = Response::new(body::empty());
    *resp.status_mut() = status;
    resp
}

impl<B> Handler<B> for Fallback {
    fn handle(&self, req: Request<B>) -> BoxFuture<'_, Response<Body>> {
        let uri = req.uri().clone();
        drop(req);
        match self {
            Fallback::Status(code) => {
                log::info!("{} -> {}", uri, code);
                Box::pin(future::ready(status(*code)))
            }
            Fallback::File(path) => Box::pin(async move {
                match File::open(path).await {
                    Ok(file) => {
                        log::info!("{} -> {}", uri, path.display());
                        Response::new(body::from_file(file))
                    }
                    Err(e) => {
                        log::warn!("{} -> [file error] {} : {}", uri, path.display(), e);
                        status(StatusCode::NOT_FOUND)
                    }
                }
            }),
        }
    }
}
