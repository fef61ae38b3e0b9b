use crate::handler::Handler;
use crate::tcp;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use std::convert::Infallible;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve `handler` on every connection accepted from `listener`.
///
/// Only returns if the listener itself fails.
pub async fn serve<H>(listener: TcpListener, handler: H) -> Result<(), io::Error>
where
    H: Handler<Incoming> + 'static,
{
    let handler = Arc::new(handler);

    loop {
        let tcp = tcp::accept(&listener).await?;
        let io = TokioIo::new(tcp);

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let serve = service_fn(move |req| {
                let handler = Arc::clone(&handler);
                async move { Ok::<_, Infallible>(handler.handle(req).await) }
            });

            if let Err(e) = auto::Builder::new(TokioExecutor::new())
                .serve_connection(io, serve)
                .await
            {
                log::error!("Error serving connection: {}", e);
            }
        });
    }
}
