use std::io;
use tokio::net::{TcpListener, TcpStream};

/// Which side an accept error belongs to.
enum AppliesTo {
    Connection,
    Listener,
}

fn applies_to(e: &io::Error) -> AppliesTo {
    match e.kind() {
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::ConnectionReset => AppliesTo::Connection,
        _ => AppliesTo::Listener,
    }
}

/// Next client connection, skipping ones that died before we got to them.
pub async fn accept(listener: &TcpListener) -> Result<TcpStream, io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, _addr)) => {
                stream.set_nodelay(true)?;
                return Ok(stream);
            }
            Err(e) => match applies_to(&e) {
                AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                AppliesTo::Listener => return Err(e),
            },
        }
    }
}
