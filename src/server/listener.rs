use std::io;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tracing::info;

/// The listening socket shared by every worker.
///
/// `accept_connection` takes `&self`, so workers hold the listener behind an
/// `Arc` and all wait on it at once; each pending connection is handed to
/// exactly one of them.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Binds `0.0.0.0:port` with address reuse and an accept backlog of
    /// `backlog`. Must be called from within a tokio runtime.
    pub fn bind(port: u16, backlog: usize) -> anyhow::Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let socket = TcpSocket::new_v4().context("failed to create socket")?;
        socket.set_reuseaddr(true).context("failed to set SO_REUSEADDR")?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {}", addr))?;

        let backlog = u32::try_from(backlog).unwrap_or(u32::MAX);
        let inner = socket
            .listen(backlog)
            .with_context(|| format!("failed to listen on {}", addr))?;

        info!("Listening on {}", inner.local_addr()?);
        Ok(Self { inner })
    }

    /// Waits for the next client.
    pub async fn accept_connection(&self) -> io::Result<(TcpStream, SocketAddr)> {
        self.inner.accept().await
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }
}
