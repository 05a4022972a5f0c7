use std::net::SocketAddr;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::parser::{head_ready, parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::static_files::StaticFiles;

/// Upper bound on how many bytes of a request are read. Anything past it
/// is left unread and the head is parsed as truncated.
pub const REQUEST_HEAD_LIMIT: usize = 2048;

const READ_CHUNK: usize = 1024;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    files: Arc<StaticFiles>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsed(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, files: Arc<StaticFiles>) -> Self {
        Self {
            stream,
            peer,
            files,
            buffer: BytesMut::with_capacity(REQUEST_HEAD_LIMIT),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request and response.
    ///
    /// There is no keep-alive: every path ends in `Closed` and the stream is
    /// dropped when the connection is.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Parsed(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Parsed(req) => {
                    let response = self.files.respond(req).await;

                    tracing::info!(
                        peer = %self.peer,
                        method = req.method.as_str(),
                        path = %req.path,
                        status = response.status.as_u16(),
                        user_agent = req.header("User-Agent").unwrap_or("-"),
                        "Request served"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request head and parses it.
    ///
    /// Returns `None` when the connection should be closed without a
    /// response: the client sent nothing but whitespace, or the request
    /// line was malformed.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        self.fill_buffer().await?;

        match parse_http_request(&self.buffer) {
            Ok(request) => Ok(Some(request)),
            Err(ParseError::Empty) => {
                tracing::debug!(peer = %self.peer, "Empty read, closing connection");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(peer = %self.peer, error = %e, "Dropping malformed request");
                Ok(None)
            }
        }
    }

    async fn fill_buffer(&mut self) -> anyhow::Result<()> {
        let mut temp = [0u8; READ_CHUNK];

        while self.buffer.len() < REQUEST_HEAD_LIMIT && !head_ready(&self.buffer) {
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed its side
                break;
            }

            let room = REQUEST_HEAD_LIMIT - self.buffer.len();
            self.buffer.extend_from_slice(&temp[..n.min(room)]);
        }

        Ok(())
    }
}
