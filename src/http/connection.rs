use std::sync::Arc;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::files::responder::StaticResponder;
use crate::files::store::{DiskStore, FileStore};
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

const READ_BUFFER_SIZE: usize = 4096;

pub struct Connection<T, S = DiskStore> {
    stream: T,
    buffer: BytesMut,
    state: ConnectionState,
    responder: Arc<StaticResponder<S>>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

/// Result of waiting for the next request on a connection.
enum Incoming {
    Request(Request),
    Malformed(ParseError),
    Closed,
}

impl<T, S> Connection<T, S>
where
    T: AsyncRead + AsyncWrite + Unpin,
    S: FileStore,
{
    pub fn new(stream: T, responder: Arc<StaticResponder<S>>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
            state: ConnectionState::Reading,
            responder,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Incoming::Request(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    Incoming::Malformed(e) => {
                        tracing::warn!(error = %e, "Rejecting malformed request");
                        let writer = ResponseWriter::new(&Response::bad_request(), false);
                        self.state = ConnectionState::Writing(writer, false);
                    }
                    Incoming::Closed => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    tracing::info!(method = ?req.method, path = %req.path, "Request");

                    let response = self.responder.respond(&req.path).await;
                    let keep_alive = req.keep_alive();

                    let writer = if req.method == Method::HEAD {
                        ResponseWriter::head(&response, keep_alive)
                    } else {
                        ResponseWriter::new(&response, keep_alive)
                    };
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Incoming> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Incoming::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data
                }

                Err(e) => return Ok(Incoming::Malformed(e)),
            }

            self.buffer.reserve(READ_BUFFER_SIZE);
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if !self.buffer.is_empty() {
                    tracing::debug!(
                        pending = self.buffer.len(),
                        "Client closed connection mid-request"
                    );
                }
                return Ok(Incoming::Closed);
            }
        }
    }
}
