// src/connection/handler.rs

//! Defines the `ConnectionHandler` which manages the full lifecycle of a client connection.

use crate::core::handler::Router;
use crate::core::protocol::{RespFrame, RespFrameCodec};
use crate::core::state::ServerState;
use crate::core::{Command, SlistDBError};
use futures::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::broadcast;
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

/// Manages the full lifecycle of a client connection.
pub struct ConnectionHandler {
    framed: Framed<TcpStream, RespFrameCodec>,
    addr: SocketAddr,
    state: Arc<ServerState>,
    session_id: u64,
    shutdown_rx: broadcast::Receiver<()>,
}

impl ConnectionHandler {
    /// Creates a new `ConnectionHandler`.
    pub fn new(
        socket: TcpStream,
        addr: SocketAddr,
        state: Arc<ServerState>,
        session_id: u64,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            framed: Framed::new(socket, RespFrameCodec),
            addr,
            state,
            session_id,
            shutdown_rx,
        }
    }

    /// The main event loop for the connection, handling incoming frames and signals.
    pub async fn run(&mut self) -> Result<(), SlistDBError> {
        loop {
            tokio::select! {
                // Prioritize the shutdown signal over pending frames.
                biased;
                _ = self.shutdown_rx.recv() => {
                    info!("Connection handler for {} received shutdown signal.", self.addr);
                    let shutdown_msg = RespFrame::Error("SHUTDOWN Server is shutting down".to_string());
                    let _ = self.framed.send(shutdown_msg).await;
                    return Ok(());
                }
                result = self.framed.next() => {
                    match result {
                        Some(Ok(frame)) => {
                            debug!("Session {}: Received frame: {:?}", self.session_id, frame);
                            if let Err(e) = self.process_frame(frame).await {
                                self.send_error_to_client(e).await?;
                            }
                        }
                        Some(Err(e)) => {
                            if is_normal_disconnect(&e) {
                                debug!("Connection from {} closed by peer: {}", self.addr, e);
                            } else {
                                warn!("Connection error for {}: {}", self.addr, e);
                            }
                            return Ok(());
                        }
                        None => {
                            debug!("Connection from {} closed by peer.", self.addr);
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    /// Parses a RESP frame, routes it as a command, and sends the response.
    async fn process_frame(&mut self, frame: RespFrame) -> Result<(), SlistDBError> {
        let command = Command::try_from(frame)?;
        debug!(
            "Session {}: Received command: {}",
            self.session_id,
            command.name()
        );

        let router = Router::new(self.state.clone());
        let response = router.route(command).await?;
        debug!(
            "Session {}: Sending response: {:?}",
            self.session_id, response
        );
        self.framed.send(response.into()).await?;
        Ok(())
    }

    /// Sends an error frame back to the client.
    async fn send_error_to_client(&mut self, e: SlistDBError) -> Result<(), SlistDBError> {
        let error_frame = RespFrame::Error(e.to_string());
        debug!(
            "Session {}: Sending error response: {:?}",
            self.session_id, error_frame
        );
        self.framed.send(error_frame).await?;
        Ok(())
    }
}

/// Helper function to check for non-critical disconnection errors.
fn is_normal_disconnect(e: &SlistDBError) -> bool {
    matches!(e, SlistDBError::Io(arc_err) if matches!(
        arc_err.kind(),
        std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::BrokenPipe
            | std::io::ErrorKind::UnexpectedEof
            | std::io::ErrorKind::ConnectionAborted
    ))
}
