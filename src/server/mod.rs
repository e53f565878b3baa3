// src/server/mod.rs

//! Server bootstrap: binds the listener and runs the connection accept loop
//! until shutdown.

use crate::config::Config;
use crate::connection::ConnectionHandler;
use crate::core::state::ServerState;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::net::TcpListener;
use tokio::sync::{Semaphore, broadcast};
use tracing::{error, info, warn};

/// The main server startup function.
pub async fn run(config: Config) -> Result<()> {
    let bind_addr = format!("{}:{}", config.host, config.port);
    let max_clients = config.max_clients;
    let state = ServerState::new(config);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {bind_addr}"))?;
    info!("SlistDB listening on {}", bind_addr);

    let (shutdown_tx, _) = broadcast::channel::<()>(1);
    let client_permits = Arc::new(Semaphore::new(max_clients));
    let next_session_id = AtomicU64::new(1);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, closing connections.");
                let _ = shutdown_tx.send(());
                break;
            }
            accepted = listener.accept() => {
                let (socket, addr) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        error!("Failed to accept connection: {}", e);
                        continue;
                    }
                };

                let Ok(permit) = client_permits.clone().try_acquire_owned() else {
                    warn!("Rejecting connection from {}: max_clients reached.", addr);
                    drop(socket);
                    continue;
                };

                let session_id = next_session_id.fetch_add(1, Ordering::Relaxed);
                state.stats.increment_total_connections();
                info!("Accepted connection from {} (session {})", addr, session_id);

                let handler_state = state.clone();
                let shutdown_rx = shutdown_tx.subscribe();
                tokio::spawn(async move {
                    let mut handler =
                        ConnectionHandler::new(socket, addr, handler_state, session_id, shutdown_rx);
                    if let Err(e) = handler.run().await {
                        warn!("Connection handler for {} exited with error: {}", addr, e);
                    }
                    drop(permit);
                });
            }
        }
    }

    Ok(())
}
