//! WebSocket server: accept loop and per-connection tasks.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Accepting incoming TCP connections from the vision pipeline.
//! 3. Upgrading each connection to a WebSocket session.
//! 4. Reading text messages and handing each one to [`GestureRouter::route`].
//! 5. Shutting down gracefully when the `running` flag is cleared.
//!
//! # Threading model
//!
//! Each connection runs in its own Tokio task, so messages from distinct
//! connections may be processed truly in parallel. Within one connection,
//! messages are read and routed one at a time on that task — routing is
//! synchronous and runs to completion, so per-connection order is preserved
//! end to end. The router is shared as an `Arc` and is immutable by the time
//! it gets here (registration requires `&mut`, see the application layer).
//!
//! # Error containment
//!
//! A connection that fails its handshake, or errors mid-stream, is logged and
//! dropped; the accept loop keeps running. The only error `run_server` itself
//! returns is a failed bind.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use futures_util::StreamExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};

use crate::application::GestureRouter;
use crate::domain::BridgeConfig;

// ── Public API ────────────────────────────────────────────────────────────────

/// Runs the accept loop until `running` is set to `false`.
///
/// Binds a TCP listener on `config.ws_bind_addr` and hands every accepted
/// connection to a dedicated Tokio task, so one slow pipeline connection
/// never blocks another.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port already in use, or
/// the process lacks permission to bind).
pub async fn run_server(
    config: BridgeConfig,
    router: Arc<GestureRouter>,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.ws_bind_addr)
        .await
        .with_context(|| format!("failed to bind WebSocket listener on {}", config.ws_bind_addr))?;

    info!("gesture bridge listening on {}", config.ws_bind_addr);

    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        // A short timeout on accept() lets the loop re-check the running
        // flag even when no pipeline is connecting.
        let accept_result = timeout(Duration::from_millis(200), listener.accept()).await;

        match accept_result {
            Ok(Ok((stream, peer_addr))) => {
                info!("connection from {peer_addr}");
                let router = Arc::clone(&router);
                tokio::spawn(async move {
                    handle_connection(stream, peer_addr, router).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error (e.g. fd exhaustion); keep serving.
                error!("accept error: {e}");
            }
            Err(_) => {
                // Timeout — loop back to check the running flag.
            }
        }
    }

    Ok(())
}

// ── Per-connection handler ────────────────────────────────────────────────────

/// Entry point of each per-connection task: wraps [`run_connection`] and logs
/// the outcome, so the inner function can use `?` freely.
async fn handle_connection(raw_stream: TcpStream, peer_addr: SocketAddr, router: Arc<GestureRouter>) {
    match run_connection(raw_stream, peer_addr, router).await {
        Ok(()) => info!("disconnected: {peer_addr}"),
        Err(e) => warn!("connection {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs the lifecycle of one pipeline connection: WebSocket handshake, then
/// an inbound read loop until the peer goes away.
async fn run_connection(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    router: Arc<GestureRouter>,
) -> anyhow::Result<()> {
    // Reads the HTTP Upgrade request and answers "101 Switching Protocols";
    // afterwards the stream speaks WebSocket frames.
    let mut ws_stream = accept_async(raw_stream)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    info!("connected: {peer_addr}");

    while let Some(message) = ws_stream.next().await {
        let message = match message {
            Ok(m) => m,
            Err(WsError::ConnectionClosed | WsError::Protocol(_)) => {
                debug!("{peer_addr}: WebSocket closed");
                break;
            }
            Err(e) => {
                warn!("{peer_addr}: WebSocket error: {e}");
                break;
            }
        };

        match message {
            WsMessage::Text(text) => {
                debug!(peer = %peer_addr, bytes = text.len(), "inbound message");
                // Synchronous; a malformed message is logged inside and
                // never ends the connection.
                router.route(&text);
            }

            WsMessage::Binary(payload) => {
                // The pipeline protocol is text-only.
                warn!(
                    "{peer_addr}: unexpected binary frame ({} bytes, ignored)",
                    payload.len()
                );
            }

            WsMessage::Ping(payload) => {
                debug!("{peer_addr}: WebSocket ping ({} bytes)", payload.len());
            }

            WsMessage::Pong(_) => {
                debug!("{peer_addr}: WebSocket pong");
            }

            WsMessage::Close(_) => {
                debug!("{peer_addr}: WebSocket Close frame");
                break;
            }

            WsMessage::Frame(_) => {
                debug!("{peer_addr}: raw frame (ignored)");
            }
        }
    }

    Ok(())
}
