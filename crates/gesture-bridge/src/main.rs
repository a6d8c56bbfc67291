//! Gesture bridge — entry point.
//!
//! This binary accepts WebSocket connections from a hand-tracking vision
//! pipeline, classifies each inbound landmark frame, and turns the first
//! tracked hand's index-fingertip position into a pointer-movement event.
//! Run standalone it logs those events; embedders use the library crate and
//! supply their own [`PointerListener`].
//!
//! # Usage
//!
//! ```text
//! gesture-bridge [OPTIONS]
//!
//! Options:
//!   --ws-port <PORT>   WebSocket listener port [default: 8885]
//!   --ws-bind <ADDR>   Bind address [default: 0.0.0.0]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable          | Default   | Description             |
//! |-------------------|-----------|-------------------------|
//! | `GESTURE_WS_PORT` | `8885`    | WebSocket listener port |
//! | `GESTURE_WS_BIND` | `0.0.0.0` | Bind address            |
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug` shows the
//! per-landmark diagnostics).

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gesture_core::MessageKind;

use gesture_bridge::application::{GestureRouter, LandmarkHandler, PointerListener};
use gesture_bridge::domain::BridgeConfig;
use gesture_bridge::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Bridge between a hand-tracking vision pipeline and pointer events.
#[derive(Debug, Parser)]
#[command(
    name = "gesture-bridge",
    about = "Routes hand-landmark frames from a vision pipeline to pointer-movement events",
    version
)]
struct Cli {
    /// TCP port for the WebSocket server to listen on.
    ///
    /// The vision pipeline connects to this port (ws://host:PORT).
    #[arg(long, default_value_t = 8885, env = "GESTURE_WS_PORT")]
    ws_port: u16,

    /// IP address to bind the WebSocket server to.
    ///
    /// Use `0.0.0.0` to accept connections from any interface, or
    /// `127.0.0.1` for local-only operation.
    #[arg(long, default_value = "0.0.0.0", env = "GESTURE_WS_BIND")]
    ws_bind: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`BridgeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--ws-bind` is not a valid IP address.
    fn into_bridge_config(self) -> anyhow::Result<BridgeConfig> {
        let ws_bind_addr: SocketAddr = format!("{}:{}", self.ws_bind, self.ws_port)
            .parse()
            .with_context(|| {
                format!("invalid WebSocket bind address: '{}:{}'", self.ws_bind, self.ws_port)
            })?;

        Ok(BridgeConfig { ws_bind_addr })
    }
}

// ── Standalone listener ───────────────────────────────────────────────────────

/// Pointer listener for standalone runs: logs each movement event.
struct PointerLog;

impl PointerListener for PointerLog {
    fn on_hand_moved(&self, x: f64, y: f64) {
        info!(x, y, "hand moved");
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log level follows RUST_LOG, defaulting to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_bridge_config()?;

    info!("gesture bridge starting — ws={}", config.ws_bind_addr);

    // All registration happens here, before the router is shared; once it is
    // behind an Arc the dispatch table is immutable.
    let mut router = GestureRouter::new();
    router.register_handler(
        MessageKind::HandLandmarks,
        Box::new(LandmarkHandler::new(Arc::new(PointerLog))),
    );
    let router = Arc::new(router);

    // Graceful shutdown: Ctrl+C clears the flag, the accept loop notices
    // within its 200 ms accept timeout and exits cleanly.
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C — initiating graceful shutdown");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    run_server(config, router, running).await?;

    info!("gesture bridge stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_the_pipeline_deployment() {
        // Arrange: parse with no arguments (all defaults apply)
        let cli = Cli::parse_from(["gesture-bridge"]);

        // Assert
        assert_eq!(cli.ws_port, 8885);
        assert_eq!(cli.ws_bind, "0.0.0.0");
    }

    #[test]
    fn test_cli_args_override_defaults() {
        let cli = Cli::parse_from(["gesture-bridge", "--ws-port", "9001", "--ws-bind", "127.0.0.1"]);
        let config = cli.into_bridge_config().unwrap();

        assert_eq!(config.ws_bind_addr.port(), 9001);
        assert!(config.ws_bind_addr.ip().is_loopback());
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let cli = Cli::parse_from(["gesture-bridge", "--ws-bind", "not-an-ip"]);
        assert!(cli.into_bridge_config().is_err());
    }
}
