//! gesture-bridge library crate.
//!
//! This crate bridges a hand-tracking vision pipeline to an application: the
//! pipeline publishes per-frame hand-landmark JSON over a WebSocket, and the
//! bridge classifies each message, dispatches it to a registered handler, and
//! turns raw landmark coordinates into a pointer-movement event delivered to
//! an application-supplied listener.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Vision pipeline (JSON over WebSocket)
//!         ↓
//! [gesture-bridge]
//!   ├── domain/           BridgeConfig (pure, no I/O)
//!   ├── application/      GestureRouter dispatch + LandmarkHandler
//!   └── infrastructure/
//!         └── ws_server/  WebSocket accept loop (tokio-tungstenite)
//!         ↓
//! PointerListener::on_hand_moved(x, y)   (application-supplied)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies (no I/O, no async, no frameworks).
//! - `application` depends on `domain` and `gesture-core` only; it never
//!   touches a socket and introduces no concurrency of its own — each message
//!   is processed synchronously to completion on the connection task that
//!   delivered it.
//! - `infrastructure` depends on the other layers plus `tokio` and
//!   `tungstenite`, and owns every I/O concern.

/// Domain layer: pure configuration types.
pub mod domain;

/// Application layer: message classification, dispatch, and handling.
pub mod application;

/// Infrastructure layer: the WebSocket server.
pub mod infrastructure;
