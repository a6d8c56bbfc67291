//! # gesture-core
//!
//! Shared library for the gesture bridge containing the frame wire protocol,
//! hand domain types, and the hand-skeleton landmark table.
//!
//! This crate is pure data and parsing: it has zero dependencies on OS APIs,
//! async runtimes, or network sockets, which keeps every type in it testable
//! without a running transport.
//!
//! # Overview
//!
//! A hand-tracking vision pipeline watches a camera, estimates a 21-point
//! skeleton for each visible hand, and publishes one JSON message per video
//! frame over a WebSocket. This crate defines:
//!
//! - **`protocol`** – What those messages look like on the wire. `Frame` is
//!   the root message, `Hand` is one tracked hand, and `MessageKind` is the
//!   closed set of message shapes the bridge recognises.
//!
//! - **`domain`** – Pure business types. `HandData` is the owned landmark
//!   map a handler works with, and `skeleton` names the 21 landmark ids of
//!   the standard hand-pose scheme (id 8 = index fingertip).

// Rust looks for each module in a subdirectory of the same name
// (e.g., src/protocol/mod.rs).
pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `gesture_core::Frame` instead of `gesture_core::protocol::frame::Frame`.
pub use domain::hand_data::HandData;
pub use domain::skeleton;
pub use protocol::classify::MessageKind;
pub use protocol::frame::{Frame, FrameError, Hand, Point2D};
