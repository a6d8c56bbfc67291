//! Application layer for gesture-bridge.
//!
//! The application layer is the routing core: it classifies inbound messages,
//! dispatches them to handler capabilities, and extracts pointer-movement
//! events from landmark frames. It knows nothing about sockets or tasks —
//! the infrastructure layer feeds it raw text and it runs synchronously to
//! completion.
//!
//! # Responsibilities
//!
//! - [`router::GestureRouter`] — kind → handler dispatch table
//! - [`router::GestureHandler`] — the capability a handler implements
//! - [`landmark_handler::LandmarkHandler`] — landmark frames → pointer events
//! - [`landmark_handler::PointerListener`] — the application-supplied sink

pub mod landmark_handler;
pub mod router;

pub use landmark_handler::{LandmarkHandler, PointerListener};
pub use router::{GestureHandler, GestureRouter};
