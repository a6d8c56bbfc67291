//! Wire protocol for the vision-pipeline message channel.
//!
//! One inbound WebSocket text message is one frame: a UTF-8 JSON snapshot of
//! zero or more tracked hands. There is no outer envelope and no explicit
//! message-type tag — a message's kind is inferred purely from which fields
//! are present (see [`classify`]).

pub mod classify;
pub mod frame;

pub use classify::MessageKind;
pub use frame::{Frame, FrameError, Hand, Point2D};
