//! Message classification and dispatch.
//!
//! [`GestureRouter`] owns a dispatch table from [`MessageKind`] to a
//! registered [`GestureHandler`]. Every inbound text message goes through
//! [`GestureRouter::route`]: parse, classify, look up, dispatch. Any parse
//! failure is logged and swallowed there — one malformed message must never
//! take down the connection that delivered it, let alone the process.
//!
//! # Mutation discipline
//!
//! The handler table is plain shared state, safe because it is written only
//! during setup: `register_handler` takes `&mut self`, so once the router is
//! wrapped in an `Arc` and handed to the transport, the type system rules out
//! further registration. No lock is needed on the routing path.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use gesture_core::{Frame, FrameError, MessageKind};

/// Capability invoked for a classified message kind.
///
/// Implementations must contain their own failures: `handle` is infallible
/// from the router's point of view, and anything that goes wrong inside a
/// frame is logged by the handler and scoped to that frame.
pub trait GestureHandler: Send + Sync {
    /// Processes one parsed frame. Called synchronously on the connection
    /// task that delivered the message; must not block on I/O.
    fn handle(&self, frame: &Frame);
}

/// Dispatch table from message kind to handler.
#[derive(Default)]
pub struct GestureRouter {
    handlers: HashMap<MessageKind, Box<dyn GestureHandler>>,
}

impl GestureRouter {
    /// Creates a router with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Associates a message kind with a handler. Re-registering a kind
    /// replaces the prior handler — last write wins.
    ///
    /// Call during setup only, before the channel starts delivering messages
    /// (enforced by `&mut self`: a shared router cannot register).
    pub fn register_handler(&mut self, kind: MessageKind, handler: Box<dyn GestureHandler>) {
        if self.handlers.insert(kind, handler).is_some() {
            debug!(%kind, "replaced existing handler registration");
        }
    }

    /// Classifies one raw inbound message and dispatches it.
    ///
    /// Never returns an error and never panics on malformed input: parse
    /// failures are logged and the message is dropped. A message that
    /// matches no kind, or a kind with no registered handler, is an explicit
    /// no-op.
    pub fn route(&self, raw: &str) {
        let message: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %FrameError::Json(e), "discarding inbound message");
                return;
            }
        };

        let Some(kind) = MessageKind::classify(&message) else {
            debug!("inbound message matches no recognised kind; ignoring");
            return;
        };

        let Some(handler) = self.handlers.get(&kind) else {
            debug!(%kind, "no handler registered for kind; ignoring");
            return;
        };

        let frame = match Frame::from_value(message) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(%kind, error = %e, "discarding inbound message");
                return;
            }
        };

        debug!(%kind, hands = frame.hand_count(), "dispatching frame");
        handler.handle(&frame);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
