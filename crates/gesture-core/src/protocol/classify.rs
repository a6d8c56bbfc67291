//! Message-kind classification for inbound messages.
//!
//! The channel carries no envelope: a message's kind is inferred from its
//! structural shape alone. [`MessageKind`] is the closed set of shapes the
//! bridge recognises, and classification walks an ordered table of
//! discriminator predicates — one per kind, each independent of the others —
//! so adding a kind means adding a variant and one table row, not another
//! branch inside the router.

use std::fmt;

use serde_json::Value;

/// A structural predicate deciding whether a raw message is of one kind.
type Discriminator = fn(&Value) -> bool;

/// The closed set of recognised inbound message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// A per-frame hand-landmark snapshot; discriminated by the presence of
    /// a `hands` field.
    HandLandmarks,
}

/// Matches the hand-landmark frame shape: a JSON object carrying `hands`.
fn has_hands_field(message: &Value) -> bool {
    message
        .as_object()
        .is_some_and(|object| object.contains_key("hands"))
}

/// Discriminators in evaluation order. The first matching row wins.
const DISCRIMINATORS: &[(MessageKind, Discriminator)] =
    &[(MessageKind::HandLandmarks, has_hands_field)];

impl MessageKind {
    /// Classifies a parsed message, or `None` when no kind matches.
    ///
    /// An unclassified message is not an error — the router treats it as an
    /// explicit no-op.
    #[must_use]
    pub fn classify(message: &Value) -> Option<Self> {
        DISCRIMINATORS
            .iter()
            .find(|(_, matches)| matches(message))
            .map(|(kind, _)| *kind)
    }

    /// Stable key name for this kind, used in logs and registration tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::HandLandmarks => "HAND_LANDMARKS",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
