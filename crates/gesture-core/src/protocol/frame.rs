//! Frame wire types and their typed parse failures.
//!
//! # Wire shape
//!
//! The vision pipeline publishes one JSON object per video frame:
//!
//! ```json
//! {
//!   "hands": [
//!     {
//!       "hand_label": "Right",
//!       "landmarks": {
//!         "8": { "x": 0.5321, "y": 0.2518 },
//!         "4": { "x": 0.6012, "y": 0.4103 }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Absence of `hands` is a valid frame and means "no hands detected". The
//! real producer decorates this shape with extra fields (a per-hand gesture
//! label, a per-point `z` depth) — unknown fields are ignored at every level,
//! which is serde's default for structs.
//!
//! # Two-stage parsing
//!
//! [`Frame`] keeps its `hands` entries as raw [`serde_json::Value`]s and the
//! typed per-hand parse ([`Hand::from_value`]) happens later, hand by hand,
//! in wire order. The split is deliberate: per-landmark diagnostics for the
//! hands that parsed cleanly must already be emitted when a later hand in the
//! same frame turns out to be malformed. An eager fully-typed parse would
//! reject the whole message up front and lose them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors raised while parsing an inbound message into frame types.
///
/// These are per-message failures. The router and handlers log them and drop
/// the offending message; they never cross the routing boundary or affect the
/// connection that delivered the message.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The inbound text is not well-formed JSON at all.
    #[error("message is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The message is JSON but the frame structure is wrong, e.g. `hands` is
    /// present but not an array.
    #[error("frame structure is invalid: {0}")]
    Structure(#[source] serde_json::Error),

    /// One entry of the `hands` array is malformed: missing `hand_label`,
    /// missing `landmarks`, or a coordinate that is not a number.
    ///
    /// `index` is the entry's position in wire order, for diagnostics.
    #[error("hand entry {index} is malformed: {source}")]
    Hand {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

// ── Wire types ────────────────────────────────────────────────────────────────

/// One landmark position in normalised image coordinates.
///
/// The vision pipeline reports positions normalised to the camera image, so
/// both components are typically in `0.0..=1.0`. JSON numbers cannot encode
/// NaN or infinity, so any point that deserialises is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

/// One tracked hand, fully parsed.
///
/// `landmarks` maps a landmark id (a string key carrying a stable numeric
/// identifier, see [`crate::domain::skeleton`]) to its position. The map has
/// no null or absent values — a malformed entry fails the hand's parse
/// instead of being dropped. Duplicate wire keys collapse to the last-seen
/// value during JSON parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    /// Handedness label assigned by the pipeline, e.g. `"Left"` or `"Right"`.
    #[serde(rename = "hand_label")]
    pub label: String,

    /// Landmark-id → position map.
    pub landmarks: HashMap<String, Point2D>,
}

impl Hand {
    /// Parses one entry of a frame's `hands` array.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the entry is not an object,
    /// lacks `hand_label` or `landmarks`, or carries a non-numeric
    /// coordinate. Callers wrap it in [`FrameError::Hand`] together with the
    /// entry's index.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

/// The root parsed message: one snapshot of zero or more tracked hands.
///
/// `hands` preserves wire order — the first element is the hand used for
/// event emission. Entries stay raw until a handler parses them (see the
/// module docs for why).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Tracked hands in wire order; `None` means no hands were detected this
    /// frame (the field was absent or JSON `null`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hands: Option<Vec<Value>>,
}

impl Frame {
    /// Parses a raw inbound text message into a `Frame`.
    ///
    /// # Errors
    ///
    /// [`FrameError::Json`] when the text is not JSON, [`FrameError::Structure`]
    /// when it is JSON of the wrong shape.
    pub fn parse(raw: &str) -> Result<Self, FrameError> {
        let value: Value = serde_json::from_str(raw).map_err(FrameError::Json)?;
        Self::from_value(value)
    }

    /// Converts an already-parsed JSON value into a `Frame`.
    ///
    /// # Errors
    ///
    /// [`FrameError::Structure`] when `hands` is present but not an array.
    pub fn from_value(value: Value) -> Result<Self, FrameError> {
        serde_json::from_value(value).map_err(FrameError::Structure)
    }

    /// Number of hand entries in this frame (0 when `hands` is absent).
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hands.as_ref().map_or(0, Vec::len)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
