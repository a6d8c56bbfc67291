//! Hand-landmark frame handling: diagnostics plus pointer-movement events.
//!
//! [`LandmarkHandler`] is the one handler registered in a standard bridge
//! setup. For every frame it walks the hands in wire order, parses each into
//! typed [`Hand`] data, logs a diagnostic record per landmark, and — when the
//! whole frame parsed cleanly — delivers the first hand's index-fingertip
//! position to the injected [`PointerListener`], at most once per frame.
//!
//! # Containment scope
//!
//! A malformed hand aborts the entire frame: diagnostics already emitted for
//! earlier hands stand, no movement event fires, remaining hands are skipped.
//! The abort is per frame, never wider — the next message starts clean.

use std::sync::Arc;

use tracing::{debug, warn};

use gesture_core::{skeleton, Frame, FrameError, Hand, HandData};

use crate::application::router::GestureHandler;

/// Application-supplied sink for pointer-movement events.
///
/// Invoked synchronously on the connection task that delivered the
/// triggering frame. Failures inside the listener are the listener's own
/// responsibility: nothing here catches them, so a panic surfaces at the
/// connection task boundary and is scoped there.
pub trait PointerListener: Send + Sync {
    /// The index fingertip of the first tracked hand moved to `(x, y)`,
    /// in the pipeline's normalised image coordinates.
    fn on_hand_moved(&self, x: f64, y: f64);
}

/// Handler for [`MessageKind::HandLandmarks`] frames.
///
/// [`MessageKind::HandLandmarks`]: gesture_core::MessageKind::HandLandmarks
pub struct LandmarkHandler {
    listener: Arc<dyn PointerListener>,
}

impl LandmarkHandler {
    /// Creates a handler delivering movement events to `listener`.
    pub fn new(listener: Arc<dyn PointerListener>) -> Self {
        Self { listener }
    }

    /// Walks the frame; the `?` on each hand parse is what gives the
    /// frame-wide abort its scope.
    fn process(&self, frame: &Frame) -> Result<(), FrameError> {
        let Some(hands) = frame.hands.as_deref() else {
            // An expected empty observation, not an error.
            debug!("no hands found");
            return Ok(());
        };

        // First hand in wire order, kept for event emission after the whole
        // frame has validated.
        let mut tracked: Option<HandData> = None;

        for (index, entry) in hands.iter().enumerate() {
            let hand =
                Hand::from_value(entry).map_err(|source| FrameError::Hand { index, source })?;
            let data = HandData::from(hand);

            for (id, point) in data.landmarks() {
                debug!(
                    label = data.label(),
                    id,
                    point = skeleton::name(id).unwrap_or("unknown"),
                    x = point.x,
                    y = point.y,
                    "landmark"
                );
            }

            if tracked.is_none() {
                tracked = Some(data);
            }
        }

        if let Some(first) = tracked {
            if let Some(tip) = first.landmark(skeleton::INDEX_FINGER_TIP) {
                self.listener.on_hand_moved(tip.x, tip.y);
            }
            // No index fingertip reported is not an error; no event fires.
        }

        Ok(())
    }
}

impl GestureHandler for LandmarkHandler {
    fn handle(&self, frame: &Frame) {
        if let Err(e) = self.process(frame) {
            // Caught at the point of detection; the failure never crosses
            // the router boundary.
            warn!(error = %e, "abandoning frame");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every movement event it receives.
    struct RecordingListener {
        moves: Mutex<Vec<(f64, f64)>>,
    }

    impl RecordingListener {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                moves: Mutex::new(Vec::new()),
            })
        }

        fn moves(&self) -> Vec<(f64, f64)> {
            self.moves.lock().expect("lock poisoned").clone()
        }
    }

    impl PointerListener for RecordingListener {
        fn on_hand_moved(&self, x: f64, y: f64) {
            self.moves.lock().expect("lock poisoned").push((x, y));
        }
    }

    fn handle_raw(raw: &str) -> Vec<(f64, f64)> {
        let listener = RecordingListener::new();
        let handler = LandmarkHandler::new(Arc::clone(&listener) as Arc<dyn PointerListener>);
        handler.handle(&Frame::parse(raw).expect("test frame must parse"));
        listener.moves()
    }

    #[test]
    fn test_index_fingertip_of_single_hand_emits_one_event() {
        let moves = handle_raw(
            r#"{"hands":[{"hand_label":"Right","landmarks":{"8":{"x":0.5,"y":0.25}}}]}"#,
        );
        assert_eq!(moves, [(0.5, 0.25)]);
    }

    #[test]
    fn test_first_hand_wins_when_both_carry_the_fingertip() {
        let moves = handle_raw(
            r#"{"hands":[
                {"hand_label":"Right","landmarks":{"8":{"x":0.1,"y":0.2}}},
                {"hand_label":"Left","landmarks":{"8":{"x":0.8,"y":0.9}}}
            ]}"#,
        );
        assert_eq!(moves, [(0.1, 0.2)]);
    }

    #[test]
    fn test_no_event_when_first_hand_lacks_the_fingertip() {
        // The second hand's fingertip must not be promoted.
        let moves = handle_raw(
            r#"{"hands":[
                {"hand_label":"Right","landmarks":{"4":{"x":0.3,"y":0.4}}},
                {"hand_label":"Left","landmarks":{"8":{"x":0.8,"y":0.9}}}
            ]}"#,
        );
        assert!(moves.is_empty());
    }

    #[test]
    fn test_malformed_second_hand_suppresses_the_event() {
        // First hand is fine and its diagnostics have already been logged by
        // the time the second hand fails, but the frame-wide abort means no
        // movement event fires.
        let moves = handle_raw(
            r#"{"hands":[
                {"hand_label":"Right","landmarks":{"8":{"x":0.5,"y":0.25}}},
                {"hand_label":"Left","landmarks":{"8":{"x":"oops","y":0.9}}}
            ]}"#,
        );
        assert!(moves.is_empty());
    }

    #[test]
    fn test_malformed_first_hand_suppresses_the_event() {
        let moves = handle_raw(
            r#"{"hands":[
                {"landmarks":{"8":{"x":0.5,"y":0.25}}},
                {"hand_label":"Left","landmarks":{"8":{"x":0.8,"y":0.9}}}
            ]}"#,
        );
        assert!(moves.is_empty());
    }

    #[test]
    fn test_empty_hands_array_emits_nothing() {
        assert!(handle_raw(r#"{"hands":[]}"#).is_empty());
    }

    #[test]
    fn test_absent_hands_field_emits_nothing() {
        assert!(handle_raw("{}").is_empty());
    }

    #[test]
    fn test_producer_extras_do_not_disturb_the_event() {
        // Real pipeline output: z depths, a gesture label, several fingertips.
        let moves = handle_raw(
            r#"{"hands":[{
                "hand_label": "Right",
                "gesture": "none",
                "landmarks": {
                    "4":  {"x": 0.61245, "y": 0.41827, "z": -0.04417},
                    "8":  {"x": 0.53218, "y": 0.25184, "z": -0.07211},
                    "12": {"x": 0.49821, "y": 0.22903, "z": -0.06119},
                    "16": {"x": 0.46222, "y": 0.24818, "z": -0.05301},
                    "20": {"x": 0.43107, "y": 0.29412, "z": -0.04902}
                }
            }]}"#,
        );
        assert_eq!(moves, [(0.53218, 0.25184)]);
    }

    #[test]
    fn test_event_fires_at_most_once_per_frame() {
        // Many hands, every one carrying the fingertip: still one event.
        let moves = handle_raw(
            r#"{"hands":[
                {"hand_label":"Right","landmarks":{"8":{"x":0.1,"y":0.1}}},
                {"hand_label":"Left","landmarks":{"8":{"x":0.2,"y":0.2}}},
                {"hand_label":"Right","landmarks":{"8":{"x":0.3,"y":0.3}}}
            ]}"#,
        );
        assert_eq!(moves.len(), 1);
    }
}
