//! Owned landmark data for one tracked hand.

use std::collections::HashMap;

use crate::protocol::frame::{Hand, Point2D};

/// Immutable landmark map for one hand, owned independently of the parsed
/// frame it came from.
///
/// Built eagerly when a hand parses; lookups never fail, they return `None`
/// for ids the pipeline did not report. Landmark keys are unique — duplicate
/// wire keys have already collapsed to last-seen by the time a [`Hand`]
/// exists.
#[derive(Debug, Clone, PartialEq)]
pub struct HandData {
    label: String,
    landmarks: HashMap<String, Point2D>,
}

impl HandData {
    /// Builds hand data directly from a label and a landmark map.
    pub fn new(label: impl Into<String>, landmarks: HashMap<String, Point2D>) -> Self {
        Self {
            label: label.into(),
            landmarks,
        }
    }

    /// Handedness label, e.g. `"Left"` or `"Right"`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position of the landmark with the given id, if the pipeline reported
    /// it this frame.
    #[must_use]
    pub fn landmark(&self, id: &str) -> Option<Point2D> {
        self.landmarks.get(id).copied()
    }

    /// Number of landmarks reported for this hand.
    #[must_use]
    pub fn landmark_count(&self) -> usize {
        self.landmarks.len()
    }

    /// Iterates over `(id, position)` pairs. Iteration order is unspecified;
    /// the landmark map is a mapping, not a sequence.
    pub fn landmarks(&self) -> impl Iterator<Item = (&str, Point2D)> {
        self.landmarks.iter().map(|(id, point)| (id.as_str(), *point))
    }
}

impl From<Hand> for HandData {
    /// Takes ownership of a parsed hand's label and landmark map.
    fn from(hand: Hand) -> Self {
        Self {
            label: hand.label,
            landmarks: hand.landmarks,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn submap() -> HashMap<String, Point2D> {
        let mut landmarks = HashMap::new();
        landmarks.insert("8".to_string(), Point2D { x: 1.0, y: 2.0 });
        landmarks
    }

    #[test]
    fn test_present_landmark_is_returned() {
        let data = HandData::new("Right", submap());
        assert_eq!(data.landmark("8"), Some(Point2D { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn test_absent_landmark_is_none_not_an_error() {
        let data = HandData::new("Right", submap());
        assert_eq!(data.landmark("0"), None);
    }

    #[test]
    fn test_from_hand_takes_over_label_and_landmarks() {
        let hand = Hand {
            label: "Left".to_string(),
            landmarks: submap(),
        };

        let data = HandData::from(hand);
        assert_eq!(data.label(), "Left");
        assert_eq!(data.landmark_count(), 1);
        assert_eq!(data.landmark("8"), Some(Point2D { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn test_landmark_iteration_yields_all_entries() {
        let mut landmarks = submap();
        landmarks.insert("4".to_string(), Point2D { x: 0.25, y: 0.75 });
        let data = HandData::new("Right", landmarks);

        let mut ids: Vec<&str> = data.landmarks().map(|(id, _)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["4", "8"]);
    }
}
