//! The 21-point hand-skeleton landmark table.
//!
//! The vision pipeline follows the common hand-pose estimation scheme in
//! which every tracked hand is a skeleton of 21 points, identified by stable
//! numeric ids 0–20 and transmitted as string keys. The pipeline is free to
//! report any subset per frame — the production tracker sends only the five
//! fingertips (4, 8, 12, 16, 20) — and the bridge accepts whatever keys
//! arrive. Only id 8, the index fingertip, has functional meaning: it drives
//! the pointer-movement event.
//!
//! ```text
//!         8   12  16  20          4 = thumb tip
//!         |   |   |   |           8 = index fingertip
//!         7   11  15  19         12 = middle fingertip
//!     4   |   |   |   |          16 = ring fingertip
//!      \  6   10  14  18         20 = pinky tip
//!       \ |   |   |   /
//!        \5   9   13 17
//!         \ \ |  /  /
//!           \ | / /
//!             0                   0 = wrist
//! ```

/// Number of points in the full skeleton.
pub const LANDMARK_COUNT: usize = 21;

// Well-known landmark ids, as wire keys.
pub const WRIST: &str = "0";
pub const THUMB_TIP: &str = "4";
pub const INDEX_FINGER_TIP: &str = "8";
pub const MIDDLE_FINGER_TIP: &str = "12";
pub const RING_FINGER_TIP: &str = "16";
pub const PINKY_TIP: &str = "20";

/// Point names indexed by numeric id.
const NAMES: [&str; LANDMARK_COUNT] = [
    "wrist",
    "thumb_cmc",
    "thumb_mcp",
    "thumb_ip",
    "thumb_tip",
    "index_finger_mcp",
    "index_finger_pip",
    "index_finger_dip",
    "index_finger_tip",
    "middle_finger_mcp",
    "middle_finger_pip",
    "middle_finger_dip",
    "middle_finger_tip",
    "ring_finger_mcp",
    "ring_finger_pip",
    "ring_finger_dip",
    "ring_finger_tip",
    "pinky_mcp",
    "pinky_pip",
    "pinky_dip",
    "pinky_tip",
];

/// Skeleton point name for a wire landmark id, or `None` for ids outside the
/// 21-point scheme. Used to enrich per-landmark diagnostics.
#[must_use]
pub fn name(id: &str) -> Option<&'static str> {
    let index: usize = id.parse().ok()?;
    NAMES.get(index).copied()
}

/// Whether a wire key is one of the 21 skeleton ids.
#[must_use]
pub fn is_known_id(id: &str) -> bool {
    name(id).is_some()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_fingertip_is_id_8() {
        assert_eq!(INDEX_FINGER_TIP, "8");
        assert_eq!(name(INDEX_FINGER_TIP), Some("index_finger_tip"));
    }

    #[test]
    fn test_wrist_and_fingertip_names() {
        assert_eq!(name(WRIST), Some("wrist"));
        assert_eq!(name(THUMB_TIP), Some("thumb_tip"));
        assert_eq!(name(MIDDLE_FINGER_TIP), Some("middle_finger_tip"));
        assert_eq!(name(RING_FINGER_TIP), Some("ring_finger_tip"));
        assert_eq!(name(PINKY_TIP), Some("pinky_tip"));
    }

    #[test]
    fn test_every_id_in_range_has_a_name() {
        for id in 0..LANDMARK_COUNT {
            assert!(name(&id.to_string()).is_some(), "id {id} must be named");
        }
    }

    #[test]
    fn test_ids_outside_the_scheme_have_no_name() {
        assert_eq!(name("21"), None);
        assert_eq!(name("-1"), None);
        assert_eq!(name("thumb"), None);
        assert_eq!(name(""), None);
    }

    #[test]
    fn test_is_known_id_matches_name_lookup() {
        assert!(is_known_id("0"));
        assert!(is_known_id("20"));
        assert!(!is_known_id("21"));
        assert!(!is_known_id("8.0"));
    }
}
