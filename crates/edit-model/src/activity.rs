//! Per-frame speaker activity.
//!
//! Activity is the interchange format between detection, smoothing, and
//! cut planning: one value per analysis frame per speaker. `Weak` marks
//! speech bursts shorter than the minimum talk time; it is an annotation,
//! not a removal, and every downstream consumer treats weak frames as
//! active.

use serde::{Deserialize, Serialize};

/// Classification of one speaker in one analysis frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// No speech attributed to this speaker.
    Inactive,
    /// Speech attributed to this speaker.
    Active,
    /// Speech in a burst shorter than the minimum talk time.
    Weak,
}

impl Activity {
    /// Numeric activity value: 0.0 inactive, 1.0 active, 0.5 weak.
    pub fn value(self) -> f32 {
        match self {
            Activity::Inactive => 0.0,
            Activity::Active => 1.0,
            Activity::Weak => 0.5,
        }
    }

    /// Whether this frame counts as speech. Any non-zero value does.
    pub fn is_active(self) -> bool {
        !matches!(self, Activity::Inactive)
    }
}

/// Both speakers' per-frame activity, as produced by detection and
/// smoothing (`activity.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTracks {
    /// Analysis frame duration in milliseconds.
    pub frame_ms: u32,

    /// Source sample rate in Hz.
    pub sample_rate_hz: u32,

    /// Speaker 1 activity, one value per frame.
    pub speaker1: Vec<Activity>,

    /// Speaker 2 activity, one value per frame.
    pub speaker2: Vec<Activity>,
}

impl ActivityTracks {
    /// Number of analysis frames. Both speakers always hold the same count.
    pub fn frame_count(&self) -> usize {
        self.speaker1.len()
    }

    /// Frames where the given speaker counts as speech.
    pub fn active_frames(track: &[Activity]) -> usize {
        track.iter().filter(|a| a.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_values() {
        assert_eq!(Activity::Inactive.value(), 0.0);
        assert_eq!(Activity::Active.value(), 1.0);
        assert_eq!(Activity::Weak.value(), 0.5);
    }

    #[test]
    fn test_weak_counts_as_active() {
        assert!(Activity::Active.is_active());
        assert!(Activity::Weak.is_active());
        assert!(!Activity::Inactive.is_active());
    }

    #[test]
    fn test_activity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Activity::Weak).unwrap(),
            "\"weak\""
        );
        assert_eq!(
            serde_json::from_str::<Activity>("\"inactive\"").unwrap(),
            Activity::Inactive
        );
    }

    #[test]
    fn test_tracks_roundtrip() {
        let tracks = ActivityTracks {
            frame_ms: 30,
            sample_rate_hz: 48000,
            speaker1: vec![Activity::Active, Activity::Weak, Activity::Inactive],
            speaker2: vec![Activity::Inactive, Activity::Inactive, Activity::Active],
        };
        let json = serde_json::to_string(&tracks).unwrap();
        let parsed: ActivityTracks = serde_json::from_str(&json).unwrap();
        assert_eq!(tracks, parsed);
        assert_eq!(parsed.frame_count(), 3);
    }

    #[test]
    fn test_active_frame_count() {
        let track = vec![
            Activity::Active,
            Activity::Weak,
            Activity::Inactive,
            Activity::Active,
        ];
        assert_eq!(ActivityTracks::active_frames(&track), 3);
    }
}
