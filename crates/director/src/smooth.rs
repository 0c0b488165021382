//! Activity smoothing and burst labeling.
//!
//! Raw per-frame detection is jittery: a breath between words reads as
//! silence and a two-word interjection reads as a full speaking turn.
//! Cutting cameras on either would be frantic, so two passes condition
//! the activity before planning:
//!
//! - **Gap bridging:** a silent frame inside ongoing speech is reclassified
//!   as speech when activity resumes within the lookahead window.
//! - **Weak-burst labeling:** speech runs shorter than the minimum talk
//!   time are relabeled weak instead of being erased, so the planner still
//!   knows the speaker made a sound there.

use podcut_common::frame::{FrameTiming, DEFAULT_FRAME_MS};
use podcut_edit_model::activity::Activity;

/// Configuration for one speaker's smoothing passes.
#[derive(Debug, Clone)]
pub struct SmoothingConfig {
    /// Analysis frame duration in milliseconds.
    pub frame_ms: u32,

    /// Silences up to this long (seconds) inside ongoing speech are bridged.
    pub silence_bridge_secs: f32,

    /// Speech bursts shorter than this (seconds) are labeled weak.
    pub min_talk_secs: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            silence_bridge_secs: 1.0,
            min_talk_secs: 1.0,
        }
    }
}

/// Apply both passes: gap bridging, then weak-burst labeling.
///
/// Window durations are converted to whole frames (truncating) with the
/// configured frame duration.
pub fn smooth_and_label(activity: &[Activity], config: &SmoothingConfig) -> Vec<Activity> {
    let timing = FrameTiming::new(config.frame_ms);
    let bridged = bridge_silence_gaps(
        activity,
        timing.frames_from_secs(config.silence_bridge_secs),
    );
    mark_weak_bursts(&bridged, timing.frames_from_secs(config.min_talk_secs))
}

/// Fill short silences inside ongoing speech.
///
/// A frame is bridged when it is inactive in the input, the previous
/// output frame is active, and any of the next `lookahead_frames` input
/// frames is active. The pass runs left to right over its own output, so
/// a bridged frame extends the speech run later frames are checked
/// against. Frame 0 is never reclassified.
pub fn bridge_silence_gaps(activity: &[Activity], lookahead_frames: usize) -> Vec<Activity> {
    let mut smoothed = activity.to_vec();

    for i in 1..activity.len() {
        if activity[i].is_active() || !smoothed[i - 1].is_active() {
            continue;
        }
        let window_end = (i + 1 + lookahead_frames).min(activity.len());
        if activity[i + 1..window_end].iter().any(|a| a.is_active()) {
            smoothed[i] = Activity::Active;
        }
    }

    smoothed
}

/// Relabel active runs shorter than the minimum talk time as weak.
///
/// Only fully active frames form runs; weak frames from an earlier pass
/// bound them. Weak frames keep a non-zero activity value downstream.
pub fn mark_weak_bursts(activity: &[Activity], min_talk_frames: usize) -> Vec<Activity> {
    let mut labeled = activity.to_vec();
    let mut i = 0;

    while i < activity.len() {
        if activity[i] != Activity::Active {
            i += 1;
            continue;
        }

        let start = i;
        while i < activity.len() && activity[i] == Activity::Active {
            i += 1;
        }

        if i - start < min_talk_frames {
            for frame in &mut labeled[start..i] {
                *frame = Activity::Weak;
            }
        }
    }

    labeled
}
