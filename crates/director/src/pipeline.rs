//! End-to-end analysis pipeline.
//!
//! Wires the stages together the way sessions run them: detect per-frame
//! activity, condition each speaker's track, then plan cuts over the
//! zipped pair stream. Callers with unusual needs can drive the stages
//! directly; this is the batteries-included surface the CLI uses.

use podcut_common::error::PodcutResult;
use podcut_edit_model::activity::Activity;
use podcut_edit_model::audio::AudioTrack;

use crate::optimizer::{CutOptimizer, CutPlan, OptimizerConfig};
use crate::smooth::{smooth_and_label, SmoothingConfig};
use crate::vad::{ActivityDetector, VadConfig};

/// Configuration for a full analysis run.
#[derive(Debug, Clone)]
pub struct DirectorConfig {
    /// Voice activity detection parameters.
    pub vad: VadConfig,

    /// Silences up to this long (seconds) inside ongoing speech are bridged.
    pub silence_bridge_secs: f32,

    /// Minimum talk time (seconds) before speaker 1 bursts count as full
    /// speech. The host usually gets the longer window.
    pub speaker1_min_talk_secs: f32,

    /// Minimum talk time (seconds) for speaker 2.
    pub speaker2_min_talk_secs: f32,

    /// Cut planning parameters.
    pub optimizer: OptimizerConfig,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            vad: VadConfig::default(),
            silence_bridge_secs: 1.0,
            speaker1_min_talk_secs: 1.0,
            speaker2_min_talk_secs: 0.5,
            optimizer: OptimizerConfig::default(),
        }
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct SessionAnalysis {
    /// Analysis frame duration in milliseconds.
    pub frame_ms: u32,

    /// Source sample rate in Hz.
    pub sample_rate_hz: u32,

    /// Speaker 1 activity after smoothing and labeling.
    pub speaker1: Vec<Activity>,

    /// Speaker 2 activity after smoothing and labeling.
    pub speaker2: Vec<Activity>,

    /// The optimized cut plan.
    pub plan: CutPlan,
}

impl SessionAnalysis {
    /// Number of analysis frames.
    pub fn frame_count(&self) -> usize {
        self.speaker1.len()
    }
}

/// Detect and condition per-frame activity for both speakers.
///
/// Returns one smoothed, labeled activity sequence per speaker; both
/// always have equal length.
pub fn detect_activity(
    speaker1: &AudioTrack,
    speaker2: &AudioTrack,
    config: &DirectorConfig,
) -> PodcutResult<(Vec<Activity>, Vec<Activity>)> {
    let detector = ActivityDetector::new(config.vad.clone());
    let (raw1, raw2) = detector.detect(speaker1, speaker2)?;
    tracing::debug!(frames = raw1.len(), "Detected raw per-frame activity");

    let smoothing1 = SmoothingConfig {
        frame_ms: config.vad.frame_ms,
        silence_bridge_secs: config.silence_bridge_secs,
        min_talk_secs: config.speaker1_min_talk_secs,
    };
    let smoothing2 = SmoothingConfig {
        min_talk_secs: config.speaker2_min_talk_secs,
        ..smoothing1.clone()
    };

    Ok((
        smooth_and_label(&raw1, &smoothing1),
        smooth_and_label(&raw2, &smoothing2),
    ))
}

/// Run the full pipeline: detect, smooth, label, and plan cuts.
pub fn analyze_tracks(
    speaker1: &AudioTrack,
    speaker2: &AudioTrack,
    config: &DirectorConfig,
) -> PodcutResult<SessionAnalysis> {
    let (activity1, activity2) = detect_activity(speaker1, speaker2, config)?;
    tracing::info!(
        frames = activity1.len(),
        active1 = activity1.iter().filter(|a| a.is_active()).count(),
        active2 = activity2.iter().filter(|a| a.is_active()).count(),
        "Conditioned speaker activity"
    );

    let pairs: Vec<(Activity, Activity)> = activity1
        .iter()
        .copied()
        .zip(activity2.iter().copied())
        .collect();

    let optimizer = CutOptimizer::new(config.optimizer.clone());
    let plan = optimizer.optimize(&pairs)?;
    tracing::info!(
        decisions = plan.decisions.len(),
        score = plan.score,
        "Planned cut sequence"
    );

    Ok(SessionAnalysis {
        frame_ms: config.vad.frame_ms,
        sample_rate_hz: speaker1.sample_rate_hz,
        speaker1: activity1,
        speaker2: activity2,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracks_analyze_to_empty_plan() {
        let empty = AudioTrack::new(vec![], 48000);
        let analysis = analyze_tracks(&empty, &empty, &DirectorConfig::default()).unwrap();
        assert_eq!(analysis.frame_count(), 0);
        assert_eq!(analysis.plan.score, 0.0);
        assert!(analysis.plan.frames.is_empty());
    }

    #[test]
    fn test_activity_and_plan_lengths_agree() {
        // 2 seconds of one speaker talking at 16 kHz
        let talking = AudioTrack::new(vec![0.5; 32000], 16000);
        let silent = AudioTrack::new(vec![0.0; 32000], 16000);
        let analysis = analyze_tracks(&talking, &silent, &DirectorConfig::default()).unwrap();

        // 66 whole 30 ms frames fit into 2 s
        assert_eq!(analysis.frame_count(), 66);
        assert_eq!(analysis.speaker2.len(), 66);
        assert_eq!(analysis.plan.frames.len(), 66);
        assert_eq!(analysis.frame_ms, 30);
        assert_eq!(analysis.sample_rate_hz, 16000);
    }
}
