//! Voice activity detection for paired speaker tracks.
//!
//! Each speaker wears their own microphone, so the question is not "is
//! anyone talking" but "whose voice is this frame". Detection works on
//! fixed-duration frames:
//!
//! # Algorithm
//!
//! 1. **Energy:** RMS amplitude per speaker per frame as a loudness proxy.
//! 2. **Threshold:** frames where neither energy clears the threshold are
//!    silent for both speakers.
//! 3. **Dominance:** a speaker wins a frame outright only when their energy
//!    exceeds the other's by the dominance ratio; anything closer is
//!    cross-talk or microphone bleed and both speakers are marked active.

use podcut_common::error::{PodcutError, PodcutResult};
use podcut_common::frame::{FrameTiming, DEFAULT_FRAME_MS};
use podcut_edit_model::activity::Activity;
use podcut_edit_model::audio::AudioTrack;

/// Configuration for the activity detector.
#[derive(Debug, Clone)]
pub struct VadConfig {
    /// Analysis frame duration in milliseconds.
    pub frame_ms: u32,

    /// RMS energy a frame must exceed to count as speech at all.
    pub energy_threshold: f32,

    /// Multiplier one speaker's energy must exceed the other's by to be
    /// judged the sole active speaker.
    pub dominance_ratio: f32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            energy_threshold: 0.015,
            dominance_ratio: 2.0,
        }
    }
}

/// Two-speaker voice activity detector.
pub struct ActivityDetector {
    config: VadConfig,
}

impl ActivityDetector {
    /// Create a new detector with the given configuration.
    pub fn new(config: VadConfig) -> Self {
        Self { config }
    }

    /// Create a detector with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(VadConfig::default())
    }

    /// Classify per-frame activity for both speakers.
    ///
    /// The tracks must share a sample rate. Differing lengths are resolved
    /// by truncating both to the shorter track before framing, and a
    /// trailing partial frame is not classified. The returned sequences
    /// always have equal length.
    pub fn detect(
        &self,
        speaker1: &AudioTrack,
        speaker2: &AudioTrack,
    ) -> PodcutResult<(Vec<Activity>, Vec<Activity>)> {
        if speaker1.sample_rate_hz != speaker2.sample_rate_hz {
            return Err(PodcutError::config(format!(
                "speaker tracks must share a sample rate ({} Hz vs {} Hz)",
                speaker1.sample_rate_hz, speaker2.sample_rate_hz
            )));
        }
        if self.config.frame_ms == 0 {
            return Err(PodcutError::config("frame duration must be at least 1 ms"));
        }

        let timing = FrameTiming::new(self.config.frame_ms);
        let frame_len = timing.samples_per_frame(speaker1.sample_rate_hz);
        if frame_len == 0 {
            return Err(PodcutError::config(format!(
                "a {} ms frame holds no samples at {} Hz",
                self.config.frame_ms, speaker1.sample_rate_hz
            )));
        }

        let shared_len = speaker1.len().min(speaker2.len());
        let frame_count = shared_len / frame_len;

        let mut active1 = Vec::with_capacity(frame_count);
        let mut active2 = Vec::with_capacity(frame_count);

        for frame in 0..frame_count {
            let start = frame * frame_len;
            let end = start + frame_len;
            let (s1, s2) = self.classify_frame(
                &speaker1.samples[start..end],
                &speaker2.samples[start..end],
            );
            active1.push(s1);
            active2.push(s2);
        }

        Ok((active1, active2))
    }

    /// Classify one frame of paired samples.
    fn classify_frame(&self, frame1: &[f32], frame2: &[f32]) -> (Activity, Activity) {
        let e1 = rms_energy(frame1);
        let e2 = rms_energy(frame2);

        let mut s1 = Activity::Inactive;
        let mut s2 = Activity::Inactive;

        if e1 > self.config.energy_threshold || e2 > self.config.energy_threshold {
            if e1 > e2 * self.config.dominance_ratio {
                s1 = Activity::Active;
            } else if e2 > e1 * self.config.dominance_ratio {
                s2 = Activity::Active;
            } else {
                s1 = Activity::Active;
                s2 = Activity::Active;
            }
        }

        (s1, s2)
    }
}

/// Root-mean-square amplitude of a frame.
///
/// A small epsilon under the square root keeps dominance comparisons
/// well-defined against digital silence.
fn rms_energy(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = samples.iter().map(|&s| s as f64 * s as f64).sum();
    ((sum_squares / samples.len() as f64) + 1e-9).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE_HZ: u32 = 16000;

    /// One 30 ms frame of constant amplitude.
    fn constant_frame(amplitude: f32) -> Vec<f32> {
        vec![amplitude; 480]
    }

    fn make_track(frames: &[f32]) -> AudioTrack {
        let samples = frames
            .iter()
            .flat_map(|&amplitude| constant_frame(amplitude))
            .collect();
        AudioTrack::new(samples, SAMPLE_RATE_HZ)
    }

    fn make_detector() -> ActivityDetector {
        ActivityDetector::new(VadConfig {
            frame_ms: 30,
            energy_threshold: 0.05,
            dominance_ratio: 2.0,
        })
    }

    #[test]
    fn test_rms_of_constant_signal() {
        let energy = rms_energy(&constant_frame(0.5));
        assert!((energy - 0.5).abs() < 1e-3);
        // Digital silence still yields a tiny positive energy
        let silence = rms_energy(&constant_frame(0.0));
        assert!(silence > 0.0 && silence < 1e-4);
    }

    #[test]
    fn test_dominant_speaker_wins_frame() {
        let detector = make_detector();
        let (s1, s2) = detector
            .detect(&make_track(&[1.0]), &make_track(&[0.1]))
            .unwrap();
        assert_eq!(s1, vec![Activity::Active]);
        assert_eq!(s2, vec![Activity::Inactive]);
    }

    #[test]
    fn test_comparable_energies_mark_both() {
        let detector = make_detector();
        let (s1, s2) = detector
            .detect(&make_track(&[0.6]), &make_track(&[0.5]))
            .unwrap();
        assert_eq!(s1, vec![Activity::Active]);
        assert_eq!(s2, vec![Activity::Active]);
    }

    #[test]
    fn test_silence_below_threshold() {
        let detector = make_detector();
        let (s1, s2) = detector
            .detect(&make_track(&[0.001]), &make_track(&[0.002]))
            .unwrap();
        assert_eq!(s1, vec![Activity::Inactive]);
        assert_eq!(s2, vec![Activity::Inactive]);
    }

    #[test]
    fn test_quiet_speaker_loses_to_dominant_loud_one() {
        // Speaker 2 clears the threshold; speaker 1 does not, and is more
        // than twice as quiet, so only speaker 2 is marked.
        let detector = make_detector();
        let (s1, s2) = detector
            .detect(&make_track(&[0.02]), &make_track(&[0.3]))
            .unwrap();
        assert_eq!(s1, vec![Activity::Inactive]);
        assert_eq!(s2, vec![Activity::Active]);
    }

    #[test]
    fn test_tracks_truncated_to_shorter() {
        let detector = make_detector();
        let (s1, s2) = detector
            .detect(&make_track(&[0.5, 0.5, 0.5]), &make_track(&[0.5]))
            .unwrap();
        assert_eq!(s1.len(), 1);
        assert_eq!(s2.len(), 1);
    }

    #[test]
    fn test_partial_tail_frame_not_classified() {
        let detector = make_detector();
        // 2.5 frames of audio on both sides
        let samples = vec![0.5; 1200];
        let track = AudioTrack::new(samples, SAMPLE_RATE_HZ);
        let (s1, _) = detector.detect(&track, &track).unwrap();
        assert_eq!(s1.len(), 2);
    }

    #[test]
    fn test_empty_tracks_give_empty_activity() {
        let detector = make_detector();
        let empty = AudioTrack::new(vec![], SAMPLE_RATE_HZ);
        let (s1, s2) = detector.detect(&empty, &empty).unwrap();
        assert!(s1.is_empty());
        assert!(s2.is_empty());
    }

    #[test]
    fn test_sample_rate_mismatch_rejected() {
        let detector = make_detector();
        let a = AudioTrack::new(vec![0.0; 480], 16000);
        let b = AudioTrack::new(vec![0.0; 480], 48000);
        let result = detector.detect(&a, &b);
        assert!(matches!(result, Err(PodcutError::Config { .. })));
    }

    #[test]
    fn test_zero_frame_duration_rejected() {
        let detector = ActivityDetector::new(VadConfig {
            frame_ms: 0,
            ..VadConfig::default()
        });
        let track = make_track(&[0.5]);
        assert!(detector.detect(&track, &track).is_err());
    }
}
