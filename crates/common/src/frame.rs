//! Frame timing shared by all analysis stages.
//!
//! Every podcut stage works in fixed-duration analysis frames: audio is
//! classified frame by frame, smoothing windows are given in seconds and
//! converted to whole frames, and the final camera sequence is indexed per
//! frame. This module provides:
//! - The default frame duration
//! - Sample/frame conversions for a given sample rate
//! - Second/frame conversions for window and duration math

/// Default analysis frame duration in milliseconds.
pub const DEFAULT_FRAME_MS: u32 = 30;

/// Conversion helper for a fixed analysis frame duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    /// Frame duration in milliseconds.
    frame_ms: u32,
}

impl FrameTiming {
    /// Create timing for the given frame duration in milliseconds.
    pub fn new(frame_ms: u32) -> Self {
        Self { frame_ms }
    }

    /// Frame duration in milliseconds.
    pub fn frame_ms(&self) -> u32 {
        self.frame_ms
    }

    /// Frame duration in seconds.
    pub fn frame_secs(&self) -> f64 {
        self.frame_ms as f64 / 1000.0
    }

    /// Number of samples covering one frame at the given sample rate.
    pub fn samples_per_frame(&self, sample_rate_hz: u32) -> usize {
        (sample_rate_hz as u64 * self.frame_ms as u64 / 1000) as usize
    }

    /// Number of whole frames that fit in `sample_count` samples.
    /// A trailing partial window is not counted.
    pub fn frames_in(&self, sample_count: usize, sample_rate_hz: u32) -> usize {
        let frame_len = self.samples_per_frame(sample_rate_hz);
        if frame_len == 0 {
            return 0;
        }
        sample_count / frame_len
    }

    /// Convert a duration in seconds to whole frames, truncating.
    pub fn frames_from_secs(&self, secs: f32) -> usize {
        if self.frame_ms == 0 || secs <= 0.0 {
            return 0;
        }
        (secs as f64 * 1000.0 / self.frame_ms as f64) as usize
    }

    /// Convert a frame count to seconds.
    pub fn secs_from_frames(&self, frames: usize) -> f64 {
        frames as f64 * self.frame_ms as f64 / 1000.0
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_MS)
    }
}
