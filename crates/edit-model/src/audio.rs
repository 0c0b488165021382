//! Audio track buffers.
//!
//! The analysis pipeline consumes plain mono sample buffers; decoding,
//! channel mixdown, and resampling happen upstream. Raw 32-bit float
//! little-endian PCM (`ffmpeg -f f32le -ac 1`) parses directly into a
//! track, which is how the CLI feeds audio in.

/// A mono audio track: amplitude samples plus their sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    /// Amplitude samples, nominally in `[-1.0, 1.0]`.
    pub samples: Vec<f32>,

    /// Sample rate in Hz.
    pub sample_rate_hz: u32,
}

impl AudioTrack {
    /// Create a track from samples and a sample rate.
    pub fn new(samples: Vec<f32>, sample_rate_hz: u32) -> Self {
        Self {
            samples,
            sample_rate_hz,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the track holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Track duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate_hz == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate_hz as f64
    }

    /// Parse raw 32-bit float little-endian PCM bytes.
    /// A trailing partial sample (fewer than 4 bytes) is dropped.
    pub fn from_f32le_bytes(bytes: &[u8], sample_rate_hz: u32) -> Self {
        let samples = bytes
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Self {
            samples,
            sample_rate_hz,
        }
    }

    /// Serialize samples as raw 32-bit float little-endian PCM bytes.
    pub fn to_f32le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 4);
        for sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32le_roundtrip() {
        let track = AudioTrack::new(vec![0.0, 0.5, -0.5, 1.0, -1.0], 48000);
        let bytes = track.to_f32le_bytes();
        let parsed = AudioTrack::from_f32le_bytes(&bytes, 48000);
        assert_eq!(track, parsed);
    }

    #[test]
    fn test_partial_trailing_sample_dropped() {
        let mut bytes = 0.25f32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0x01, 0x02]);
        let track = AudioTrack::from_f32le_bytes(&bytes, 16000);
        assert_eq!(track.samples, vec![0.25]);
    }

    #[test]
    fn test_duration() {
        let track = AudioTrack::new(vec![0.0; 24000], 48000);
        assert!((track.duration_secs() - 0.5).abs() < 1e-9);
        assert_eq!(track.len(), 24000);
        assert!(!track.is_empty());
    }

    #[test]
    fn test_zero_sample_rate_has_zero_duration() {
        let track = AudioTrack::new(vec![0.0; 100], 0);
        assert_eq!(track.duration_secs(), 0.0);
    }
}
