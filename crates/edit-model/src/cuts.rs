//! Cut lists: contiguous camera segments recovered from frame sequences.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// A contiguous run of frames held on one camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutSegment {
    /// Camera held for this segment.
    pub camera: Camera,

    /// First frame of the segment.
    pub start_frame: usize,

    /// Number of frames the camera is held.
    pub frame_count: usize,
}

impl CutSegment {
    /// One-past-the-end frame index.
    pub fn end_frame(&self) -> usize {
        self.start_frame + self.frame_count
    }
}

/// Collapse a per-frame camera sequence into maximal same-camera segments.
///
/// Adjacent segments always name different cameras, segments tile the
/// input without gaps, and an empty sequence yields an empty list.
pub fn segments_from_frames(frames: &[Camera]) -> Vec<CutSegment> {
    let mut segments = Vec::new();
    let mut current: Option<CutSegment> = None;

    for (i, &camera) in frames.iter().enumerate() {
        match &mut current {
            Some(segment) if segment.camera == camera => {
                segment.frame_count += 1;
            }
            _ => {
                if let Some(segment) = current.take() {
                    segments.push(segment);
                }
                current = Some(CutSegment {
                    camera,
                    start_frame: i,
                    frame_count: 1,
                });
            }
        }
    }

    if let Some(segment) = current {
        segments.push(segment);
    }

    segments
}

/// Aggregate statistics over a cut list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutSummary {
    /// Number of cuts (camera changes); one less than the segment count.
    pub cut_count: usize,

    /// Total frames held on each camera, indexed by [`Camera::ALL`] order.
    pub frames_per_camera: [usize; 3],

    /// Mean segment length in frames; 0.0 for an empty list.
    pub mean_shot_frames: f64,
}

/// Summarize a cut list.
pub fn summarize(segments: &[CutSegment]) -> CutSummary {
    let mut frames_per_camera = [0usize; 3];
    let mut total_frames = 0usize;
    for segment in segments {
        frames_per_camera[segment.camera.index()] += segment.frame_count;
        total_frames += segment.frame_count;
    }

    let mean_shot_frames = if segments.is_empty() {
        0.0
    } else {
        total_frames as f64 / segments.len() as f64
    };

    CutSummary {
        cut_count: segments.len().saturating_sub(1),
        frames_per_camera,
        mean_shot_frames,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_sequence_has_no_segments() {
        assert!(segments_from_frames(&[]).is_empty());
    }

    #[test]
    fn test_single_camera_is_one_segment() {
        let frames = vec![Camera::Wide; 10];
        let segments = segments_from_frames(&frames);
        assert_eq!(
            segments,
            vec![CutSegment {
                camera: Camera::Wide,
                start_frame: 0,
                frame_count: 10,
            }]
        );
    }

    #[test]
    fn test_camera_changes_split_segments() {
        let frames = vec![
            Camera::Closeup1,
            Camera::Closeup1,
            Camera::Wide,
            Camera::Closeup2,
            Camera::Closeup2,
            Camera::Closeup2,
        ];
        let segments = segments_from_frames(&frames);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].camera, Camera::Closeup1);
        assert_eq!(segments[0].frame_count, 2);
        assert_eq!(segments[1].camera, Camera::Wide);
        assert_eq!(segments[1].start_frame, 2);
        assert_eq!(segments[2].camera, Camera::Closeup2);
        assert_eq!(segments[2].end_frame(), 6);
    }

    #[test]
    fn test_summary_counts() {
        let frames = vec![
            Camera::Wide,
            Camera::Wide,
            Camera::Closeup1,
            Camera::Wide,
        ];
        let summary = summarize(&segments_from_frames(&frames));
        assert_eq!(summary.cut_count, 2);
        assert_eq!(summary.frames_per_camera, [3, 1, 0]);
        assert!((summary.mean_shot_frames - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.cut_count, 0);
        assert_eq!(summary.mean_shot_frames, 0.0);
    }

    fn camera_strategy() -> impl Strategy<Value = Camera> {
        prop_oneof![
            Just(Camera::Wide),
            Just(Camera::Closeup1),
            Just(Camera::Closeup2),
        ]
    }

    proptest! {
        #[test]
        fn segments_tile_the_input(frames in prop::collection::vec(camera_strategy(), 0..300)) {
            let segments = segments_from_frames(&frames);

            let total: usize = segments.iter().map(|s| s.frame_count).sum();
            prop_assert_eq!(total, frames.len());

            let mut next_start = 0;
            for segment in &segments {
                prop_assert_eq!(segment.start_frame, next_start);
                prop_assert!(segment.frame_count > 0);
                next_start = segment.end_frame();
            }
        }

        #[test]
        fn adjacent_segments_differ(frames in prop::collection::vec(camera_strategy(), 0..300)) {
            let segments = segments_from_frames(&frames);
            for pair in segments.windows(2) {
                prop_assert_ne!(pair[0].camera, pair[1].camera);
            }
        }
    }
}
