//! Persisted edit plans.
//!
//! An edit plan is what one analysis run leaves behind: framing metadata,
//! the optimizer score, the cut list, and optionally the full per-frame
//! camera sequence. Plans are project data, not export formats; rendering
//! a timeline or EDL at a chosen video frame rate is downstream tooling's
//! job.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::cuts::CutSegment;

/// Persisted result of one analysis run (`plan.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPlan {
    /// Schema version.
    pub version: String,

    /// Creation timestamp (ISO 8601).
    pub created_at: String,

    /// Analysis frame duration in milliseconds.
    pub frame_ms: u32,

    /// Source sample rate in Hz.
    pub sample_rate_hz: u32,

    /// Number of analysis frames the plan covers.
    pub total_frames: usize,

    /// Total reward of the optimal camera sequence.
    pub score: f64,

    /// Frames per decision point the optimizer used.
    pub stride: usize,

    /// Maximal same-camera segments in chronological order.
    pub cuts: Vec<CutSegment>,

    /// Full per-frame camera sequence, when retained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<Camera>>,
}

impl EditPlan {
    /// Create a plan stamped with the current time.
    pub fn new(
        frame_ms: u32,
        sample_rate_hz: u32,
        total_frames: usize,
        score: f64,
        stride: usize,
        cuts: Vec<CutSegment>,
    ) -> Self {
        Self {
            version: "1.0".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            frame_ms,
            sample_rate_hz,
            total_frames,
            score,
            stride,
            cuts,
            frames: None,
        }
    }

    /// Plan duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.total_frames as f64 * self.frame_ms as f64 / 1000.0
    }

    /// Load a plan from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref().to_path_buf();

        let json = std::fs::read_to_string(&path).map_err(|e| PlanError::IoError {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&json).map_err(|e| PlanError::ParseError { path, source: e })
    }

    /// Save the plan as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlanError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlanError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| PlanError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        std::fs::write(&path, json).map_err(|e| PlanError::IoError { path, source: e })
    }
}

/// Errors that can occur when reading or writing plans.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plan() -> EditPlan {
        EditPlan::new(
            30,
            48000,
            6,
            42.5,
            1,
            vec![
                CutSegment {
                    camera: Camera::Closeup1,
                    start_frame: 0,
                    frame_count: 4,
                },
                CutSegment {
                    camera: Camera::Wide,
                    start_frame: 4,
                    frame_count: 2,
                },
            ],
        )
    }

    #[test]
    fn test_plan_serialization() {
        let plan = make_plan();
        let json = serde_json::to_string_pretty(&plan).unwrap();
        let parsed: EditPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.version, "1.0");
        assert_eq!(parsed.total_frames, 6);
        assert_eq!(parsed.cuts.len(), 2);
        assert_eq!(parsed.cuts[1].camera, Camera::Wide);
    }

    #[test]
    fn test_frames_omitted_when_absent() {
        let plan = make_plan();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(!json.contains("\"frames\""));

        let mut with_frames = make_plan();
        with_frames.frames = Some(vec![Camera::Closeup1; 6]);
        let json = serde_json::to_string(&with_frames).unwrap();
        assert!(json.contains("\"frames\""));
    }

    #[test]
    fn test_duration() {
        let plan = make_plan();
        assert!((plan.duration_secs() - 0.18).abs() < 1e-9);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("podcut_test_plan");
        let _ = std::fs::remove_dir_all(&dir);

        let plan = make_plan();
        let path = dir.join("plan.json");
        plan.save(&path).unwrap();

        let loaded = EditPlan::load(&path).unwrap();
        assert_eq!(loaded.total_frames, plan.total_frames);
        assert_eq!(loaded.cuts, plan.cuts);
        assert!((loaded.score - plan.score).abs() < 1e-9);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("podcut_test_plan_missing.json");
        let _ = std::fs::remove_file(&path);
        let err = EditPlan::load(&path).unwrap_err();
        assert!(matches!(err, PlanError::IoError { .. }));
    }
}
