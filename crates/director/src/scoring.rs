//! Per-frame camera rewards.
//!
//! Scoring is instantaneous: it looks at one activity pair and one camera
//! and says how good that shot is right now. Hold/cut economics live in
//! the optimizer; this module only prices the framing.

use podcut_edit_model::activity::Activity;
use podcut_edit_model::camera::Camera;

/// Reward parameters for scoring one camera against one frame.
#[derive(Debug, Clone, Copy)]
pub struct ScoreParams {
    /// Reward for a close-up whose speaker is talking.
    pub closeup_reward: f64,

    /// Reward for the wide shot while either speaker is talking.
    pub wide_reward: f64,

    /// Penalty for a close-up while the other speaker is talking.
    pub miss_penalty: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            closeup_reward: 5.0,
            wide_reward: 4.0,
            miss_penalty: 5.0,
        }
    }
}

impl ScoreParams {
    /// Instantaneous reward for holding `camera` on a frame with the given
    /// speaker activity.
    ///
    /// Weak activity counts exactly like full activity: a close-up earns
    /// its reward on a weak speaker, and a close-up missing a weak speaker
    /// on the other side still pays the miss penalty. The wide shot earns
    /// whenever anyone talks and never pays for missing.
    pub fn score(&self, camera: Camera, s1: Activity, s2: Activity) -> f64 {
        match camera {
            Camera::Closeup1 => {
                let mut score = 0.0;
                if s1.is_active() {
                    score += self.closeup_reward;
                }
                if s2.is_active() {
                    score -= self.miss_penalty;
                }
                score
            }
            Camera::Closeup2 => {
                let mut score = 0.0;
                if s2.is_active() {
                    score += self.closeup_reward;
                }
                if s1.is_active() {
                    score -= self.miss_penalty;
                }
                score
            }
            Camera::Wide => {
                if s1.is_active() || s2.is_active() {
                    self.wide_reward
                } else {
                    0.0
                }
            }
        }
    }
}
