//! Optimal cut planning.
//!
//! Chooses which camera to hold at every point of the session by
//! maximizing total reward: close-ups on whoever is talking, minus tiered
//! penalties for cutting too soon after the previous cut. Solved exactly
//! with a dynamic program:
//!
//! # Algorithm
//!
//! 1. **Downsample** the activity pairs by `stride` into decision points;
//!    cuts finer than a few frames are not meaningfully directable.
//! 2. **Forward pass** over states `(camera, cut age)` where cut age is
//!    the number of decision points since the last cut, saturating at
//!    `max_cut_age`. Holding a camera advances its age; switching pays the
//!    penalty for the age being abandoned and resets the age to zero.
//!    Only two score layers are live at once; backpointers for every step
//!    go into one flat preallocated arena for the backtrack.
//! 3. **Backtrack** from the best final state, then **expand** each
//!    decision `stride`-fold and truncate to the input frame count.
//!
//! The penalty table is flat past its last threshold, so age saturation
//! never changes a penalty. Exact score ties are broken deterministically
//! by enumeration order: [`Camera::ALL`] order, lower ages first.

use podcut_common::error::{PodcutError, PodcutResult};
use podcut_edit_model::activity::Activity;
use podcut_edit_model::camera::Camera;

use crate::penalty::CutPenaltyTable;
use crate::scoring::ScoreParams;

/// Configuration for the cut optimizer.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Frames per decision point.
    pub stride: usize,

    /// Maximum tracked decision points since the last cut.
    pub max_cut_age: usize,

    /// Frame scoring parameters.
    pub scoring: ScoreParams,

    /// Cut penalty schedule.
    pub penalties: CutPenaltyTable,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            stride: 5,
            max_cut_age: 300,
            scoring: ScoreParams::default(),
            penalties: CutPenaltyTable::default(),
        }
    }
}

/// Result of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPlan {
    /// Total reward of the chosen sequence.
    pub score: f64,

    /// Camera per decision point, in chronological order.
    pub decisions: Vec<Camera>,

    /// Camera per input frame: `decisions` expanded by the stride and
    /// truncated to the input length.
    pub frames: Vec<Camera>,
}

const CAMERAS: usize = Camera::ALL.len();
const NO_PREDECESSOR: u32 = u32::MAX;

/// Exact cut-sequence optimizer.
pub struct CutOptimizer {
    config: OptimizerConfig,
}

impl CutOptimizer {
    /// Create a new optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Create an optimizer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(OptimizerConfig::default())
    }

    /// Plan cuts for zipped per-frame speaker activity.
    pub fn optimize(&self, pairs: &[(Activity, Activity)]) -> PodcutResult<CutPlan> {
        let scoring = self.config.scoring;
        self.optimize_with_scorer(pairs, |camera, s1, s2| scoring.score(camera, s1, s2))
    }

    /// Plan cuts using a custom frame scorer.
    ///
    /// The scorer must be pure: a frame's reward may depend only on the
    /// camera and the activity pair.
    pub fn optimize_with_scorer<F>(
        &self,
        pairs: &[(Activity, Activity)],
        scorer: F,
    ) -> PodcutResult<CutPlan>
    where
        F: Fn(Camera, Activity, Activity) -> f64,
    {
        if self.config.stride == 0 {
            return Err(PodcutError::config("optimizer stride must be at least 1"));
        }

        let stride = self.config.stride;
        let max_age = self.config.max_cut_age;
        let ages = max_age + 1;
        let states = CAMERAS * ages;
        let state_of = |camera: usize, age: usize| camera * ages + age;

        // Decision points: every stride-th activity pair.
        let points: Vec<(Activity, Activity)> = pairs.iter().copied().step_by(stride).collect();
        let steps = points.len();

        if steps == 0 {
            return Ok(CutPlan {
                score: 0.0,
                decisions: vec![],
                frames: vec![],
            });
        }

        // Two rolling score layers; only the previous step feeds the next.
        let mut prev = vec![f64::NEG_INFINITY; states];
        let mut curr = vec![f64::NEG_INFINITY; states];

        // Flat backpointer arena, one packed state per (step, state).
        let mut back = vec![NO_PREDECESSOR; steps * states];

        let (s1, s2) = points[0];
        for camera in Camera::ALL {
            prev[state_of(camera.index(), 0)] = scorer(camera, s1, s2);
        }

        for step in 1..steps {
            let (s1, s2) = points[step];
            let mut frame_score = [0.0f64; CAMERAS];
            for camera in Camera::ALL {
                frame_score[camera.index()] = scorer(camera, s1, s2);
            }

            curr.fill(f64::NEG_INFINITY);
            let back_step = &mut back[step * states..(step + 1) * states];

            for camera in Camera::ALL {
                let ci = camera.index();
                for prev_camera in Camera::ALL {
                    let pi = prev_camera.index();
                    for prev_age in 0..ages {
                        let prev_score = prev[state_of(pi, prev_age)];
                        if prev_score == f64::NEG_INFINITY {
                            continue;
                        }

                        let (new_age, candidate) = if camera == prev_camera {
                            // Hold: the shot ages, saturating at max_age
                            ((prev_age + 1).min(max_age), prev_score + frame_score[ci])
                        } else {
                            // Cut: pay for the age being abandoned
                            let penalty = self.config.penalties.penalty_for(prev_age);
                            (0, prev_score + frame_score[ci] - penalty)
                        };

                        // Strict improvement only, so the first candidate
                        // in enumeration order wins ties
                        let target = state_of(ci, new_age);
                        if candidate > curr[target] {
                            curr[target] = candidate;
                            back_step[target] = state_of(pi, prev_age) as u32;
                        }
                    }
                }
            }

            std::mem::swap(&mut prev, &mut curr);
        }

        // Best final state; scan order makes exact ties deterministic
        let mut best_score = f64::NEG_INFINITY;
        let mut best_state = 0;
        for camera in Camera::ALL {
            for age in 0..ages {
                let state = state_of(camera.index(), age);
                if prev[state] > best_score {
                    best_score = prev[state];
                    best_state = state;
                }
            }
        }

        // Walk the backpointers into a chronological decision sequence
        let mut decisions = Vec::with_capacity(steps);
        let mut state = best_state;
        let mut step = steps;
        while step > 0 {
            step -= 1;
            decisions.push(Camera::ALL[state / ages]);
            let pointer = back[step * states + state];
            if pointer == NO_PREDECESSOR {
                break;
            }
            state = pointer as usize;
        }
        decisions.reverse();

        let frames = expand_decisions(&decisions, stride, pairs.len());

        Ok(CutPlan {
            score: best_score,
            decisions,
            frames,
        })
    }
}

/// Repeat each decision `stride` times and truncate to `frame_count`.
fn expand_decisions(decisions: &[Camera], stride: usize, frame_count: usize) -> Vec<Camera> {
    let mut frames = Vec::with_capacity(decisions.len() * stride);
    for &camera in decisions {
        for _ in 0..stride {
            frames.push(camera);
        }
    }
    frames.truncate(frame_count);
    frames
}
