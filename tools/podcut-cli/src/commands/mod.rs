//! CLI subcommand implementations and shared argument plumbing.

pub mod analyze;
pub mod detect;
pub mod info;

use std::path::{Path, PathBuf};

use clap::Args;

use podcut_common::config::AnalysisDefaults;
use podcut_common::error::PodcutError;
use podcut_director::optimizer::OptimizerConfig;
use podcut_director::penalty::CutPenaltyTable;
use podcut_director::pipeline::DirectorConfig;
use podcut_director::scoring::ScoreParams;
use podcut_director::vad::VadConfig;
use podcut_edit_model::audio::AudioTrack;

/// Input tracks shared by the analysis commands.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Speaker 1 microphone track (raw f32le mono PCM)
    pub mic1: PathBuf,

    /// Speaker 2 microphone track (raw f32le mono PCM)
    pub mic2: PathBuf,

    /// Sample rate of both tracks (Hz)
    #[arg(long)]
    pub sample_rate: u32,
}

/// Detection and smoothing overrides. Unset flags fall back to the
/// config file.
#[derive(Debug, Args)]
pub struct DetectionArgs {
    /// Analysis frame duration in milliseconds
    #[arg(long)]
    pub frame_ms: Option<u32>,

    /// RMS energy threshold for speech
    #[arg(long)]
    pub energy_threshold: Option<f32>,

    /// Dominance ratio for resolving cross-talk
    #[arg(long)]
    pub dominance: Option<f32>,

    /// Longest silence (seconds) bridged inside ongoing speech
    #[arg(long)]
    pub silence_bridge: Option<f32>,

    /// Minimum talk time (seconds) for speaker 1 bursts
    #[arg(long)]
    pub min_talk1: Option<f32>,

    /// Minimum talk time (seconds) for speaker 2 bursts
    #[arg(long)]
    pub min_talk2: Option<f32>,
}

/// Cut-planning overrides. Unset flags fall back to the config file.
#[derive(Debug, Args)]
pub struct PlanningArgs {
    /// Reward per decision point for a close-up on an active speaker
    #[arg(long)]
    pub closeup_reward: Option<f64>,

    /// Reward per decision point for the wide shot while anyone talks
    #[arg(long)]
    pub wide_reward: Option<f64>,

    /// Penalty per decision point for a close-up missing the other speaker
    #[arg(long)]
    pub miss_penalty: Option<f64>,

    /// Frames per cut decision point
    #[arg(long)]
    pub stride: Option<usize>,

    /// Maximum tracked decision points since the last cut
    #[arg(long)]
    pub max_cut_age: Option<usize>,
}

/// Merge config-file defaults with command-line overrides.
///
/// The cut penalty table always comes from the config file; there is no
/// flag syntax for the tier vectors.
pub fn director_config(
    defaults: &AnalysisDefaults,
    detection: &DetectionArgs,
    planning: Option<&PlanningArgs>,
) -> anyhow::Result<DirectorConfig> {
    let vad = VadConfig {
        frame_ms: detection.frame_ms.unwrap_or(defaults.frame_ms),
        energy_threshold: detection
            .energy_threshold
            .unwrap_or(defaults.energy_threshold),
        dominance_ratio: detection.dominance.unwrap_or(defaults.dominance_ratio),
    };

    let penalties =
        CutPenaltyTable::new(defaults.cut_splits.clone(), defaults.cut_penalties.clone())
            .map_err(|e| anyhow::anyhow!("Invalid cut penalty table in config: {e}"))?;

    let mut optimizer = OptimizerConfig {
        stride: defaults.stride,
        max_cut_age: defaults.max_cut_age,
        scoring: ScoreParams {
            closeup_reward: defaults.closeup_reward,
            wide_reward: defaults.wide_reward,
            miss_penalty: defaults.miss_penalty,
        },
        penalties,
    };
    if let Some(planning) = planning {
        if let Some(value) = planning.closeup_reward {
            optimizer.scoring.closeup_reward = value;
        }
        if let Some(value) = planning.wide_reward {
            optimizer.scoring.wide_reward = value;
        }
        if let Some(value) = planning.miss_penalty {
            optimizer.scoring.miss_penalty = value;
        }
        if let Some(value) = planning.stride {
            optimizer.stride = value;
        }
        if let Some(value) = planning.max_cut_age {
            optimizer.max_cut_age = value;
        }
    }

    Ok(DirectorConfig {
        vad,
        silence_bridge_secs: detection
            .silence_bridge
            .unwrap_or(defaults.silence_bridge_secs),
        speaker1_min_talk_secs: detection
            .min_talk1
            .unwrap_or(defaults.speaker1_min_talk_secs),
        speaker2_min_talk_secs: detection
            .min_talk2
            .unwrap_or(defaults.speaker2_min_talk_secs),
        optimizer,
    })
}

/// Load a raw f32le mono PCM file as an audio track.
pub fn load_track(path: &Path, sample_rate_hz: u32) -> anyhow::Result<AudioTrack> {
    if !path.exists() {
        return Err(PodcutError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Loaded raw PCM track"
    );

    Ok(AudioTrack::from_f32le_bytes(&bytes, sample_rate_hz))
}
