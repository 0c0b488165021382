//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::frame::DEFAULT_FRAME_MS;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory where plans and activity dumps are written when no
    /// explicit output path is given.
    pub output_dir: PathBuf,

    /// Default analysis tuning.
    pub analysis: AnalysisDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default tuning for the analysis pipeline.
///
/// Command-line flags override these per run; the values here are the
/// persistent per-machine baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDefaults {
    /// Analysis frame duration in milliseconds.
    pub frame_ms: u32,

    /// RMS energy a frame must exceed to count as speech.
    pub energy_threshold: f32,

    /// Multiplier one speaker's energy must exceed the other's by to win
    /// a frame outright.
    pub dominance_ratio: f32,

    /// Silences up to this long (seconds) inside ongoing speech are bridged.
    pub silence_bridge_secs: f32,

    /// Minimum talk time (seconds) before speaker 1 bursts count as full speech.
    pub speaker1_min_talk_secs: f32,

    /// Minimum talk time (seconds) for speaker 2.
    pub speaker2_min_talk_secs: f32,

    /// Reward per decision point for a close-up on an active speaker.
    pub closeup_reward: f64,

    /// Reward per decision point for the wide shot while anyone talks.
    pub wide_reward: f64,

    /// Penalty per decision point for a close-up missing the other speaker.
    pub miss_penalty: f64,

    /// Cut-age thresholds (decision points since the last cut) separating
    /// the penalty tiers.
    pub cut_splits: Vec<u32>,

    /// Per-tier cut penalties; holds one more entry than `cut_splits`, the
    /// last being the catch-all for long-held shots.
    pub cut_penalties: Vec<f64>,

    /// Frames per cut decision point.
    pub stride: usize,

    /// Maximum tracked decision points since the last cut.
    pub max_cut_age: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "podcut=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: dirs_default_output(),
            analysis: AnalysisDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            energy_threshold: 0.015,
            dominance_ratio: 2.0,
            silence_bridge_secs: 1.0,
            speaker1_min_talk_secs: 1.0,
            speaker2_min_talk_secs: 0.5,
            closeup_reward: 5.0,
            wide_reward: 4.0,
            miss_penalty: 5.0,
            cut_splits: vec![15, 35],
            cut_penalties: vec![60.0, 35.0, 2.0],
            stride: 5,
            max_cut_age: 300,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("podcut").join("config.json")
}

/// Default output directory for plans.
fn dirs_default_output() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("podcut").join("plans")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analysis_tuning() {
        let defaults = AnalysisDefaults::default();
        assert_eq!(defaults.frame_ms, 30);
        assert_eq!(defaults.energy_threshold, 0.015);
        assert_eq!(defaults.dominance_ratio, 2.0);
        assert_eq!(defaults.speaker1_min_talk_secs, 1.0);
        assert_eq!(defaults.speaker2_min_talk_secs, 0.5);
        assert_eq!(defaults.cut_splits, vec![15, 35]);
        assert_eq!(defaults.cut_penalties, vec![60.0, 35.0, 2.0]);
        assert_eq!(defaults.stride, 5);
        assert_eq!(defaults.max_cut_age, 300);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.analysis.stride, config.analysis.stride);
        assert_eq!(parsed.analysis.cut_penalties, config.analysis.cut_penalties);
        assert_eq!(parsed.logging.level, config.logging.level);
        assert_eq!(parsed.output_dir, config.output_dir);
    }
}
