//! Detect and smooth per-frame speaker activity without planning cuts.

use std::path::PathBuf;

use podcut_common::config::AppConfig;
use podcut_director::pipeline::detect_activity;
use podcut_edit_model::activity::ActivityTracks;

use super::{DetectionArgs, InputArgs};

pub fn run(
    app_config: &AppConfig,
    input: InputArgs,
    output: Option<PathBuf>,
    detection: DetectionArgs,
) -> anyhow::Result<()> {
    let config = super::director_config(&app_config.analysis, &detection, None)?;

    println!("Detecting: {} + {}", input.mic1.display(), input.mic2.display());

    let speaker1 = super::load_track(&input.mic1, input.sample_rate)?;
    let speaker2 = super::load_track(&input.mic2, input.sample_rate)?;

    let (activity1, activity2) = detect_activity(&speaker1, &speaker2, &config)
        .map_err(|e| anyhow::anyhow!("Detection failed: {e}"))?;

    let tracks = ActivityTracks {
        frame_ms: config.vad.frame_ms,
        sample_rate_hz: input.sample_rate,
        speaker1: activity1,
        speaker2: activity2,
    };

    println!("  Frames: {}", tracks.frame_count());
    println!(
        "  Speaker 1 active: {}/{} frames",
        ActivityTracks::active_frames(&tracks.speaker1),
        tracks.frame_count()
    );
    println!(
        "  Speaker 2 active: {}/{} frames",
        ActivityTracks::active_frames(&tracks.speaker2),
        tracks.frame_count()
    );

    let output = output.unwrap_or_else(|| app_config.output_dir.join("activity.json"));
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&tracks)?;
    std::fs::write(&output, json)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;

    println!("\nActivity saved to: {}", output.display());

    Ok(())
}
