//! Analyze two speaker tracks and write an edit plan.

use std::path::PathBuf;

use podcut_common::config::AppConfig;
use podcut_director::pipeline::analyze_tracks;
use podcut_edit_model::camera::Camera;
use podcut_edit_model::cuts::{segments_from_frames, summarize};
use podcut_edit_model::plan::EditPlan;

use super::{DetectionArgs, InputArgs, PlanningArgs};

pub fn run(
    app_config: &AppConfig,
    input: InputArgs,
    output: Option<PathBuf>,
    with_frames: bool,
    detection: DetectionArgs,
    planning: PlanningArgs,
) -> anyhow::Result<()> {
    let config = super::director_config(&app_config.analysis, &detection, Some(&planning))?;

    println!("Analyzing: {} + {}", input.mic1.display(), input.mic2.display());

    let speaker1 = super::load_track(&input.mic1, input.sample_rate)?;
    let speaker2 = super::load_track(&input.mic2, input.sample_rate)?;
    println!(
        "  Loaded {:.1}s + {:.1}s of audio at {} Hz",
        speaker1.duration_secs(),
        speaker2.duration_secs(),
        input.sample_rate
    );

    let analysis = analyze_tracks(&speaker1, &speaker2, &config)
        .map_err(|e| anyhow::anyhow!("Analysis failed: {e}"))?;

    let cuts = segments_from_frames(&analysis.plan.frames);
    let summary = summarize(&cuts);

    let mut plan = EditPlan::new(
        analysis.frame_ms,
        analysis.sample_rate_hz,
        analysis.plan.frames.len(),
        analysis.plan.score,
        config.optimizer.stride,
        cuts,
    );
    if with_frames {
        plan.frames = Some(analysis.plan.frames.clone());
    }

    let frame_secs = analysis.frame_ms as f64 / 1000.0;
    println!("  Analyzed {} frames ({:.1}s)", plan.total_frames, plan.duration_secs());
    println!("  Optimal score: {:.1}", plan.score);
    println!(
        "  Cuts: {} (mean shot {:.1}s)",
        summary.cut_count,
        summary.mean_shot_frames * frame_secs
    );
    for camera in Camera::ALL {
        let frames = summary.frames_per_camera[camera.index()];
        println!(
            "  {}: {:.1}s",
            camera.label(),
            frames as f64 * frame_secs
        );
    }

    let output = output.unwrap_or_else(|| app_config.output_dir.join("plan.json"));
    plan.save(&output)
        .map_err(|e| anyhow::anyhow!("Failed to save plan: {e}"))?;

    println!("\nPlan saved to: {}", output.display());

    Ok(())
}
