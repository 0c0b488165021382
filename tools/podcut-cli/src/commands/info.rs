//! Show a saved edit plan.

use std::path::PathBuf;

use podcut_edit_model::camera::Camera;
use podcut_edit_model::cuts::summarize;
use podcut_edit_model::plan::EditPlan;

pub fn run(plan_path: PathBuf) -> anyhow::Result<()> {
    let plan =
        EditPlan::load(&plan_path).map_err(|e| anyhow::anyhow!("Failed to load plan: {e}"))?;

    println!("Plan: {}", plan_path.display());
    println!("  Version: {}", plan.version);
    println!("  Created: {}", plan.created_at);
    println!(
        "  Frames: {} ({:.1}s at {} ms/frame)",
        plan.total_frames,
        plan.duration_secs(),
        plan.frame_ms
    );
    println!("  Sample rate: {} Hz", plan.sample_rate_hz);
    println!("  Stride: {} frames/decision", plan.stride);
    println!("  Score: {:.1}", plan.score);
    println!();

    let summary = summarize(&plan.cuts);
    let frame_secs = plan.frame_ms as f64 / 1000.0;

    println!("Cuts: {} ({} segments)", summary.cut_count, plan.cuts.len());
    println!(
        "  Mean shot length: {:.1}s",
        summary.mean_shot_frames * frame_secs
    );
    for camera in Camera::ALL {
        let frames = summary.frames_per_camera[camera.index()];
        let share = if plan.total_frames > 0 {
            100.0 * frames as f64 / plan.total_frames as f64
        } else {
            0.0
        };
        println!(
            "  {}: {:.1}s ({:.0}%)",
            camera.label(),
            frames as f64 * frame_secs,
            share
        );
    }

    if plan.frames.is_some() {
        println!();
        println!("Per-frame camera sequence retained.");
    }

    Ok(())
}
