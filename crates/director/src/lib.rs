//! Podcut Director
//!
//! Turns two synchronized speaker tracks into an optimal multicam cut
//! sequence:
//! - **Voice activity:** Per-frame RMS energy with dominance resolution
//!   for cross-talk
//! - **Smoothing:** Silence-gap bridging and weak-burst labeling
//! - **Cut planning:** Exact dynamic program over (camera, cut age) with
//!   tiered cut penalties and stride expansion
//!
//! This crate is pure computation: no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod optimizer;
pub mod penalty;
pub mod pipeline;
pub mod scoring;
pub mod smooth;
pub mod vad;

pub use optimizer::CutOptimizer;
pub use pipeline::analyze_tracks;
pub use vad::ActivityDetector;
