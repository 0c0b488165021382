//! Podcut Edit Model
//!
//! Defines the core data contracts for podcut edits:
//! - **Audio:** Mono sample buffers with their sample rate
//! - **Activity:** Per-frame speaker activity values and track bundles
//! - **Cameras:** The wide / close-up-1 / close-up-2 shot vocabulary
//! - **Cuts & plans:** Camera segments and the persisted plan artifact
//!
//! Activity values and cut positions are indexed in analysis frames; the
//! frame duration they were produced under travels with every persisted
//! artifact so consumers can convert back to seconds.

pub mod activity;
pub mod audio;
pub mod camera;
pub mod cuts;
pub mod plan;

pub use activity::*;
pub use audio::*;
pub use camera::*;
pub use cuts::*;
pub use plan::*;
