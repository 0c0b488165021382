//! Podcut Common Utilities
//!
//! Shared infrastructure for all podcut crates:
//! - Error types and result aliases
//! - Frame timing math used by every analysis stage
//! - Tracing/logging initialization
//! - Configuration loading

pub mod config;
pub mod error;
pub mod frame;
pub mod logging;

pub use config::*;
pub use error::*;
pub use frame::*;
