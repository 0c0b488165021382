//! Podcut CLI — Command-line interface for activity detection and cut planning.
//!
//! Usage:
//!   podcut analyze <MIC1> <MIC2> --sample-rate 48000   Plan cuts, write plan.json
//!   podcut detect <MIC1> <MIC2> --sample-rate 48000    Dump per-frame activity
//!   podcut info <PLAN>                                 Summarize a saved plan
//!
//! Audio input is raw mono PCM, 32-bit float little-endian, one file per
//! speaker (`ffmpeg -i ep12-mic1.wav -f f32le -ac 1 mic1.f32`). Decoding
//! and mixdown happen upstream.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::{DetectionArgs, InputArgs, PlanningArgs};

#[derive(Parser)]
#[command(
    name = "podcut",
    about = "Voice-driven multicam cut planning for two-speaker recordings",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze two speaker tracks and write an edit plan
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output path for the plan JSON (defaults under the configured
        /// output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the full per-frame camera sequence in the plan
        #[arg(long)]
        with_frames: bool,

        #[command(flatten)]
        detection: DetectionArgs,

        #[command(flatten)]
        planning: PlanningArgs,
    },

    /// Detect and smooth per-frame speaker activity without planning cuts
    Detect {
        #[command(flatten)]
        input: InputArgs,

        /// Output path for the activity JSON (defaults under the
        /// configured output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        detection: DetectionArgs,
    },

    /// Show a saved edit plan
    Info {
        /// Path to the plan JSON
        plan: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let app_config = podcut_common::config::AppConfig::load();
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        app_config.logging.level.clone()
    };
    podcut_common::logging::init_logging(&podcut_common::config::LoggingConfig {
        level: log_level,
        json: app_config.logging.json,
    });

    match cli.command {
        Commands::Analyze {
            input,
            output,
            with_frames,
            detection,
            planning,
        } => commands::analyze::run(&app_config, input, output, with_frames, detection, planning),
        Commands::Detect {
            input,
            output,
            detection,
        } => commands::detect::run(&app_config, input, output, detection),
        Commands::Info { plan } => commands::info::run(plan),
    }
}
