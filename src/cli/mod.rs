//! CLI interface for note-sensor

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Condition analog sensor readings into note states
#[derive(Parser)]
#[command(name = "note-sensor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "note-sensor.yaml")]
        config: PathBuf,
    },

    /// Run the instrument over recorded readings
    Replay {
        /// Configuration file path
        #[arg(short, long, default_value = "note-sensor.yaml")]
        config: PathBuf,

        /// Capture file with raw readings per pin
        #[arg(short = 'i', long)]
        capture: PathBuf,

        /// Number of cycles (default: length of the longest recording)
        #[arg(short = 'n', long)]
        cycles: Option<usize>,

        /// Only print readings whose state changed or went out of range
        #[arg(long)]
        changes_only: bool,

        /// Print JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print a linearization curve
    Curve {
        /// Sensor kind (potentiometer/pot, infrared_distance/ir)
        #[arg(short, long)]
        kind: String,

        /// Raw step between rows
        #[arg(short, long, default_value = "32")]
        step: u16,
    },

    /// Generate an example configuration file
    Init,
}
