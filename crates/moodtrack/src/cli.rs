use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moodtrack")]
#[command(version)]
#[command(about = "Mood check-ins, recommendations and mood history")]
pub struct Cli {
    /// JSON file overriding classifier thresholds
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a piece of text and show the scoring
    Classify {
        /// Text to classify
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the full classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive check-in session on stdin
    Session {
        /// Seed for affirmation selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the wellness library
    Library,

    /// Print version information
    Version,
}
