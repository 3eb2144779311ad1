use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agrimitra", version, about = "Farm advisory web service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and geographic reference data
    Check,
    /// List the registered advisory rules
    Rules,
    /// Run the advisor on a farm profile JSON file and print the records
    Advise {
        /// Path to a JSON file containing a farm profile
        input: PathBuf,
    },
}
