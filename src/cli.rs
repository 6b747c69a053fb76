use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gvoice", version, about = "Inspect Google Voice feed envelopes and responses offline")]
pub struct Cli {
    /// Config file (default: GVOICE_CONFIG or the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a feed envelope and list its messages
    Decode {
        /// Envelope file, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Feed name the envelope belongs to
        #[arg(long, default_value = "all")]
        folder: String,

        /// Also print the html payload
        #[arg(long)]
        html: bool,
    },

    /// Check a JSON action response for its "ok" marker
    Validate {
        /// Response body file, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the config file location and settings
    Config,
}
