//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use examscore::dataset::DEFAULT_DATASET_FILE;

/// examscore: exam score lookup and statistics
#[derive(Parser)]
#[command(name = "examscore")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the dataset JSON file
    #[arg(
        short,
        long,
        global = true,
        env = "EXAMSCORE_DATA",
        default_value = DEFAULT_DATASET_FILE
    )]
    pub data: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dataset over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port for web server
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,

        /// Origin allowed to call the API (repeatable; default: any origin)
        #[arg(long = "allowed-origin", env = "ALLOWED_ORIGINS", value_delimiter = ',')]
        allowed_origins: Vec<String>,
    },

    /// Show dataset metadata and record counts
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up candidates by registration number
    Lookup {
        /// Registration numbers (SBD)
        #[arg(value_name = "SBD", required = true)]
        sbds: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List candidates whose total score lies in a range
    Range {
        /// Lower bound, inclusive (default: 0)
        #[arg(long, allow_hyphen_values = true)]
        min: Option<String>,

        /// Upper bound, inclusive (default: 30)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show statistics for one examination council
    Council {
        /// Council code (ma_hd); "05" and "5" are the same council
        #[arg(value_name = "MA_HD")]
        code: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the highest total scores
    Top {
        /// Number of candidates (default: 10)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        limit: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
