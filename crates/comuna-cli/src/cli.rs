//! CLI definition using clap

use clap::{Parser, Subcommand};
use comuna_types::{LoadPolicy, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "comuna-registry")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Administrative district (comuna) registry backed by a flat file")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a comuna to the registry
    Add {
        #[arg(long)]
        id: i32,

        #[arg(long)]
        zone: String,

        #[arg(long)]
        population: i32,

        #[arg(long)]
        name: String,

        #[arg(long)]
        code: i32,

        /// Registration date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// List every comuna
    List,

    /// Find comunas in a zone (case-insensitive)
    Zone {
        zone: String,
    },

    /// Find a comuna by id
    Id {
        id: i32,
    },

    /// Find a comuna by name (case-insensitive)
    Name {
        name: String,
    },

    /// Run the sample session: add one comuna and query it back
    Demo,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the store file
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// Set malformed line handling (skip, abort)
        #[arg(long)]
        set_on_malformed: Option<LoadPolicy>,

        /// Set default output format (json, table)
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to default configuration
        #[arg(long)]
        reset: bool,
    },
}
