use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poac", version, about = "Poac: Package Manager for C++")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new poac project
    New {
        /// Project name
        name: String,

        /// Seed from an existing directory instead of the built-in templates
        #[arg(long, value_name = "DIR")]
        from: Option<PathBuf>,
    },

    /// Show the well-known poac directories
    Dirs,
}
