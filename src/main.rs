mod cli;
mod copy;
mod handlers;
mod paths;
mod templates;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use handlers::{dirs, new};
use paths::WellKnownDirs;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Derived once from the environment; immutable afterwards.
    let well_known = WellKnownDirs::discover()?;

    match cli.command {
        Commands::New { name, from } => new::handle_new(&well_known, &name, from.as_deref()),
        Commands::Dirs => dirs::handle_dirs(&well_known),
    }
}
