use anyhow::Result;
use colored::*;

use crate::paths::WellKnownDirs;

pub fn handle_dirs(dirs: &WellKnownDirs) -> Result<()> {
    println!("{}", "Poac directories:".bold());
    println!("  {}  {}", "state".cyan(), dirs.state_dir().display());
    println!("  {}  {}", "cache".cyan(), dirs.cache_dir().display());
    println!("  {}  {}", "token".cyan(), dirs.token_dir().display());
    println!("  {}   {}", "deps".cyan(), dirs.current_deps_dir().display());
    Ok(())
}
