//! Init command - create the default settings file
//!
//! Path resolution priority:
//! 1. `--config <path>` (explicit CLI argument)
//! 2. `JELLO_DEBUGGER_CONFIG` environment variable
//! 3. `~/jello/debugger.toml` (default)

use anyhow::{Context, Result};
use jello_launch_config::paths::discover_settings_path;
use jello_launch_config::ensure_default_settings;
use std::path::Path;

pub fn run(config: Option<&Path>, force: bool) -> Result<()> {
    let settings_path = match config {
        Some(path) => path.to_path_buf(),
        None => discover_settings_path().0,
    };

    if settings_path.exists() && !force {
        println!("Settings file already exists at:");
        println!("  {}", settings_path.display());
        println!();
        println!("Use --force to overwrite it with the default settings.");
        return Ok(());
    }

    if settings_path.exists() && force {
        std::fs::remove_file(&settings_path).with_context(|| {
            format!(
                "failed to remove existing settings at {}",
                settings_path.display()
            )
        })?;
    }

    let created = ensure_default_settings(&settings_path).with_context(|| {
        format!("failed to create settings at {}", settings_path.display())
    })?;

    println!("Created settings file:");
    println!("  {}", created.display());

    Ok(())
}
