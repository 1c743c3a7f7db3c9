//! Settings file loading
//!
//! Provides functions to load launcher settings from TOML files:
//!
//! - [`load_settings`] - Strict loader, errors if file missing (no side effects)
//! - [`load_or_default`] - Missing file yields defaults, malformed file errors
//! - [`ensure_default_settings`] - Creates the default settings file

use crate::paths::ensure_parent_dir;
use crate::Settings;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default settings file template written by `jello-launch init`
pub const DEFAULT_SETTINGS: &str = r#"# Jello debug launcher settings
#
# Tool paths left unset are resolved from the JELLO_PATH installation root
# or from the executable search path.

[debugger]
# Path to the jello VM executable.
# jello_path = "/opt/jello/bin/jello"

# Path to the jelloc compiler executable.
# jelloc_path = "/opt/jello/bin/jelloc"

# Runtime library search path, exported as JELLO_PATH to the VM.
# jello_lib_path = "/opt/jello/lib"

# Pause every actor together when a breakpoint is hit.
pause_all_actors = true

# Default exception-breakpoint mode: "never", "uncaught", or "all".
# The editor's own breakpoint configuration may override this per session.
exception_breakpoints = "uncaught"
"#;

/// Errors that can occur during settings loading
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings file not found: {0}. Run 'jello-launch init' to create it.")]
    NotFound(PathBuf),

    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load settings from a TOML file (strict - no side effects)
///
/// Does NOT create files if missing (returns [`SettingsError::NotFound`]).
/// Use [`ensure_default_settings`] (via `jello-launch init`) to create one.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Err(SettingsError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "Loading settings file");
    let content = std::fs::read_to_string(path)?;
    load_settings_from_str(&content)
}

/// Load settings from a TOML string
pub fn load_settings_from_str(content: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = toml::from_str(content)?;
    Ok(settings)
}

/// Load settings, falling back to defaults when the file is absent.
///
/// A missing file is not an error: every setting has a usable default and
/// tool paths fall back to the executable search path. A present but
/// malformed file is still an error, so typos do not silently disable
/// configuration.
pub fn load_or_default(path: &Path) -> Result<Settings, SettingsError> {
    match load_settings(path) {
        Ok(settings) => Ok(settings),
        Err(SettingsError::NotFound(_)) => {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            Ok(Settings::default())
        }
        Err(e) => Err(e),
    }
}

/// Create the default settings file at the specified path.
///
/// Does nothing if the file already exists. Parent directories are created
/// as needed. Returns the path to the settings file.
pub fn ensure_default_settings(path: &Path) -> Result<PathBuf, std::io::Error> {
    if path.exists() {
        debug!(path = %path.display(), "Settings file already exists");
        return Ok(path.to_path_buf());
    }

    ensure_parent_dir(path)?;

    debug!(path = %path.display(), "Writing default settings file");
    std::fs::write(path, DEFAULT_SETTINGS)?;

    Ok(path.to_path_buf())
}
