//! Path utilities for the Jello debug launcher
//!
//! Provides home directory expansion and settings file discovery.
//! Works cross-platform (Unix: ~/jello, Windows: %USERPROFILE%\jello).

use std::path::{Path, PathBuf};

use crate::constants::ENV_JELLO_DEBUGGER_CONFIG;

/// Default jello data directory name
pub const JELLO_DIR_NAME: &str = "jello";

/// Default settings filename
pub const DEFAULT_SETTINGS_FILENAME: &str = "debugger.toml";

/// Get user's jello home directory.
///
/// Returns `~/jello` on Unix or `%USERPROFILE%\jello` on Windows.
/// Falls back to current directory if home cannot be determined.
pub fn jello_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(JELLO_DIR_NAME)
}

/// Get default settings file path.
///
/// Returns `~/jello/debugger.toml`.
pub fn default_settings_path() -> PathBuf {
    jello_home().join(DEFAULT_SETTINGS_FILENAME)
}

/// Discover the settings file path from multiple sources.
///
/// Resolution order:
/// 1. `JELLO_DEBUGGER_CONFIG` environment variable (if set and non-empty)
/// 2. Default settings path (`~/jello/debugger.toml`)
///
/// Returns a tuple of (path, source) where source describes where the path
/// came from. An explicit `--config` CLI argument takes precedence over both
/// and is handled by the caller.
pub fn discover_settings_path() -> (PathBuf, &'static str) {
    if let Ok(settings_path) = std::env::var(ENV_JELLO_DEBUGGER_CONFIG) {
        if !settings_path.is_empty() {
            let path = expand_tilde(Path::new(&settings_path));
            return (path, "JELLO_DEBUGGER_CONFIG env var");
        }
    }

    (default_settings_path(), "default location")
}

/// Expand tilde (~) in path to user's home directory.
///
/// Paths without a leading tilde are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(stripped)
    } else {
        path.to_path_buf()
    }
}

/// Ensure parent directory of a path exists.
///
/// Creates the parent directory and all intermediate directories if they
/// don't exist. Does nothing if the path has no parent or the parent already
/// exists.
///
/// # Errors
/// Returns an error if directory creation fails (e.g., permission denied).
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
