//! Configuration types and loading for the Jello debug launcher
//!
//! This crate provides:
//! - Debugger settings structures (tool overrides, breakpoint defaults)
//! - Settings file loading (TOML format)
//! - Path utilities and shared constants
//!
//! # Architecture
//!
//! Configuration is an infrastructure concern and lives outside the
//! resolution logic. The core crate depends on this one for the settings
//! layer it consults during tool-path resolution and descriptor building.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jello_launch_config::{load_or_default, paths::discover_settings_path};
//!
//! let (path, source) = discover_settings_path();
//! let settings = load_or_default(&path)?;
//! ```

mod loader;
mod settings;

// Default constants shared across the workspace
pub mod constants;

// Path utilities
pub mod paths;

pub use loader::{
    ensure_default_settings, load_or_default, load_settings, load_settings_from_str, SettingsError,
    DEFAULT_SETTINGS,
};
pub use settings::{DebuggerSettings, ExceptionMode, Settings};
