//! Debugger settings
//!
//! The settings layer consulted during tool-path resolution and descriptor
//! building. Read-only after load; string values that are absent or empty
//! are treated as unset so that fallback resolution applies.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAUSE_ALL_ACTORS;

/// Default exception-breakpoint mode, applied before any protocol-level
/// breakpoint negotiation by the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExceptionMode {
    /// Never break on exceptions
    Never,
    /// Break on uncaught exceptions (default)
    #[default]
    Uncaught,
    /// Break on all thrown exceptions
    All,
}

impl ExceptionMode {
    /// Wire value passed verbatim to the VM
    pub fn as_str(&self) -> &'static str {
        match self {
            ExceptionMode::Never => "never",
            ExceptionMode::Uncaught => "uncaught",
            ExceptionMode::All => "all",
        }
    }
}

impl std::fmt::Display for ExceptionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debugger settings from the `[debugger]` table of the settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebuggerSettings {
    /// Path to the jello VM executable
    #[serde(default)]
    pub jello_path: Option<String>,
    /// Path to the jelloc compiler executable
    #[serde(default)]
    pub jelloc_path: Option<String>,
    /// Runtime library search path
    #[serde(default)]
    pub jello_lib_path: Option<String>,
    /// Whether all actors pause together on a breakpoint hit
    #[serde(default = "default_pause_all_actors")]
    pub pause_all_actors: bool,
    /// Default exception-breakpoint mode
    #[serde(default)]
    pub exception_breakpoints: ExceptionMode,
}

fn default_pause_all_actors() -> bool {
    DEFAULT_PAUSE_ALL_ACTORS
}

impl Default for DebuggerSettings {
    fn default() -> Self {
        Self {
            jello_path: None,
            jelloc_path: None,
            jello_lib_path: None,
            pause_all_actors: DEFAULT_PAUSE_ALL_ACTORS,
            exception_breakpoints: ExceptionMode::default(),
        }
    }
}

impl DebuggerSettings {
    /// VM path setting, with empty values treated as unset
    pub fn jello_path(&self) -> Option<&str> {
        non_empty(self.jello_path.as_deref())
    }

    /// Compiler path setting, with empty values treated as unset
    pub fn jelloc_path(&self) -> Option<&str> {
        non_empty(self.jelloc_path.as_deref())
    }

    /// Library path setting, with empty values treated as unset
    pub fn jello_lib_path(&self) -> Option<&str> {
        non_empty(self.jello_lib_path.as_deref())
    }
}

/// Top-level settings file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Debug launcher settings
    #[serde(default)]
    pub debugger: DebuggerSettings,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
