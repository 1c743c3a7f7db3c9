//! Default constants for the Jello debug launcher
//!
//! Centralizes the environment variable names, tool names, and file suffix
//! conventions shared between the resolver, the descriptor builder, and the
//! CLI. Everything that is an external contract should be here.

// ============================================================================
// ENVIRONMENT VARIABLES (consumed)
// ============================================================================

/// Jello installation root. When set, default tool paths are derived as
/// `<root>/../bin/<tool>` and the library path defaults to the root itself.
pub const ENV_JELLO_PATH: &str = "JELLO_PATH";

/// Settings file path override
pub const ENV_JELLO_DEBUGGER_CONFIG: &str = "JELLO_DEBUGGER_CONFIG";

// ============================================================================
// ENVIRONMENT VARIABLES (produced on the adapter process)
// ============================================================================

/// Pause-all-actors flag, encoded as "1" or "0"
pub const ENV_DAP_PAUSE_ALL: &str = "JELLO_DAP_PAUSE_ALL";

/// Default exception-breakpoint mode, encoded verbatim (never|uncaught|all)
pub const ENV_DAP_EXCEPTION: &str = "JELLO_DAP_EXCEPTION";

// ============================================================================
// TOOLS
// ============================================================================

/// Jello VM executable name (resolved via PATH when no other source applies)
pub const DEFAULT_JELLO_TOOL: &str = "jello";

/// Jello compiler executable name
pub const DEFAULT_JELLOC_TOOL: &str = "jelloc";

/// Directory under the installation prefix holding the tool binaries
pub const INSTALL_BIN_DIR: &str = "bin";

// ============================================================================
// FILE SUFFIXES
// ============================================================================

/// Source file suffix, matched case-insensitively
pub const SOURCE_SUFFIX: &str = ".jello";

/// Compiled artifact suffix, always substituted in lowercase
pub const ARTIFACT_SUFFIX: &str = ".jlo";

// ============================================================================
// ADAPTER INVOCATION
// ============================================================================

/// Mode flag that starts the VM as a DAP server on stdio. The VM treats the
/// first positional token as a mode selector, so this must come first.
pub const DEBUGGER_FLAG: &str = "-debugger";

// ============================================================================
// WORKSPACE
// ============================================================================

/// Workspace subdirectory used as the library-path fallback
pub const WORKSPACE_LIBS_DIR: &str = "libs";

// ============================================================================
// SETTINGS DEFAULTS
// ============================================================================

/// Default for the pause-all-actors setting
pub const DEFAULT_PAUSE_ALL_ACTORS: bool = true;
