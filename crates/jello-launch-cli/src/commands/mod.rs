//! CLI command implementations

pub mod init;
pub mod launch;
pub mod resolve;

use anyhow::{Context, Result};
use clap::Args;
use jello_launch::{LaunchRequest, WorkspaceContext};
use jello_launch_config::paths::discover_settings_path;
use jello_launch_config::{load_or_default, Settings};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Launch-request fields shared by `resolve` and `launch`
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Program to debug (.jello source or .jlo artifact)
    pub program: Option<PathBuf>,

    /// Launch-request JSON file (editor launch configuration); flags win
    /// over fields from the file
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Working directory for the adapter process
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Workspace root used for working-directory and library-path defaults
    #[arg(long)]
    pub workspace_root: Option<PathBuf>,

    /// Override the jello VM executable
    #[arg(long)]
    pub jello_path: Option<String>,

    /// Override the jelloc compiler executable
    #[arg(long)]
    pub jelloc_path: Option<String>,

    /// Override the runtime library search path
    #[arg(long)]
    pub lib_path: Option<String>,
}

impl RequestArgs {
    /// Build the launch request and ambient context from the arguments.
    ///
    /// A `--request` file supplies the base request; explicit flags override
    /// its fields one by one.
    pub fn into_request(self) -> Result<(LaunchRequest, WorkspaceContext)> {
        let mut request = match &self.request {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read request file {}", path.display()))?;
                serde_json::from_str::<LaunchRequest>(&content)
                    .with_context(|| format!("failed to parse request file {}", path.display()))?
            }
            None => LaunchRequest::default(),
        };

        if self.program.is_some() {
            request.program = self.program;
        }
        if self.cwd.is_some() {
            request.cwd = self.cwd;
        }
        if self.jello_path.is_some() {
            request.jello_path = self.jello_path;
        }
        if self.jelloc_path.is_some() {
            request.jelloc_path = self.jelloc_path;
        }
        if self.lib_path.is_some() {
            request.jello_lib_path = self.lib_path;
        }

        let context = WorkspaceContext {
            workspace_root: self.workspace_root,
            active_document: None,
        };

        Ok((request, context))
    }
}

/// Load settings from the explicit `--config` path or the discovered one.
///
/// An explicit path must exist; the discovered path falls back to defaults
/// when absent.
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => {
            let settings = jello_launch_config::load_settings(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?;
            debug!(path = %path.display(), "Loaded settings from --config");
            Ok(settings)
        }
        None => {
            let (path, source) = discover_settings_path();
            debug!(path = %path.display(), source, "Loading settings");
            load_or_default(&path).context("failed to load settings")
        }
    }
}
