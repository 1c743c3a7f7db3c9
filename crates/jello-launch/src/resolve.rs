//! Configuration resolver
//!
//! Turns a partially specified [`LaunchRequest`] plus ambient context into a
//! fully specified [`ResolvedLaunch`]. Every defaulted value comes from an
//! ordered chain of sources evaluated first-to-last; exactly one source wins,
//! no merging. Resolution either succeeds completely or fails with a single
//! user-facing error - partial resolution is never exposed.

use crate::compile::compile_if_needed;
use crate::request::{LaunchRequest, WorkspaceContext};
use crate::{Error, Result};
use jello_launch_config::constants::{
    DEFAULT_JELLOC_TOOL, DEFAULT_JELLO_TOOL, ENV_JELLO_PATH, INSTALL_BIN_DIR, WORKSPACE_LIBS_DIR,
};
use jello_launch_config::DebuggerSettings;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fully specified launch, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLaunch {
    /// VM executable; possibly a bare name resolved via the search path
    pub tool_path: PathBuf,
    /// Working directory for the adapter process
    pub cwd: PathBuf,
    /// Artifact actually executed; differs from the requested program only
    /// when the compile step substituted a built artifact
    pub program_to_run: PathBuf,
    /// Runtime library search path, when one could be determined
    pub lib_path: Option<PathBuf>,
}

/// Resolves launch requests against the settings layer and ambient context.
///
/// The `JELLO_PATH` installation root is read once at construction; a
/// resolver observes one consistent environment for its lifetime.
#[derive(Debug, Clone)]
pub struct Resolver {
    settings: DebuggerSettings,
    install_root: Option<PathBuf>,
}

impl Resolver {
    /// Resolver reading the installation root from the process environment
    pub fn from_env(settings: DebuggerSettings) -> Self {
        let install_root = std::env::var(ENV_JELLO_PATH)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(settings, install_root)
    }

    /// Resolver with an explicit installation root (injectable for tests)
    pub fn new(settings: DebuggerSettings, install_root: Option<PathBuf>) -> Self {
        Self {
            settings,
            install_root,
        }
    }

    /// Settings layer this resolver consults
    pub fn settings(&self) -> &DebuggerSettings {
        &self.settings
    }

    /// Resolve a launch request.
    ///
    /// Steps, in order, each short-circuiting to failure:
    /// 1. Default `program` from the active document; fail if still unset.
    /// 2. Pick the working directory: explicit `cwd` > workspace root >
    ///    directory containing `program`.
    /// 3. Resolve the VM, compiler, and library paths from their layered
    ///    sources (explicit override > environment-derived > settings >
    ///    built-in fallback).
    /// 4. Compile `.jello` source into the expected `.jlo` artifact,
    ///    blocking until the compiler exits.
    pub fn resolve(
        &self,
        request: &LaunchRequest,
        context: &WorkspaceContext,
    ) -> Result<ResolvedLaunch> {
        let program = first_of([
            request.program.clone(),
            context.active_document.clone(),
        ])
        .ok_or(Error::MissingProgram)?;

        let cwd = first_of([request.cwd.clone(), context.workspace_root.clone()])
            .unwrap_or_else(|| program_dir(&program));

        let tool_path = self.tool_path(
            request.jello_path(),
            self.settings.jello_path(),
            DEFAULT_JELLO_TOOL,
        );
        let jelloc_path = self.tool_path(
            request.jelloc_path(),
            self.settings.jelloc_path(),
            DEFAULT_JELLOC_TOOL,
        );
        let lib_path = self.lib_path(
            request.jello_lib_path(),
            context.workspace_root.as_deref(),
        );

        let program_to_run = compile_if_needed(&program, &jelloc_path)?;

        debug!(
            tool = %tool_path.display(),
            cwd = %cwd.display(),
            program = %program_to_run.display(),
            "Launch request resolved"
        );

        Ok(ResolvedLaunch {
            tool_path,
            cwd,
            program_to_run,
            lib_path,
        })
    }

    /// Executable path for one tool: explicit override > derived from the
    /// installation root (`<root>/../bin/<tool>`) > settings value > bare
    /// tool name resolved via the search path.
    ///
    /// Derived paths are not validated eagerly; a stale installation root
    /// surfaces as an OS error at spawn time.
    fn tool_path(&self, explicit: Option<&str>, setting: Option<&str>, tool: &str) -> PathBuf {
        first_of([
            explicit.map(PathBuf::from),
            self.install_root
                .as_ref()
                .map(|root| root.join("..").join(INSTALL_BIN_DIR).join(tool)),
            setting.map(PathBuf::from),
        ])
        .unwrap_or_else(|| PathBuf::from(tool))
    }

    /// Library search path: explicit override > installation root itself >
    /// settings value > `libs` under the workspace root > none.
    fn lib_path(&self, explicit: Option<&str>, workspace_root: Option<&Path>) -> Option<PathBuf> {
        first_of([
            explicit.map(PathBuf::from),
            self.install_root.clone(),
            self.settings.jello_lib_path().map(PathBuf::from),
            workspace_root.map(|ws| ws.join(WORKSPACE_LIBS_DIR)),
        ])
    }
}

/// First present value among ordered candidates.
///
/// The generic combinator behind every layered default in this module:
/// candidates are listed in precedence order and the first one present wins.
fn first_of<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    candidates.into_iter().flatten().next()
}

/// Directory containing a program, with `.` for a bare filename
fn program_dir(program: &Path) -> PathBuf {
    match program.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
