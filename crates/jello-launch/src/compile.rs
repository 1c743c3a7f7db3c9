//! Conditional compile step (.jello -> .jlo)
//!
//! Source programs are compiled synchronously before the adapter is spawned;
//! the resolver does not return until the compiler has exited. Pre-built
//! artifacts pass through untouched.

use crate::{Error, Result};
use jello_launch_config::constants::{ARTIFACT_SUFFIX, SOURCE_SUFFIX};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Whether a program path identifies Jello source (case-insensitive suffix)
pub(crate) fn is_jello_source(path: &Path) -> bool {
    path.to_string_lossy()
        .to_lowercase()
        .ends_with(SOURCE_SUFFIX)
}

/// Expected artifact path for a source file.
///
/// The matched source suffix is replaced with the artifact suffix. Matching
/// is case-insensitive but the substituted suffix is always lowercase, so
/// `app.JELLO` compiles to `app.jlo`.
///
/// Callers must check [`is_jello_source`] first.
pub(crate) fn artifact_path(source: &Path) -> PathBuf {
    let s = source.to_string_lossy();
    // Suffix is ASCII, so byte-length arithmetic lands on a char boundary.
    let stem = &s[..s.len() - SOURCE_SUFFIX.len()];
    PathBuf::from(format!("{stem}{ARTIFACT_SUFFIX}"))
}

/// Compile `program` if it is Jello source, returning the path to run.
///
/// Invokes the compiler with `program` as its sole argument, blocking until
/// it exits. Fails if the compiler cannot be started, exits non-zero (the
/// cause is the trimmed stderr, falling back to stdout, falling back to a
/// generic exit-code message), or exits zero without producing the expected
/// artifact. Non-source programs are returned unchanged without invoking
/// the compiler.
pub(crate) fn compile_if_needed(program: &Path, jelloc: &Path) -> Result<PathBuf> {
    if !is_jello_source(program) {
        return Ok(program.to_path_buf());
    }

    let artifact = artifact_path(program);
    debug!(
        compiler = %jelloc.display(),
        source = %program.display(),
        "Compiling source before launch"
    );

    let output = Command::new(jelloc).arg(program).output().map_err(|e| {
        Error::CompileFailed(format!("failed to run {}: {}", jelloc.display(), e))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let cause = [stderr.trim(), stdout.trim()]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| match output.status.code() {
                Some(code) => format!("{} failed with exit code {}", jelloc.display(), code),
                None => format!("{} terminated by signal", jelloc.display()),
            });
        return Err(Error::CompileFailed(cause));
    }

    if !artifact.exists() {
        return Err(Error::CompileFailed(format!(
            "expected compiler output not found: {}",
            artifact.display()
        )));
    }

    debug!(artifact = %artifact.display(), "Compile succeeded");
    Ok(artifact)
}
