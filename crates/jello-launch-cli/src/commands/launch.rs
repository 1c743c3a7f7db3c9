//! Launch command - resolve and spawn the VM as a debug adapter
//!
//! Drives a full [`DebugSession`] the way an editor host would: resolve,
//! build the descriptor, spawn. The adapter's stdio is inherited so the
//! editor (or terminal) on the other side of our stdio speaks DAP directly
//! to the VM; the child's exit status becomes our own.

use super::{load_settings, RequestArgs};
use anyhow::{Context, Result};
use jello_launch::{DebugSession, Resolver};
use std::path::Path;
use tracing::{debug, info};

pub fn run(config: Option<&Path>, args: RequestArgs) -> Result<i32> {
    let settings = load_settings(config)?;
    let (request, context) = args.into_request()?;

    let resolver = Resolver::from_env(settings.debugger.clone());
    let mut session = DebugSession::new(request, context);

    session.resolve(&resolver)?;
    let descriptor = session.descriptor(&settings.debugger)?;

    info!(
        program = %descriptor.program.display(),
        cwd = %descriptor.cwd.display(),
        "Spawning debug adapter"
    );
    debug!(args = ?descriptor.args, "Adapter arguments");

    // Ownership of the adapter ends here: no monitoring or restart, only
    // waiting so the exit status can be propagated.
    let status = descriptor
        .to_command()
        .status()
        .with_context(|| format!("failed to spawn {}", descriptor.program.display()))?;

    debug!(?status, "Debug adapter exited");
    Ok(status.code().unwrap_or(1))
}
