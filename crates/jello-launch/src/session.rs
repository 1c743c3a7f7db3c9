//! Debug session state machine
//!
//! A session moves through exactly three states:
//! `Unresolved` -> `Resolved` -> `Launched`, with no skipped and no backward
//! transitions. The typed pipeline ([`Resolver`] then
//! [`ProcessDescriptor::build`]) cannot be driven out of order; this wrapper
//! exists for hosts that sequence the stages dynamically and turns
//! out-of-order calls into loud [`Error::Sequencing`] failures instead of
//! silent misbehavior.

use crate::descriptor::ProcessDescriptor;
use crate::request::{LaunchRequest, WorkspaceContext};
use crate::resolve::{ResolvedLaunch, Resolver};
use crate::{Error, Result};
use jello_launch_config::DebuggerSettings;

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Raw request received, not yet resolved
    Unresolved,
    /// Resolution succeeded; descriptor not yet handed out
    Resolved,
    /// Descriptor handed to the host for spawning
    Launched,
}

/// One debug session: a launch request and its single resolution.
///
/// Each request yields exactly one resolution or none; a failed resolve
/// leaves the session `Unresolved` and the host free to retry with
/// corrected input.
#[derive(Debug)]
pub struct DebugSession {
    request: LaunchRequest,
    context: WorkspaceContext,
    resolved: Option<ResolvedLaunch>,
    launched: bool,
}

impl DebugSession {
    pub fn new(request: LaunchRequest, context: WorkspaceContext) -> Self {
        Self {
            request,
            context,
            resolved: None,
            launched: false,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.resolved, self.launched) {
            (None, _) => SessionState::Unresolved,
            (Some(_), false) => SessionState::Resolved,
            (Some(_), true) => SessionState::Launched,
        }
    }

    pub fn request(&self) -> &LaunchRequest {
        &self.request
    }

    /// Resolution attached to this session, if resolve has run
    pub fn resolved(&self) -> Option<&ResolvedLaunch> {
        self.resolved.as_ref()
    }

    /// Run the resolver once for this session.
    ///
    /// Re-resolving an already resolved session is a sequencing error; the
    /// attached resolution is never recomputed or replaced.
    pub fn resolve(&mut self, resolver: &Resolver) -> Result<&ResolvedLaunch> {
        if self.resolved.is_some() {
            return Err(Error::Sequencing("launch request was already resolved"));
        }

        let resolved = resolver.resolve(&self.request, &self.context)?;
        Ok(self.resolved.insert(resolved))
    }

    /// Descriptor for the resolved launch, moving the session to `Launched`.
    ///
    /// Fails loudly when resolve was never run - that is an integration bug
    /// in the caller's sequencing, not a user error.
    pub fn descriptor(&mut self, settings: &DebuggerSettings) -> Result<ProcessDescriptor> {
        let resolved = self.resolved.as_ref().ok_or(Error::Sequencing(
            "missing resolved configuration (resolve did not run before building the adapter command)",
        ))?;

        let descriptor = ProcessDescriptor::build(resolved, settings);
        self.launched = true;
        Ok(descriptor)
    }
}
