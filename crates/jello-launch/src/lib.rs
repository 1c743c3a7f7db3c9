//! Jello launch - debug-launch resolution for the Jello VM
//!
//! This crate does not implement the Debug Adapter Protocol. It turns a
//! partially specified launch request into the exact process invocation that
//! starts the Jello VM as a DAP adapter (`jello -debugger program.jlo`),
//! compiling `.jello` source into a `.jlo` artifact first when needed.
//!
//! # Architecture
//!
//! Resolution is an explicit two-stage pipeline:
//! - [`Resolver::resolve`] fills in defaults, picks the working directory and
//!   tool paths from layered sources, and runs the conditional compile step,
//!   producing a [`ResolvedLaunch`] or a single user-facing error.
//! - [`ProcessDescriptor::build`] maps a resolved launch plus the settings
//!   layer to the command line, working directory, and environment of the
//!   adapter process. It cannot be called without a `ResolvedLaunch` in hand.
//!
//! [`DebugSession`] wraps the pipeline for hosts that drive the two stages
//! dynamically, turning out-of-order calls into loud sequencing errors.

mod compile;
mod descriptor;
mod error;
mod request;
mod resolve;
mod session;

pub use descriptor::ProcessDescriptor;
pub use error::{Error, Result};
pub use request::{LaunchRequest, WorkspaceContext};
pub use resolve::{ResolvedLaunch, Resolver};
pub use session::{DebugSession, SessionState};
