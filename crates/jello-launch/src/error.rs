//! Error types for launch resolution

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Required field absent after defaulting
    ///
    /// No program path could be determined from the request or the active
    /// document. Recoverable: the host may retry with corrected input.
    #[error("missing \"program\" in launch configuration")]
    MissingProgram,

    /// Compile step failures
    ///
    /// The compiler could not start, exited non-zero, or produced no
    /// artifact. The payload is the exact user-visible cause (captured
    /// stderr, falling back to stdout, falling back to a generic exit-code
    /// message). Recoverable: the launch attempt is abandoned, nothing was
    /// spawned.
    #[error("compile failed: {0}")]
    CompileFailed(String),

    /// Session driven out of order
    ///
    /// A descriptor was requested before resolution ran, or a session was
    /// resolved twice. This indicates an integration bug, not a user error,
    /// and must fail loudly rather than be swallowed.
    #[error("{0}")]
    Sequencing(&'static str),
}
