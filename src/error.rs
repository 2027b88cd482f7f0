use thiserror::Error;

/// Failures outside normal policy evaluation.
///
/// A policy BLOCK is not an error — it is a [`Verdict`](crate::policy::Verdict)
/// with its own rendering and exit code. These variants cover everything else:
/// delegation failures and unusable configuration.
#[derive(Debug, Error)]
pub enum GateError {
    /// The delegated command does not exist on the system. Distinct from a
    /// policy block; reported as a plain message, never as a block report.
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// The delegated command exists but could not be executed.
    #[error("failed to execute {name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Startup-time configuration problem: unknown required tool, malformed
    /// allowlist, or an unreadable user overlay. Fatal — the policy cannot be
    /// evaluated safely.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GateError {
    /// Process exit code for this failure, following shell conventions:
    /// 127 for "not found", 126 for "found but not executable", 2 for
    /// configuration/usage problems.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::CommandNotFound(_) => 127,
            GateError::Spawn { .. } => 126,
            GateError::Config(_) => 2,
        }
    }
}
