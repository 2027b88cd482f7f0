//! Ambient tool inference for install-time hooks.
//!
//! When no explicit command is supplied (the `--check` path), the tool in
//! effect is inferred from an ordered list of signal sources, first match
//! wins:
//!
//! 1. **User agent** — the invoking package manager's self-identification
//!    string (`npm_config_user_agent`), passed in by the caller. Trusted
//!    first because it reflects the current command's actual origin.
//! 2. **Lock files** — marker artifacts in the working directory, the
//!    required tool's artifact checked before alternates. Static on-disk
//!    evidence; may be residual from a previous install.
//! 3. **Fallback** — `Unknown`.
//!
//! Inputs arrive as explicit arguments rather than ad-hoc environment reads,
//! so inference is testable without mutating the process environment.

use std::fmt;
use std::path::Path;

use super::identity::ToolIdentity;

/// Which signal produced a detected identity. Used only for user-facing
/// messaging; control decisions use the identity alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionMethod {
    /// The command name itself named the tool.
    ExplicitCommand,
    /// The invoking tool's user-agent string.
    UserAgent,
    /// A lock artifact found in the working directory.
    LockFile(String),
    /// No signal matched.
    Fallback,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionMethod::ExplicitCommand => f.write_str("explicit command name"),
            DetectionMethod::UserAgent => f.write_str("user agent"),
            DetectionMethod::LockFile(name) => write!(f, "lock file ({name})"),
            DetectionMethod::Fallback => f.write_str("fallback"),
        }
    }
}

/// A detected identity together with the signal that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionEvidence {
    pub identity: ToolIdentity,
    pub method: DetectionMethod,
}

impl DetectionEvidence {
    pub fn new(identity: ToolIdentity, method: DetectionMethod) -> Self {
        Self { identity, method }
    }
}

/// Infer which package manager is currently in effect.
///
/// Signal sources are tried in priority order and short-circuit: once one
/// matches, later sources are not consulted.
pub fn infer_ambient_tool(
    required: ToolIdentity,
    user_agent: Option<&str>,
    dir: &Path,
) -> DetectionEvidence {
    if let Some(ua) = user_agent
        && let Some(evidence) = from_user_agent(ua)
    {
        return evidence;
    }
    if let Some(evidence) = from_lock_files(required, dir) {
        return evidence;
    }
    DetectionEvidence::new(ToolIdentity::Unknown, DetectionMethod::Fallback)
}

/// Parse a user-agent string like `pnpm/9.1.0 npm/? node/v20.11.1 linux x64`.
/// The first `tool/version` token identifies the invoker.
fn from_user_agent(user_agent: &str) -> Option<DetectionEvidence> {
    let first = user_agent.split_whitespace().next()?;
    let name = first.split('/').next()?;
    let identity = ToolIdentity::classify(name);
    if !identity.is_known() {
        return None;
    }
    Some(DetectionEvidence::new(identity, DetectionMethod::UserAgent))
}

/// Check for lock artifacts in `dir`: the required tool's artifacts first,
/// then the remaining known tools in canonical order. First hit wins.
fn from_lock_files(required: ToolIdentity, dir: &Path) -> Option<DetectionEvidence> {
    let mut order = vec![required];
    order.extend(ToolIdentity::KNOWN.iter().copied().filter(|t| *t != required));

    for tool in order {
        for name in tool.lock_files() {
            if dir.join(name).is_file() {
                return Some(DetectionEvidence::new(
                    tool,
                    DetectionMethod::LockFile((*name).to_string()),
                ));
            }
        }
    }
    None
}
