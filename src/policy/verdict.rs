use crate::detect::DetectionEvidence;
use crate::policy::Command;

/// Why a command was allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    /// The name is on the allowlist; package-manager policy never applied.
    Allowlisted,
    /// The name classified as the configured required tool.
    RequiredTool,
}

/// Payload of a BLOCK verdict: what was detected and what was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocked {
    pub evidence: DetectionEvidence,
    pub command: Command,
}

/// Outcome of policy evaluation for one command.
///
/// A pure function of (command, allowlist, required tool) produces this;
/// `Block` carries everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow(AllowReason),
    Passthrough,
    Block(Box<Blocked>),
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Allow(_) => "ALLOW",
            Verdict::Passthrough => "PASSTHROUGH",
            Verdict::Block(_) => "BLOCK",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow(_) => "allow",
            Verdict::Passthrough => "passthrough",
            Verdict::Block(_) => "block",
        }
    }

    /// One-line reason for the verdict log.
    pub fn reason(&self) -> String {
        match self {
            Verdict::Allow(AllowReason::Allowlisted) => "allowlisted".into(),
            Verdict::Allow(AllowReason::RequiredTool) => "required tool".into(),
            Verdict::Passthrough => "not a package-manager command".into(),
            Verdict::Block(b) => {
                format!("{} via {}", b.evidence.identity, b.evidence.method)
            }
        }
    }

    /// Whether the dispatcher may execute the command.
    pub fn permits_execution(&self) -> bool {
        !matches!(self, Verdict::Block(_))
    }
}
