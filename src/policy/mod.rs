//! The interception engine: combines detection and the allowlist into a
//! verdict for each attempted command.

pub mod allowlist;
pub mod command;
pub mod verdict;

pub use allowlist::AllowedSet;
pub use command::Command;
pub use verdict::{AllowReason, Blocked, Verdict};

use crate::config::Config;
use crate::detect::{DetectionEvidence, DetectionMethod, ToolIdentity};
use crate::error::GateError;

/// Policy engine for one process lifetime.
///
/// Holds the configured required tool and the allowlist; both are fixed at
/// construction, so [`decide`](PolicyEngine::decide) is a pure function of
/// its input command.
pub struct PolicyEngine {
    required: ToolIdentity,
    allowed: AllowedSet,
}

impl PolicyEngine {
    /// Build the engine from configuration.
    ///
    /// Fails when the configured required tool is not a recognized package
    /// manager or the allowlist is malformed — the policy cannot be
    /// evaluated safely in either case.
    pub fn from_config(config: &Config) -> Result<Self, GateError> {
        let required = ToolIdentity::classify(&config.settings.required);
        if !required.is_known() {
            return Err(GateError::Config(format!(
                "required tool {:?} is not a recognized package manager",
                config.settings.required
            )));
        }
        let allowed = AllowedSet::from_names(&config.allowlist.commands)?;
        Ok(Self { required, allowed })
    }

    pub fn new(required: ToolIdentity, allowed: AllowedSet) -> Self {
        Self { required, allowed }
    }

    pub fn required(&self) -> ToolIdentity {
        self.required
    }

    /// Decide the verdict for an attempted command.
    ///
    /// 1. Allowlisted names → ALLOW, before any classification.
    /// 2. Names that classify to no known tool → PASSTHROUGH (not a
    ///    package-manager command, so none of this engine's business).
    /// 3. The required tool (including platform-suffixed variants) → ALLOW.
    /// 4. Any other recognized tool → BLOCK, carrying the evidence and the
    ///    original command for rendering.
    pub fn decide(&self, command: &Command) -> Verdict {
        if self.allowed.contains(&command.name) {
            return Verdict::Allow(AllowReason::Allowlisted);
        }

        let identity = ToolIdentity::classify(&command.name);
        if !identity.is_known() {
            return Verdict::Passthrough;
        }
        if identity == self.required {
            return Verdict::Allow(AllowReason::RequiredTool);
        }

        Verdict::Block(Box::new(Blocked {
            evidence: DetectionEvidence::new(identity, DetectionMethod::ExplicitCommand),
            command: command.clone(),
        }))
    }
}
