//! pm-gate: a wrapper that enforces a single package manager per project.
//!
//! This crate classifies an attempted command and returns one of three
//! verdicts: [`policy::Verdict::Allow`], [`policy::Verdict::Block`], or
//! [`policy::Verdict::Passthrough`]. Allowed and passed-through commands are
//! re-invoked transparently; blocked invocations of a disallowed package
//! manager get a boxed, width-aligned diagnostic instead of silently
//! diverging lockfiles.
//!
//! # Architecture
//!
//! - **[`detect`]** — Tool classification: command-name matching, ambient
//!   inference from the user-agent string and lock artifacts.
//! - **[`policy`]** — Interception engine: allowlist, verdict types, the
//!   decide algorithm.
//! - **[`render`]** — Block-report formatting with display-width-aware box
//!   alignment.
//! - **[`dispatch`]** — Process delegation with exec semantics and exact
//!   exit-code propagation.
//! - **[`config`]** — Configuration loading: embedded defaults + user
//!   overlay merge.
//! - **[`logging`]** — Verdict logging to `~/.local/share/pm-gate/verdicts.log`.
//! - **[`version`]** — Advisory minimum-version check (warns, never blocks).

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Tool-identity classification and ambient signal inference.
pub mod detect;
/// Transparent process delegation.
pub mod dispatch;
/// Failure types outside normal policy evaluation.
pub mod error;
/// File-based verdict logging and stderr advisory logging.
pub mod logging;
/// The interception engine: allowlist, verdicts, decide.
pub mod policy;
/// Box-drawn block-report rendering.
pub mod render;
/// Advisory version comparison for the required tool.
pub mod version;

use policy::{Command, PolicyEngine, Verdict};

/// Build the engine from default config and decide a command.
///
/// This is the main entry point for tests and simple usage.
/// For CLI usage with a user overlay, build the engine directly.
pub fn decide(name: &str, args: &[&str]) -> Verdict {
    let config = config::Config::default_config();
    let engine =
        PolicyEngine::from_config(&config).expect("default config must yield a valid engine");
    let command = Command::new(name, args.iter().map(|s| s.to_string()).collect());
    engine.decide(&command)
}
