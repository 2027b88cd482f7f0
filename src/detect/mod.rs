//! Package-manager detection: name classification and ambient inference.
//!
//! [`ToolIdentity::classify`] resolves a raw command name to a tool identity
//! (exact match, side-effect free). [`infer_ambient_tool`] determines which
//! tool is currently in effect when no explicit command is given, from an
//! ordered list of signal sources.

pub mod ambient;
pub mod identity;

pub use ambient::{DetectionEvidence, DetectionMethod, infer_ambient_tool};
pub use identity::ToolIdentity;
