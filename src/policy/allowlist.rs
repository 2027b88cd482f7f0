use std::collections::HashSet;

use crate::error::GateError;

/// Command names exempt from package-manager policy entirely.
///
/// Built once from configuration at process start, read-only thereafter.
/// Membership is exact-match and overrides any tool classification — an
/// allowed name short-circuits to ALLOW even if it coincides with a
/// recognized alternate-tool name.
#[derive(Debug, Clone)]
pub struct AllowedSet {
    names: HashSet<String>,
}

impl AllowedSet {
    /// Build from configured names. Blank entries are a configuration error:
    /// an empty allowlist name would never match anything and almost always
    /// indicates a mangled config file.
    pub fn from_names(names: &[String]) -> Result<Self, GateError> {
        for name in names {
            if name.trim().is_empty() {
                return Err(GateError::Config(
                    "allowlist contains a blank command name".into(),
                ));
            }
        }
        Ok(Self {
            names: names.iter().cloned().collect(),
        })
    }

    /// Exact-match membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
