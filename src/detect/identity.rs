//! Package-manager identity classification.

use std::fmt;

/// Identity of a package-manager tool.
///
/// Total: every command name maps to exactly one variant via [`classify`],
/// with `Unknown` as the catch-all. Only this module constructs identities
/// from strings.
///
/// [`classify`]: ToolIdentity::classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolIdentity {
    Npm,
    Pnpm,
    Yarn,
    Bun,
    Cnpm,
    Unknown,
}

/// Windows launcher suffixes that resolve to the same executable.
const EXECUTABLE_SUFFIXES: &[&str] = &[".cmd", ".exe"];

impl ToolIdentity {
    /// All recognized package managers, in canonical order. `Unknown` is
    /// deliberately absent.
    pub const KNOWN: &'static [ToolIdentity] = &[
        ToolIdentity::Npm,
        ToolIdentity::Pnpm,
        ToolIdentity::Yarn,
        ToolIdentity::Bun,
        ToolIdentity::Cnpm,
    ];

    /// Classify a bare command name into an identity.
    ///
    /// Case-sensitive exact match — no substring or prefix matching — against
    /// each tool's canonical name and its enumerated platform suffix variants
    /// (`npm.cmd`, `npm.exe`, ...). Never invokes the command.
    pub fn classify(name: &str) -> ToolIdentity {
        for tool in Self::KNOWN {
            let base = tool.command_name();
            if name == base {
                return *tool;
            }
            if let Some(rest) = name.strip_prefix(base)
                && EXECUTABLE_SUFFIXES.contains(&rest)
            {
                return *tool;
            }
        }
        ToolIdentity::Unknown
    }

    /// Canonical executable name for this tool.
    pub fn command_name(self) -> &'static str {
        match self {
            ToolIdentity::Npm => "npm",
            ToolIdentity::Pnpm => "pnpm",
            ToolIdentity::Yarn => "yarn",
            ToolIdentity::Bun => "bun",
            ToolIdentity::Cnpm => "cnpm",
            ToolIdentity::Unknown => "unknown",
        }
    }

    /// Lock artifacts this tool writes, in detection priority order.
    /// cnpm shares npm's registry protocol but writes no lockfile of its own,
    /// so lock-file inference never yields `Cnpm`.
    pub fn lock_files(self) -> &'static [&'static str] {
        match self {
            ToolIdentity::Npm => &["package-lock.json"],
            ToolIdentity::Pnpm => &["pnpm-lock.yaml"],
            ToolIdentity::Yarn => &["yarn.lock"],
            ToolIdentity::Bun => &["bun.lockb", "bun.lock"],
            ToolIdentity::Cnpm | ToolIdentity::Unknown => &[],
        }
    }

    /// Primary lock artifact, used in remediation text.
    pub fn lock_file(self) -> Option<&'static str> {
        self.lock_files().first().copied()
    }

    /// Reference link shown in the block report when this tool is required.
    pub fn help_url(self) -> &'static str {
        match self {
            ToolIdentity::Npm => "https://docs.npmjs.com/cli/commands/npm-install",
            ToolIdentity::Pnpm => "https://pnpm.io/only-allow-pnpm",
            ToolIdentity::Yarn => "https://yarnpkg.com/getting-started/install",
            ToolIdentity::Bun => "https://bun.sh/docs/cli/install",
            ToolIdentity::Cnpm => "https://npmmirror.com",
            ToolIdentity::Unknown => "https://nodejs.org/api/corepack.html",
        }
    }

    /// True for every variant except `Unknown`.
    pub fn is_known(self) -> bool {
        self != ToolIdentity::Unknown
    }
}

impl fmt::Display for ToolIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_canonical_names() {
        assert_eq!(ToolIdentity::classify("npm"), ToolIdentity::Npm);
        assert_eq!(ToolIdentity::classify("pnpm"), ToolIdentity::Pnpm);
        assert_eq!(ToolIdentity::classify("yarn"), ToolIdentity::Yarn);
        assert_eq!(ToolIdentity::classify("bun"), ToolIdentity::Bun);
        assert_eq!(ToolIdentity::classify("cnpm"), ToolIdentity::Cnpm);
    }

    #[test]
    fn classify_platform_suffixes() {
        assert_eq!(ToolIdentity::classify("npm.cmd"), ToolIdentity::Npm);
        assert_eq!(ToolIdentity::classify("pnpm.exe"), ToolIdentity::Pnpm);
        assert_eq!(ToolIdentity::classify("yarn.cmd"), ToolIdentity::Yarn);
    }

    #[test]
    fn classify_unknown() {
        assert_eq!(ToolIdentity::classify("cargo"), ToolIdentity::Unknown);
        assert_eq!(ToolIdentity::classify("git"), ToolIdentity::Unknown);
        assert_eq!(ToolIdentity::classify(""), ToolIdentity::Unknown);
    }

    #[test]
    fn classify_is_exact_not_prefix() {
        // Substring / prefix matches must not classify
        assert_eq!(ToolIdentity::classify("npmx"), ToolIdentity::Unknown);
        assert_eq!(ToolIdentity::classify("npm2"), ToolIdentity::Unknown);
        assert_eq!(ToolIdentity::classify("my-npm"), ToolIdentity::Unknown);
        assert_eq!(ToolIdentity::classify("npm.sh"), ToolIdentity::Unknown);
    }

    #[test]
    fn classify_is_case_sensitive() {
        assert_eq!(ToolIdentity::classify("NPM"), ToolIdentity::Unknown);
        assert_eq!(ToolIdentity::classify("Pnpm"), ToolIdentity::Unknown);
    }

    #[test]
    fn cnpm_has_no_lock_file() {
        assert_eq!(ToolIdentity::Cnpm.lock_file(), None);
    }

    #[test]
    fn bun_has_two_lock_files() {
        assert_eq!(ToolIdentity::Bun.lock_files(), &["bun.lockb", "bun.lock"]);
        assert_eq!(ToolIdentity::Bun.lock_file(), Some("bun.lockb"));
    }

    #[test]
    fn known_excludes_unknown() {
        assert!(!ToolIdentity::KNOWN.contains(&ToolIdentity::Unknown));
    }
}
