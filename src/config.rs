use serde::{Deserialize, Serialize};

use crate::detect::ToolIdentity;
use crate::error::GateError;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub allowlist: Allowlist,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Name of the single package manager this installation accepts.
    pub required: String,
    /// Advisory minimum version for the required tool; shortfalls warn,
    /// never block.
    #[serde(default)]
    pub min_version: Option<String>,
    /// Override for the reference link in the block report.
    #[serde(default)]
    pub reference_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            required: "pnpm".into(),
            min_version: None,
            reference_url: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Allowlist {
    #[serde(default)]
    pub commands: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    allowlist: AllowlistOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    required: Option<String>,
    min_version: Option<String>,
    reference_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct AllowlistOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    commands: Vec<String>,
    #[serde(default)]
    remove_commands: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/pm-gate/config.toml (if exists)
    ///
    /// A malformed overlay is a startup-time fatal error: the policy must
    /// not run against a half-applied configuration.
    pub fn load() -> Result<Self, GateError> {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay()? {
            config.apply_overlay(overlay);
        }
        Ok(config)
    }

    /// Reference link for the block report: configured override, or the
    /// required tool's documentation.
    pub fn reference_url(&self, required: ToolIdentity) -> String {
        self.settings
            .reference_url
            .clone()
            .unwrap_or_else(|| required.help_url().to_string())
    }

    /// Try to load user overlay from ~/.config/pm-gate/config.toml.
    fn load_overlay() -> Result<Option<ConfigOverlay>, GateError> {
        let Some(home) = std::env::var_os("HOME") else {
            return Ok(None);
        };
        let path = std::path::Path::new(&home).join(".config/pm-gate/config.toml");
        let Ok(content) = std::fs::read_to_string(path) else {
            return Ok(None);
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| GateError::Config(format!("user config parse error: {e}")))
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.required {
            self.settings.required = v;
        }
        if let Some(v) = s.min_version {
            self.settings.min_version = Some(v);
        }
        if let Some(v) = s.reference_url {
            self.settings.reference_url = Some(v);
        }

        let a = overlay.allowlist;
        merge_list(
            &mut self.allowlist.commands,
            a.commands,
            &a.remove_commands,
            a.replace,
        );
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert_eq!(config.settings.required, "pnpm");
        assert!(!config.allowlist.commands.is_empty());
    }

    #[test]
    fn default_config_has_expected_commands() {
        let config = Config::default_config();
        assert!(config.allowlist.commands.contains(&"git".to_string()));
        assert!(config.allowlist.commands.contains(&"ls".to_string()));
        assert!(config.allowlist.commands.contains(&"which".to_string()));
    }

    #[test]
    fn default_min_version_unset() {
        let config = Config::default_config();
        assert!(config.settings.min_version.is_none());
    }

    #[test]
    fn default_reference_url_follows_required_tool() {
        let config = Config::default_config();
        assert_eq!(
            config.reference_url(ToolIdentity::Pnpm),
            "https://pnpm.io/only-allow-pnpm"
        );
    }

    #[test]
    fn configured_reference_url_wins() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            reference_url = "https://example.com/docs"
        "#,
        );
        assert_eq!(
            config.reference_url(ToolIdentity::Pnpm),
            "https://example.com/docs"
        );
    }

    // ── Merge semantics ──

    #[test]
    fn overlay_extends_allowlist() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [allowlist]
            commands = ["just"]
        "#,
        );
        assert!(config.allowlist.commands.contains(&"git".to_string()));
        assert!(config.allowlist.commands.contains(&"just".to_string()));
    }

    #[test]
    fn overlay_removes_from_allowlist() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [allowlist]
            remove_commands = ["echo", "cat"]
        "#,
        );
        assert!(!config.allowlist.commands.contains(&"echo".to_string()));
        assert!(!config.allowlist.commands.contains(&"cat".to_string()));
        assert!(config.allowlist.commands.contains(&"git".to_string()));
    }

    #[test]
    fn overlay_replace_allowlist() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [allowlist]
            replace = true
            commands = ["git", "ls"]
        "#,
        );
        assert_eq!(config.allowlist.commands, vec!["git", "ls"]);
    }

    #[test]
    fn overlay_no_duplicates() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [allowlist]
            commands = ["git"]
        "#,
        );
        let count = config
            .allowlist
            .commands
            .iter()
            .filter(|s| *s == "git")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn overlay_required_override() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            required = "yarn"
        "#,
        );
        assert_eq!(config.settings.required, "yarn");
    }

    #[test]
    fn overlay_min_version_override() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            min_version = "9.0.0"
        "#,
        );
        assert_eq!(config.settings.min_version.as_deref(), Some("9.0.0"));
    }

    #[test]
    fn overlay_omitted_settings_unchanged() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [allowlist]
            commands = ["just"]
        "#,
        );
        assert_eq!(config.settings.required, "pnpm");
        assert!(config.settings.min_version.is_none());
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(config.settings.required, original.settings.required);
        assert_eq!(
            config.allowlist.commands.len(),
            original.allowlist.commands.len()
        );
    }
}
