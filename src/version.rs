//! Advisory minimum-version check for the required tool.
//!
//! A below-minimum version produces a warning but never changes a verdict —
//! the check is advisory only. Probe failures (tool missing, unparsable
//! output) are likewise non-fatal.

use crate::detect::ToolIdentity;

/// Parse a dotted-numeric version like `9.1.0` or `v20.11.1`.
/// Non-numeric trailing segments (`-beta.2`) are ignored per component.
pub fn parse(s: &str) -> Option<Vec<u64>> {
    let s = s.trim().trim_start_matches('v');
    let parts: Vec<u64> = s
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<u64>()
        })
        .take_while(Result::is_ok)
        .map(|r| r.unwrap_or_default())
        .collect();
    if parts.is_empty() { None } else { Some(parts) }
}

/// Compare two parsed versions component-wise; missing components count as 0.
pub fn meets_minimum(found: &[u64], minimum: &[u64]) -> bool {
    let len = found.len().max(minimum.len());
    for i in 0..len {
        let f = found.get(i).copied().unwrap_or(0);
        let m = minimum.get(i).copied().unwrap_or(0);
        if f != m {
            return f > m;
        }
    }
    true
}

/// Probe `<tool> --version` and warn if it falls short of `minimum`.
/// Never escalates to an error.
pub fn advisory_check(tool: ToolIdentity, minimum: &str) {
    let Some(min) = parse(minimum) else {
        log::warn!("unparsable min_version {minimum:?}; skipping version check");
        return;
    };
    let output = std::process::Command::new(tool.command_name())
        .arg("--version")
        .output();
    let Ok(output) = output else {
        log::debug!("could not probe {tool} --version");
        return;
    };
    let text = String::from_utf8_lossy(&output.stdout);
    let Some(found) = parse(text.trim()) else {
        log::debug!("unparsable {tool} --version output: {:?}", text.trim());
        return;
    };
    if !meets_minimum(&found, &min) {
        log::warn!(
            "{tool} {} is below the advised minimum {minimum}; consider upgrading",
            text.trim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain() {
        assert_eq!(parse("9.1.0"), Some(vec![9, 1, 0]));
    }

    #[test]
    fn parse_v_prefix() {
        assert_eq!(parse("v20.11.1"), Some(vec![20, 11, 1]));
    }

    #[test]
    fn parse_prerelease_suffix() {
        assert_eq!(parse("10.0.0-beta"), Some(vec![10, 0, 0]));
    }

    #[test]
    fn parse_garbage() {
        assert_eq!(parse("not a version"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn compare_equal() {
        assert!(meets_minimum(&[9, 0, 0], &[9, 0, 0]));
    }

    #[test]
    fn compare_above() {
        assert!(meets_minimum(&[9, 1, 0], &[9, 0, 0]));
        assert!(meets_minimum(&[10], &[9, 9, 9]));
    }

    #[test]
    fn compare_below() {
        assert!(!meets_minimum(&[8, 15, 9], &[9, 0, 0]));
    }

    #[test]
    fn compare_different_lengths() {
        assert!(meets_minimum(&[9], &[9, 0, 0]));
        assert!(!meets_minimum(&[9], &[9, 0, 1]));
    }
}
