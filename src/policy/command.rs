/// An attempted command: a name plus its ordered arguments.
///
/// Immutable once received; created per invocation and discarded after the
/// dispatcher acts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The bare command name (first token of the invocation).
    pub name: String,
    /// Arguments, in order, unmodified.
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Build from an argv slice: first element is the name, rest are args.
    /// Returns `None` for an empty slice.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (name, args) = argv.split_first()?;
        Some(Self::new(name.clone(), args.to_vec()))
    }

    /// Shell-quoted display form of the full invocation.
    pub fn display(&self) -> String {
        let words = std::iter::once(self.name.as_str()).chain(self.args.iter().map(String::as_str));
        // try_join only fails on embedded NULs; fall back to plain join
        shlex::try_join(words.clone()).unwrap_or_else(|_| words.collect::<Vec<_>>().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_argv_splits_name_and_args() {
        let argv = vec!["npm".to_string(), "install".to_string(), "-D".to_string()];
        let cmd = Command::from_argv(&argv).unwrap();
        assert_eq!(cmd.name, "npm");
        assert_eq!(cmd.args, vec!["install", "-D"]);
    }

    #[test]
    fn from_argv_empty() {
        assert_eq!(Command::from_argv(&[]), None);
    }

    #[test]
    fn display_joins_plain_words() {
        let cmd = Command::new("npm", vec!["install".into()]);
        assert_eq!(cmd.display(), "npm install");
    }

    #[test]
    fn display_quotes_spaces() {
        let cmd = Command::new("yarn", vec!["add".into(), "left pad".into()]);
        // Quoting style is shlex's; the display must round-trip to the
        // original words.
        let words = shlex::split(&cmd.display()).unwrap();
        assert_eq!(words, vec!["yarn", "add", "left pad"]);
    }
}
