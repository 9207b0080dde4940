//! Command line tokenization and execution results

use serde::{Deserialize, Serialize};

/// How a raw command line is split into argv tokens.
///
/// Neither policy understands quoting or escaping: shell operators such as
/// `|`, `>` or `*` are passed through as literal arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Split on every single space; consecutive spaces produce empty tokens
    #[default]
    Literal,
    /// Split on runs of spaces; empty tokens are dropped
    Collapse,
}

/// A tokenized command: the program to launch plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Build a command line from an explicit program and argument list
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a raw command line into program and arguments.
    ///
    /// Returns `None` when the input is blank; blank input never reaches
    /// the runner.
    pub fn parse(raw: &str, policy: SplitPolicy) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let mut tokens: Vec<String> = match policy {
            SplitPolicy::Literal => raw.split(' ').map(str::to_string).collect(),
            SplitPolicy::Collapse => raw
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        };

        let program = tokens.remove(0);
        Some(Self {
            program,
            args: tokens,
        })
    }

    /// Full argv, program first
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Captured output of a command that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Everything the child wrote to stdout, one `\n` per line
    pub stdout: String,
    /// Everything the child wrote to stderr, one `\n` per line
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// The child process could not be created
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LaunchError {
    /// Program that failed to launch
    pub program: String,
    /// Underlying OS message
    pub message: String,
}

impl LaunchError {
    pub fn new(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            message: message.into(),
        }
    }

    pub(crate) fn from_io(program: &str, err: &std::io::Error) -> Self {
        Self::new(program, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_spaces() {
        let cmd = CommandLine::parse("echo a b", SplitPolicy::Literal).unwrap();
        assert_eq!(cmd.argv(), vec!["echo", "a", "b"]);
    }

    #[test]
    fn test_parse_literal_keeps_empty_tokens() {
        let cmd = CommandLine::parse("echo  a", SplitPolicy::Literal).unwrap();
        assert_eq!(cmd.program, "echo");
        assert_eq!(cmd.args, vec!["", "a"]);
    }

    #[test]
    fn test_parse_collapse_drops_empty_tokens() {
        let cmd = CommandLine::parse("  echo   a  b ", SplitPolicy::Collapse).unwrap();
        assert_eq!(cmd.argv(), vec!["echo", "a", "b"]);
    }

    #[test]
    fn test_parse_leading_space_gives_empty_program() {
        let cmd = CommandLine::parse(" ls", SplitPolicy::Literal).unwrap();
        assert_eq!(cmd.program, "");
        assert_eq!(cmd.args, vec!["ls"]);
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(CommandLine::parse("", SplitPolicy::Literal).is_none());
        assert!(CommandLine::parse("   ", SplitPolicy::Literal).is_none());
        assert!(CommandLine::parse("   ", SplitPolicy::Collapse).is_none());
    }

    #[test]
    fn test_parse_shell_operators_are_literal() {
        let cmd = CommandLine::parse("ls | grep x > out", SplitPolicy::Literal).unwrap();
        assert_eq!(cmd.args, vec!["|", "grep", "x", ">", "out"]);
    }

    #[test]
    fn test_tabs_are_not_separators() {
        let cmd = CommandLine::parse("echo\ta", SplitPolicy::Literal).unwrap();
        assert_eq!(cmd.program, "echo\ta");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_display_joins_argv() {
        let cmd = CommandLine::new("ls", ["-l", "/tmp"]);
        assert_eq!(cmd.to_string(), "ls -l /tmp");
    }

    #[test]
    fn test_result_success_iff_zero() {
        let ok = CommandResult {
            exit_code: 0,
            ..Default::default()
        };
        let failed = CommandResult {
            exit_code: 2,
            ..Default::default()
        };
        assert!(ok.success());
        assert!(!failed.success());
    }

    #[test]
    fn test_launch_error_displays_message() {
        let err = LaunchError::new("nope", "No such file or directory (os error 2)");
        assert_eq!(err.to_string(), "No such file or directory (os error 2)");
    }
}
