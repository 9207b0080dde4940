//! Colour-tagged record of everything shown in the output pane

use super::command::{CommandResult, LaunchError};

/// The kind of text appended to the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Prompt plus the command the user submitted
    PromptEcho,
    /// Captured standard output
    Stdout,
    /// Captured standard error
    Stderr,
    /// Status line of a command that exited with code 0
    Success,
    /// Status line of a command that exited with a non-zero code
    Failure,
    /// The command could not be launched
    Error,
}

/// A block of text in the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn prompt_echo(prompt: &str, command: &str) -> Self {
        Self::new(EntryKind::PromptEcho, format!("{}{}\n", prompt, command))
    }

    /// Status line for an exit code, coloured by success
    pub fn exit_status(exit_code: i32) -> Self {
        let kind = if exit_code == 0 {
            EntryKind::Success
        } else {
            EntryKind::Failure
        };
        Self::new(kind, format!("Exit code: {}\n", exit_code))
    }

    pub fn launch_error(err: &LaunchError) -> Self {
        Self::new(EntryKind::Error, format!("Error: {}\n", err))
    }
}

/// Entries appended for one finished command, in display order.
///
/// Stdout comes before stderr; empty streams produce no entry.
pub fn entries_for_outcome(outcome: &Result<CommandResult, LaunchError>) -> Vec<TranscriptEntry> {
    match outcome {
        Ok(result) => {
            let mut entries = Vec::with_capacity(3);
            if !result.stdout.is_empty() {
                entries.push(TranscriptEntry::new(EntryKind::Stdout, &result.stdout));
            }
            if !result.stderr.is_empty() {
                entries.push(TranscriptEntry::new(EntryKind::Stderr, &result.stderr));
            }
            entries.push(TranscriptEntry::exit_status(result.exit_code));
            entries
        }
        Err(err) => vec![TranscriptEntry::launch_error(err)],
    }
}

/// Append-only record of everything shown in the output pane
#[derive(Debug, Clone)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    /// Oldest entries are dropped past this count (0 = unbounded)
    max_entries: usize,
}

impl Transcript {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
        self.truncate();
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = TranscriptEntry>) {
        self.entries.extend(entries);
        self.truncate();
    }

    /// Record a finished command
    pub fn record_outcome(&mut self, outcome: &Result<CommandResult, LaunchError>) {
        self.extend(entries_for_outcome(outcome));
    }

    /// All entry text concatenated, without colour information
    pub fn plain_text(&self) -> String {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    fn truncate(&mut self) {
        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
    }
}
