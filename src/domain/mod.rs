//! Core domain types for singleplexer

mod command;
mod phase;
mod transcript;

pub use command::{CommandLine, CommandResult, LaunchError, SplitPolicy};
pub use phase::RunPhase;
pub use transcript::{EntryKind, Transcript, TranscriptEntry, entries_for_outcome};
