//! Executor event types for GUI communication

use crate::{CommandLine, CommandResult, LaunchError, RunPhase};

/// Message to send back to GUI
#[derive(Debug, Clone)]
pub enum ExecutorEvent {
    /// A command was picked up and is about to launch
    Started(CommandLine),
    /// The running command changed phase
    Phase(RunPhase),
    /// The command finished or failed to launch
    Finished(Result<CommandResult, LaunchError>),
}
