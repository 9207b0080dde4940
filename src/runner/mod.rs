//! Command execution
//!
//! The [`CommandRunner`] trait is the seam between callers (GUI executor,
//! headless CLI) and the way a command actually gets executed.
//! [`ProcessRunner`] is the real implementation backed by `tokio::process`.

mod process;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::{CommandLine, CommandResult, LaunchError, RunPhase};

pub use process::ProcessRunner;

/// Trait for command runners
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion
    ///
    /// # Arguments
    /// * `command` - The tokenized command line
    /// * `phase_tx` - Optional channel receiving every phase transition
    async fn run(
        &self,
        command: &CommandLine,
        phase_tx: Option<mpsc::UnboundedSender<RunPhase>>,
    ) -> Result<CommandResult, LaunchError>;
}
