//! Subprocess runner built on `tokio::process`

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::CommandRunner;
use crate::{CommandLine, CommandResult, LaunchError, RunPhase};

/// Runs commands as child processes, capturing stdout and stderr separately
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    /// Working directory for children (None = inherit from this process)
    work_dir: Option<PathBuf>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run children in `dir` instead of the inherited working directory
    pub fn with_work_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(dir.into()),
        }
    }

    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        command: &CommandLine,
        phase_tx: Option<mpsc::UnboundedSender<RunPhase>>,
    ) -> Result<CommandResult, LaunchError> {
        let mut phase = PhaseReporter::new(phase_tx);
        phase.advance(RunPhase::Launching);

        if command.program.is_empty() {
            phase.advance(RunPhase::LaunchFailed);
            return Err(LaunchError::new("", "empty program name"));
        }

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = self.work_dir() {
            cmd.current_dir(dir);
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("[runner] Failed to launch '{}': {}", command.program, e);
                phase.advance(RunPhase::LaunchFailed);
                return Err(LaunchError::from_io(&command.program, &e));
            }
        };
        info!("[runner] Launched '{}' (pid {:?})", command, child.id());
        phase.advance(RunPhase::Running);

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Both pipes are read at the same time; reading one to EOF before
        // touching the other can deadlock once the other pipe buffer fills.
        phase.advance(RunPhase::Draining);
        let (stdout, stderr) = tokio::join!(drain_lines(stdout, "stdout"), drain_lines(stderr, "stderr"));

        let exit_code = match child.wait().await {
            Ok(status) => exit_code_of(status),
            Err(e) => {
                warn!("[runner] Failed to wait for '{}': {}", command.program, e);
                -1
            }
        };
        info!("[runner] '{}' exited with code {}", command.program, exit_code);
        phase.advance(RunPhase::Exited(exit_code));

        Ok(CommandResult {
            stdout,
            stderr,
            exit_code,
        })
    }
}

/// Read a pipe line by line until EOF.
///
/// Every captured line ends with `\n` (a trailing `\r` is dropped). Invalid
/// UTF-8 is replaced; a read error ends the capture for this stream only.
async fn drain_lines<R>(reader: Option<R>, stream: &'static str) -> String
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return String::new();
    };

    let mut reader = BufReader::new(reader);
    let mut captured = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                }
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                captured.push_str(&String::from_utf8_lossy(&line));
                captured.push('\n');
            }
            Err(e) => {
                warn!("[runner] Error reading {}: {}", stream, e);
                break;
            }
        }
    }

    captured
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Tracks the phase of one invocation and forwards transitions
struct PhaseReporter {
    current: RunPhase,
    tx: Option<mpsc::UnboundedSender<RunPhase>>,
}

impl PhaseReporter {
    fn new(tx: Option<mpsc::UnboundedSender<RunPhase>>) -> Self {
        Self {
            current: RunPhase::Idle,
            tx,
        }
    }

    fn advance(&mut self, next: RunPhase) {
        if let Err(current) = self.current.advance(next) {
            warn!("[runner] Ignoring phase change {} -> {}", current, next);
            return;
        }
        debug!("[runner] Phase: {}", next);
        if let Some(tx) = &self.tx {
            // Receiver may be gone if the caller stopped listening
            let _ = tx.send(next);
        }
    }
}
