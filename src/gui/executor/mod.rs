//! Command executor for the GUI
//!
//! Runs in a background thread with its own tokio runtime and processes
//! submitted commands one at a time, so the window never blocks on a child.

mod event;

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::{Result, anyhow};
use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::CommandLine;
use crate::runner::CommandRunner;

pub use event::ExecutorEvent;

/// Handle for submitting commands to the executor thread
#[derive(Debug, Clone)]
pub struct ExecutorHandle {
    request_tx: mpsc::UnboundedSender<CommandLine>,
}

impl ExecutorHandle {
    /// Queue a command for execution
    pub fn submit(&self, command: CommandLine) -> Result<()> {
        self.request_tx
            .send(command)
            .map_err(|_| anyhow!("Command executor has stopped"))
    }
}

/// Start the command executor in a background thread.
///
/// Events go to `event_tx`; `repaint` (if given) is woken after each one so
/// the GUI picks them up without polling.
pub fn start_executor(
    runner: Arc<dyn CommandRunner>,
    event_tx: Sender<ExecutorEvent>,
    repaint: Option<egui::Context>,
) -> Result<ExecutorHandle> {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("command-executor".to_string())
        .spawn(move || {
            rt.block_on(executor_loop(runner, request_rx, event_tx, repaint));
            debug!("[executor] Stopped");
        })?;

    Ok(ExecutorHandle { request_tx })
}

async fn executor_loop(
    runner: Arc<dyn CommandRunner>,
    mut request_rx: mpsc::UnboundedReceiver<CommandLine>,
    event_tx: Sender<ExecutorEvent>,
    repaint: Option<egui::Context>,
) {
    let notify = |event: ExecutorEvent| -> bool {
        let delivered = event_tx.send(event).is_ok();
        if let Some(ctx) = &repaint {
            ctx.request_repaint();
        }
        delivered
    };

    while let Some(command) = request_rx.recv().await {
        info!("[executor] Running: {}", command);
        if !notify(ExecutorEvent::Started(command.clone())) {
            break;
        }

        let (phase_tx, mut phase_rx) = mpsc::unbounded_channel();
        let phase_events = event_tx.clone();
        let phase_repaint = repaint.clone();
        let forwarder = tokio::spawn(async move {
            while let Some(phase) = phase_rx.recv().await {
                if phase_events.send(ExecutorEvent::Phase(phase)).is_err() {
                    break;
                }
                if let Some(ctx) = &phase_repaint {
                    ctx.request_repaint();
                }
            }
        });

        let outcome = runner.run(&command, Some(phase_tx)).await;

        // Phase events must reach the GUI before the result does
        if let Err(e) = forwarder.await {
            error!("[executor] Phase forwarder failed: {}", e);
        }

        if !notify(ExecutorEvent::Finished(outcome)) {
            break;
        }
    }
}
