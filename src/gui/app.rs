//! Main GUI application state
//!
//! One output pane above one prompt line. Submitted commands go to the
//! background executor; its events are folded into the transcript.

use std::sync::mpsc::Receiver;

use eframe::egui::FontId;
use tracing::{debug, warn};

use super::executor::{ExecutorEvent, ExecutorHandle};
use super::exit_confirm::ExitGuard;
use super::metrics::GridMetrics;
use super::prompt_input::PromptBuffer;
use super::theme::Palette;
use crate::config::Settings;
use crate::{CommandLine, EntryKind, RunPhase, Transcript, TranscriptEntry};

/// Main application state
pub struct TerminalApp {
    pub(super) settings: Settings,
    pub(super) palette: Palette,
    pub(super) font: FontId,
    pub(super) grid: GridMetrics,
    /// Everything shown in the output pane
    pub(super) transcript: Transcript,
    /// Prompt-protected input line
    pub(super) input: PromptBuffer,
    /// Phase of the current (or last) command
    pub(super) phase: RunPhase,
    /// A command has been submitted and has not finished yet
    pub(super) busy: bool,
    /// Window has been resized to the measured font metrics
    pub(super) sized_to_font: bool,
    pub(super) exit_guard: ExitGuard,
    executor: ExecutorHandle,
    executor_rx: Receiver<ExecutorEvent>,
}

impl TerminalApp {
    pub fn new(
        settings: Settings,
        executor: ExecutorHandle,
        executor_rx: Receiver<ExecutorEvent>,
    ) -> Self {
        Self {
            palette: Palette::from_settings(&settings.colors),
            font: FontId::monospace(settings.font_size),
            grid: GridMetrics::from_settings(&settings),
            transcript: Transcript::new(settings.max_transcript_entries),
            input: PromptBuffer::new(settings.prompt.clone()),
            phase: RunPhase::Idle,
            busy: false,
            sized_to_font: false,
            exit_guard: ExitGuard::new(settings.confirm_exit),
            settings,
            executor,
            executor_rx,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn input(&self) -> &PromptBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut PromptBuffer {
        &mut self.input
    }

    /// Submit the current input line.
    ///
    /// Blank input does nothing. Otherwise the command is echoed, the input
    /// cleared, and the command queued on the executor.
    pub fn submit_input(&mut self) {
        if self.busy {
            return;
        }

        let raw = self.input.command().to_string();
        let Some(command) = CommandLine::parse(&raw, self.settings.split_policy) else {
            self.input.clear();
            return;
        };

        self.transcript
            .push(TranscriptEntry::prompt_echo(self.input.prompt(), &raw));
        self.input.clear();

        match self.executor.submit(command) {
            Ok(()) => {
                self.busy = true;
                self.phase = RunPhase::Idle;
            }
            Err(e) => {
                warn!("[singleplexer] {}", e);
                self.transcript.push(TranscriptEntry::new(
                    EntryKind::Error,
                    format!("Error: {}\n", e),
                ));
            }
        }
    }

    /// Drain pending executor events into the app state
    pub fn handle_executor_events(&mut self) {
        while let Ok(event) = self.executor_rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub(super) fn apply_event(&mut self, event: ExecutorEvent) {
        match event {
            ExecutorEvent::Started(command) => {
                debug!("[singleplexer] Started: {}", command);
                self.phase = RunPhase::Idle;
            }
            ExecutorEvent::Phase(next) => {
                if let Err(current) = self.phase.advance(next) {
                    debug!("[singleplexer] Out-of-order phase {} after {}", next, current);
                    self.phase = next;
                }
            }
            ExecutorEvent::Finished(outcome) => {
                if !self.phase.is_terminal() {
                    debug!("[singleplexer] Finished while still {}", self.phase);
                }
                self.transcript.record_outcome(&outcome);
                self.busy = false;
            }
        }
    }
}
