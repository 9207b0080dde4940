//! Native GUI: one transcript pane and one prompt line
//!
//! Commands typed at the prompt run on a background executor; the window
//! keeps repainting while a command is in flight.

pub mod app;
mod app_eframe;
pub mod executor;
pub mod exit_confirm;
pub mod metrics;
pub mod prompt_input;
pub mod runner;
pub mod theme;
pub mod transcript_view;

pub use app::TerminalApp;
pub use executor::{ExecutorEvent, ExecutorHandle, start_executor};
pub use prompt_input::PromptBuffer;
pub use runner::run_gui;
