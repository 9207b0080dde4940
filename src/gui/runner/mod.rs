//! GUI runner - launches the singleplexer window

mod fonts;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::TerminalApp;
use super::executor::{ExecutorEvent, start_executor};
use super::metrics::GridMetrics;
use crate::config::Config;
use crate::runner::ProcessRunner;

use fonts::configure_fonts;

/// Run the main GUI application
///
/// `work_dir` is where commands run; `None` inherits this process's
/// working directory.
pub fn run_gui(work_dir: Option<PathBuf>, config: Config) -> Result<()> {
    let settings = config.settings;

    let runner = match work_dir {
        Some(dir) => {
            info!("[singleplexer] Commands run in {}", dir.display());
            ProcessRunner::with_work_dir(dir)
        }
        None => ProcessRunner::new(),
    };

    let initial_size = GridMetrics::from_settings(&settings).estimated_window_size(settings.font_size);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.title.clone())
            .with_inner_size(initial_size)
            .with_min_inner_size([320.0, 120.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    info!("[singleplexer] Starting GUI: {}", settings.title);
    let title = settings.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);

            // Create channel for executor -> GUI communication
            let (executor_tx, executor_rx): (
                mpsc::Sender<ExecutorEvent>,
                mpsc::Receiver<ExecutorEvent>,
            ) = mpsc::channel();
            let executor = start_executor(
                Arc::new(runner),
                executor_tx,
                Some(cc.egui_ctx.clone()),
            )?;

            Ok(Box::new(TerminalApp::new(settings, executor, executor_rx)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
