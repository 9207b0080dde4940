//! eframe::App implementation for TerminalApp
//!
//! Contains the main update loop that runs every frame.

use std::time::Duration;

use eframe::egui::{self, RichText};
use tracing::debug;

use super::app::TerminalApp;
use super::metrics::measure_cell;
use super::transcript_view::render_transcript;

impl eframe::App for TerminalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for executor events (phase changes, results)
        self.handle_executor_events();

        self.palette.apply(ctx);
        self.fit_window_to_font(ctx);

        let mut submitted = false;

        // Input line - MUST be added before CentralPanel so the output pane
        // accounts for its height
        egui::TopBottomPanel::bottom("prompt_input")
            .frame(
                egui::Frame::NONE
                    .fill(self.palette.bg_secondary)
                    .inner_margin(egui::Margin::symmetric(4, 2)),
            )
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.busy {
                        ui.spinner();
                    }
                    if self.phase.is_active() {
                        ui.label(
                            RichText::new(self.phase.label())
                                .font(self.font.clone())
                                .color(self.palette.prompt),
                        );
                    }
                    let enabled = !self.busy && !self.exit_guard.dialog_open();
                    submitted =
                        self.input
                            .show(ui, self.font.clone(), self.palette.text, enabled);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.bg_primary))
            .show(ctx, |ui| {
                render_transcript(ui, &self.transcript, &self.palette, &self.font);
            });

        self.exit_guard.show(ctx, &self.palette);

        if submitted {
            self.submit_input();
        }

        if self.busy {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl TerminalApp {
    /// Resize the window once real font metrics are available
    fn fit_window_to_font(&mut self, ctx: &egui::Context) {
        if self.sized_to_font {
            return;
        }
        self.sized_to_font = true;

        let (char_width, row_height) = measure_cell(ctx, &self.font);
        let size = self.grid.window_size(char_width, row_height) + egui::vec2(8.0, 12.0);
        debug!(
            "[singleplexer] Cell {}x{}, resizing window to {:?}",
            char_width, row_height, size
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
    }
}
