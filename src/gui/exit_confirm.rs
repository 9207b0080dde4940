//! "Are you sure you want to exit?" dialog

use eframe::egui::{self, RichText};

use super::theme::Palette;

/// What to do with a window close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Allow,
    Cancel,
}

/// Tracks whether closing the window has been confirmed
#[derive(Debug, Clone, Default)]
pub struct ExitGuard {
    enabled: bool,
    dialog_open: bool,
    confirmed: bool,
}

impl ExitGuard {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Called when the window manager asks to close the window
    pub fn on_close_requested(&mut self) -> CloseDecision {
        if !self.enabled || self.confirmed {
            return CloseDecision::Allow;
        }
        self.dialog_open = true;
        CloseDecision::Cancel
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
        self.dialog_open = false;
    }

    pub fn dismiss(&mut self) {
        self.dialog_open = false;
    }

    /// Intercept close requests and render the dialog when it is open
    pub fn show(&mut self, ctx: &egui::Context, palette: &Palette) {
        if ctx.input(|i| i.viewport().close_requested())
            && self.on_close_requested() == CloseDecision::Cancel
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        if !self.dialog_open {
            return;
        }

        egui::Window::new("Exit?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("Are you sure you want to exit?").color(palette.text));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() || ui.input(|i| i.key_pressed(egui::Key::Y)) {
                        self.confirm();
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("No").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        self.dismiss();
                    }
                });
            });
    }
}
