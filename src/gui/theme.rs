//! GUI palette built from the configured colours

use eframe::egui::{self, Color32, Stroke};

use crate::EntryKind;
use crate::config::{ColorSettings, Rgb};

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Resolved colours for one frame of rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub prompt: Color32,
    pub text: Color32,
    pub error: Color32,
    pub success: Color32,
    pub stderr: Color32,
}

impl Palette {
    pub fn from_settings(colors: &ColorSettings) -> Self {
        Self {
            bg_primary: color(colors.background_primary),
            bg_secondary: color(colors.background_secondary),
            prompt: color(colors.prompt),
            text: color(colors.text),
            error: color(colors.error),
            success: color(colors.success),
            stderr: color(colors.stderr),
        }
    }

    /// Colour used for a transcript entry
    pub fn entry_color(&self, kind: EntryKind) -> Color32 {
        match kind {
            EntryKind::PromptEcho => self.prompt,
            EntryKind::Stdout => self.text,
            EntryKind::Stderr => self.stderr,
            EntryKind::Success => self.success,
            EntryKind::Failure | EntryKind::Error => self.error,
        }
    }

    /// Apply the dark theme to the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = self.bg_primary;
        style.visuals.window_fill = self.bg_secondary;
        style.visuals.extreme_bg_color = self.bg_secondary;
        style.visuals.override_text_color = Some(self.text);
        style.visuals.text_cursor.stroke = Stroke::new(2.0, self.text);
        style.visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        style.visuals.widgets.inactive.bg_fill = self.bg_secondary;
        style.visuals.selection.stroke = Stroke::new(1.0, self.text);
        ctx.set_style(style);
    }
}
