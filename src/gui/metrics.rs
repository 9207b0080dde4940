//! Window sizing from monospace font metrics

use eframe::egui::{self, Color32, FontId, Vec2};

use crate::config::Settings;

/// Character grid the window is sized for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub columns: u32,
    pub rows: u32,
    pub line_height: f32,
}

impl GridMetrics {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            columns: settings.columns,
            rows: settings.rows,
            line_height: settings.line_height,
        }
    }

    /// Size of the output pane for a glyph cell of the given size
    pub fn output_size(&self, char_width: f32, row_height: f32) -> Vec2 {
        egui::vec2(
            char_width * self.columns as f32,
            (row_height * self.rows as f32 * self.line_height).floor(),
        )
    }

    /// Height of the single input line
    pub fn input_height(&self, row_height: f32) -> f32 {
        (row_height * self.line_height).floor()
    }

    /// Inner window size: output pane stacked on the input line
    pub fn window_size(&self, char_width: f32, row_height: f32) -> Vec2 {
        let output = self.output_size(char_width, row_height);
        egui::vec2(output.x, output.y + self.input_height(row_height))
    }

    /// Rough window size before any font has been loaded
    pub fn estimated_window_size(&self, font_size: f32) -> Vec2 {
        self.window_size(font_size * 0.6, font_size * 1.25)
    }
}

/// Measure the width of `M` and the row height of a font
pub fn measure_cell(ctx: &egui::Context, font: &FontId) -> (f32, f32) {
    let size = ctx.fonts(|f| {
        f.layout_no_wrap("M".to_owned(), font.clone(), Color32::WHITE)
            .size()
    });
    (size.x, size.y)
}
