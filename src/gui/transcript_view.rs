//! Output pane rendering

use eframe::egui::{self, FontId, ScrollArea, text::LayoutJob};

use super::theme::Palette;
use crate::Transcript;

/// Build one colourised text job for the whole transcript
pub fn transcript_layout(transcript: &Transcript, palette: &Palette, font: &FontId) -> LayoutJob {
    let mut job = LayoutJob::default();
    for entry in transcript.entries() {
        job.append(
            &entry.text,
            0.0,
            egui::TextFormat::simple(font.clone(), palette.entry_color(entry.kind)),
        );
    }
    job
}

/// Render the transcript: read-only, selectable, pinned to the newest output
pub fn render_transcript(
    ui: &mut egui::Ui,
    transcript: &Transcript,
    palette: &Palette,
    font: &FontId,
) {
    egui::Frame::NONE
        .fill(palette.bg_secondary)
        .inner_margin(4.0)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt("transcript")
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    let job = transcript_layout(transcript, palette, font);
                    ui.add(egui::Label::new(job).selectable(true).wrap());
                });
        });
}
