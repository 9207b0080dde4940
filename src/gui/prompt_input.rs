//! Single-line input with a fixed, non-deletable prompt prefix
//!
//! egui's `TextEdit` has no hook for rejecting individual key presses, so the
//! prefix is protected after the fact: every edit is diffed against the
//! previous buffer and any part of it that reaches into the prefix is moved
//! to start right after it. Cursor and selection are clamped the same way.

use eframe::egui::text::{CCursor, CCursorRange};
use eframe::egui::{self, Color32, FontId};

/// Text buffer whose first characters always equal the prompt
#[derive(Debug, Clone)]
pub struct PromptBuffer {
    prompt: String,
    /// Prompt length in chars (cursor positions are char indices)
    prompt_chars: usize,
    /// Prompt followed by the command being typed
    text: String,
}

impl PromptBuffer {
    pub fn new(prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        Self {
            prompt_chars: prompt.chars().count(),
            text: prompt.clone(),
            prompt,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Full buffer: prompt plus command
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The command typed after the prompt
    pub fn command(&self) -> &str {
        &self.text[self.prompt.len()..]
    }

    pub fn set_command(&mut self, command: &str) {
        self.text = format!("{}{}", self.prompt, command);
    }

    pub fn clear(&mut self) {
        self.text = self.prompt.clone();
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Repair the buffer after `edited` replaced `previous`.
    ///
    /// Returns the cursor position to use when the edit had to be moved out
    /// of the prompt, `None` when the edit was accepted as is.
    pub fn reconcile(&mut self, previous: &str, edited: String) -> Option<usize> {
        if edited.starts_with(&self.prompt) {
            self.text = edited;
            return None;
        }

        if !previous.starts_with(&self.prompt) {
            self.text = format!("{}{}", self.prompt, edited);
            return Some(self.char_len());
        }

        let prev: Vec<char> = previous.chars().collect();
        let next: Vec<char> = edited.chars().collect();

        let prefix = prev
            .iter()
            .zip(&next)
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = prev.len().min(next.len()) - prefix;
        let suffix = prev
            .iter()
            .rev()
            .zip(next.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        // prev[prefix..prev.len() - suffix] was replaced by inserted
        let inserted = &next[prefix..next.len() - suffix];
        let start = prefix.max(self.prompt_chars);
        let end = (prev.len() - suffix).max(start);

        let mut repaired: String = prev[..start].iter().collect();
        repaired.extend(inserted);
        repaired.extend(&prev[end..]);
        self.text = repaired;

        Some(start + inserted.len())
    }

    /// Clamp a cursor position into the editable region
    pub fn clamp_cursor(&self, index: usize) -> usize {
        index.max(self.prompt_chars).min(self.char_len())
    }

    /// Selection to store after a frame, or `None` to keep the current one.
    ///
    /// A repaired edit puts the cursor at `repaired`; otherwise any end of the
    /// selection that sits inside the prompt is moved to just after it.
    pub fn clamp_selection(
        &self,
        current: Option<CCursorRange>,
        repaired: Option<usize>,
    ) -> Option<CCursorRange> {
        if let Some(pos) = repaired {
            return Some(CCursorRange::one(CCursor::new(self.clamp_cursor(pos))));
        }

        let range = current?;
        let primary = self.clamp_cursor(range.primary.index);
        let secondary = self.clamp_cursor(range.secondary.index);
        if primary == range.primary.index && secondary == range.secondary.index {
            return None;
        }
        Some(CCursorRange::two(
            CCursor::new(secondary),
            CCursor::new(primary),
        ))
    }

    /// Render the input line. Returns true when Enter submitted the line.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        font: FontId,
        text_color: Color32,
        enabled: bool,
    ) -> bool {
        let previous = self.text().to_owned();
        let mut edited = previous.clone();

        let output = ui
            .add_enabled_ui(enabled, |ui| {
                egui::TextEdit::singleline(&mut edited)
                    .font(font)
                    .text_color(text_color)
                    .desired_width(f32::INFINITY)
                    .frame(false)
                    .show(ui)
            })
            .inner;

        let repaired_cursor = if output.response.changed() {
            self.reconcile(&previous, edited)
        } else {
            None
        };

        if let Some(mut state) = egui::TextEdit::load_state(ui.ctx(), output.response.id) {
            let clamped = self.clamp_selection(state.cursor.char_range(), repaired_cursor);
            if clamped.is_some() {
                state.cursor.set_char_range(clamped);
                state.store(ui.ctx(), output.response.id);
                // the caret was drawn at the old position this frame
                ui.ctx().request_repaint();
            }
        }

        let submitted =
            output.response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if enabled && !output.response.has_focus() {
            output.response.request_focus();
        }

        submitted
    }
}
