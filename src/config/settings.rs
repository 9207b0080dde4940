//! Settings configuration types

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::SplitPolicy;

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Fixed prefix of the input line; cannot be deleted by the user
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Width of the window in monospace columns
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Height of the output pane in text rows
    #[serde(default = "default_rows")]
    pub rows: u32,

    /// Line height as a multiple of the font's row height
    #[serde(default = "default_line_height")]
    pub line_height: f32,

    /// Monospace font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// How the input line is split into arguments
    #[serde(default)]
    pub split_policy: SplitPolicy,

    /// Ask before closing the window
    #[serde(default = "default_confirm_exit")]
    pub confirm_exit: bool,

    /// Oldest transcript entries are dropped past this count (0 = keep all)
    #[serde(default = "default_max_transcript_entries")]
    pub max_transcript_entries: usize,

    /// Colour palette
    #[serde(default)]
    pub colors: ColorSettings,
}

fn default_title() -> String {
    "Terminal singleplexer".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_columns() -> u32 {
    120
}

fn default_rows() -> u32 {
    30
}

fn default_line_height() -> f32 {
    1.2
}

fn default_font_size() -> f32 {
    14.0
}

fn default_confirm_exit() -> bool {
    true
}

fn default_max_transcript_entries() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_title(),
            prompt: default_prompt(),
            columns: default_columns(),
            rows: default_rows(),
            line_height: default_line_height(),
            font_size: default_font_size(),
            split_policy: SplitPolicy::default(),
            confirm_exit: default_confirm_exit(),
            max_transcript_entries: default_max_transcript_entries(),
            colors: ColorSettings::default(),
        }
    }
}

impl Settings {
    /// Reject values that would give a zero-sized or unrenderable window
    pub fn validate(&self) -> Result<()> {
        ensure!(self.columns > 0, "settings.columns must be at least 1");
        ensure!(self.rows > 0, "settings.rows must be at least 1");
        ensure!(
            self.font_size.is_finite() && self.font_size > 0.0,
            "settings.font_size must be a positive number, got {}",
            self.font_size
        );
        ensure!(
            self.line_height.is_finite() && self.line_height > 0.0,
            "settings.line_height must be a positive number, got {}",
            self.line_height
        );
        Ok(())
    }
}

/// An sRGB colour stored as `[r, g, b]`
pub type Rgb = [u8; 3];

/// Colour palette for the window and transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Window background
    #[serde(default = "default_background_primary")]
    pub background_primary: Rgb,
    /// Output pane and input line background
    #[serde(default = "default_background_secondary")]
    pub background_secondary: Rgb,
    /// Echoed prompt and command
    #[serde(default = "default_prompt_color")]
    pub prompt: Rgb,
    /// Normal text and stdout
    #[serde(default = "default_text_color")]
    pub text: Rgb,
    /// Launch errors and non-zero exit codes
    #[serde(default = "default_error_color")]
    pub error: Rgb,
    /// Zero exit codes
    #[serde(default = "default_success_color")]
    pub success: Rgb,
    /// Captured stderr
    #[serde(default = "default_stderr_color")]
    pub stderr: Rgb,
}

fn default_background_primary() -> Rgb {
    [0, 0, 0]
}

fn default_background_secondary() -> Rgb {
    [64, 64, 64]
}

fn default_prompt_color() -> Rgb {
    [192, 192, 192]
}

fn default_text_color() -> Rgb {
    [255, 255, 255]
}

fn default_error_color() -> Rgb {
    [255, 0, 0]
}

fn default_success_color() -> Rgb {
    [0, 255, 0]
}

fn default_stderr_color() -> Rgb {
    [255, 175, 175]
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background_primary: default_background_primary(),
            background_secondary: default_background_secondary(),
            prompt: default_prompt_color(),
            text: default_text_color(),
            error: default_error_color(),
            success: default_success_color(),
            stderr: default_stderr_color(),
        }
    }
}
