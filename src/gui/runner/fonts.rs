//! Font configuration for the GUI

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::{debug, info};

/// Prefer the platform's monospace font over egui's bundled one.
///
/// The first candidate found on disk goes to the front of the monospace
/// family; egui's own fonts stay behind it as fallbacks.
pub(super) fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    // Each entry: (name, path) - tried in order, first hit wins
    #[cfg(target_os = "macos")]
    let candidates: &[(&str, &str)] = &[
        ("menlo", "/System/Library/Fonts/Menlo.ttc"),
        ("monaco", "/System/Library/Fonts/Monaco.ttf"),
    ];

    #[cfg(target_os = "windows")]
    let candidates: &[(&str, &str)] = &[
        ("consolas", "C:\\Windows\\Fonts\\consola.ttf"),
        ("courier_new", "C:\\Windows\\Fonts\\cour.ttf"),
    ];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let candidates: &[(&str, &str)] = &[
        (
            "dejavu_mono",
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        ),
        (
            "liberation_mono",
            "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        ),
        ("noto_mono", "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf"),
    ];

    for (name, path) in candidates {
        let Ok(font_data) = std::fs::read(path) else {
            debug!("[singleplexer] Font not found: {}", path);
            continue;
        };

        fonts
            .font_data
            .insert((*name).to_owned(), FontData::from_owned(font_data).into());
        if let Some(family) = fonts.families.get_mut(&FontFamily::Monospace) {
            family.insert(0, (*name).to_owned());
        }

        info!("[singleplexer] Using monospace font '{}' from: {}", name, path);
        break;
    }

    ctx.set_fonts(fonts);
}
