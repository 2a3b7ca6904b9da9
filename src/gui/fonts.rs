// src/gui/fonts.rs
//
// egui's bundled fonts have no Hangul. Borrow one from the OS.

use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const FONT_NAME: &str = "hangul";

const CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/NanumGothic.ttf",
    // Linux distros
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

/// Install the first Hangul-capable system font as a fallback for both
/// families. Returns false if none was found (text still renders, as boxes).
pub fn install(ctx: &egui::Context) -> bool {
    for path in CANDIDATES {
        let Ok(bytes) = fs::read(path) else { continue };

        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(s!(FONT_NAME));
        }
        ctx.set_fonts(fonts);

        logf!("Fonts: Using {}", path);
        return true;
    }

    logw!("Fonts: No Hangul font found in {} known locations", CANDIDATES.len());
    false
}
