// src/gui/fonts.rs
//
// egui's bundled fonts have no Japanese glyphs; borrow one from the system.

use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CJK_FONT: &str = "cjk";

const CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    // macOS
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
];

/// Register the first readable candidate as a fallback for both families.
/// Returns false when none was found.
pub fn install_cjk_fonts(ctx: &egui::Context) -> bool {
    let Some((path, bytes)) = CANDIDATES
        .iter()
        .find_map(|p| fs::read(p).ok().map(|b| (*p, b)))
    else {
        loge!("Fonts: no CJK font found, Japanese text will not render");
        return false;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(s!(CJK_FONT), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!(CJK_FONT));
    }
    ctx.set_fonts(fonts);

    logf!("Fonts: CJK fallback from {path}");
    true
}
