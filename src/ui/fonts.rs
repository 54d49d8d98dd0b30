//! System-Schriften mit CJK-Glyphen nachladen.

use egui::{FontData, FontDefinitions, FontFamily};

/// Bekannte Pfade für CJK-Schriften (Linux, macOS, Windows).
const CJK_FONT_PATHS: [&str; 9] = [
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

/// Lädt die erste gefundene CJK-Schrift als Fallback für beide Familien.
///
/// Ohne CJK-Schrift rendert egui die Palette-Beschriftungen als Ersatzzeichen.
pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    let Some((path, bytes)) = CJK_FONT_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        log::warn!("Keine CJK-Schrift gefunden, chinesische Beschriftungen evtl. unleserlich");
        return;
    };

    let name = "cjk".to_string();
    fonts
        .font_data
        .insert(name.clone(), FontData::from_owned(bytes).into());
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.clone());
    }
    ctx.set_fonts(fonts);
    log::info!("CJK-Schrift geladen: {}", path);
}
