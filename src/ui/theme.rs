//! Farben aus Vorlagen und Optionen in egui-Farben umrechnen.

use egui::Color32;

/// Parst `#rrggbb` (oder `#rgb`) in eine egui-Farbe.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    // Byte-Slicing unten setzt reine ASCII-Ziffern voraus
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Some(Color32::from_rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Vorlagenfarbe mit Grau als Fallback
pub fn node_color(hex: &str) -> Color32 {
    parse_hex_color(hex).unwrap_or(Color32::GRAY)
}

/// RGBA-Float-Array (Optionen) → egui-Farbe
pub fn rgba_to_color32(rgba: [f32; 4]) -> Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Farbe für destruktive Menüeinträge ("删除…")
pub const DANGER: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
