//! Zentrale Konfiguration für den Flowchart-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zoom ────────────────────────────────────────────────────────────

/// Zoom-Faktor pro Mausrad-Schritt nach oben (hineinzoomen).
pub const WHEEL_ZOOM_IN_STEP: f32 = 1.1;
/// Zoom-Faktor pro Mausrad-Schritt nach unten (herauszoomen).
pub const WHEEL_ZOOM_OUT_STEP: f32 = 0.9;

// ── Sidebar ─────────────────────────────────────────────────────────

/// Sidebar-Breite nach dem Wiederherstellen per Klick.
pub const SIDEBAR_DEFAULT_WIDTH: f32 = 220.0;

// ── Node-Rendering ─────────────────────────────────────────────────

/// Breite einer Node-Box in Canvas-Pixeln.
pub const NODE_WIDTH: f32 = 120.0;
/// Höhe einer Node-Box in Canvas-Pixeln.
pub const NODE_HEIGHT: f32 = 56.0;
/// Radius des Verbindungs-Ankers am rechten Node-Rand.
pub const ANCHOR_RADIUS: f32 = 6.0;

// ── Connection-Rendering ───────────────────────────────────────────

/// Linienfarbe der Verbindungen (RGBA: Grau, #6b7280).
pub const CONNECTION_COLOR: [f32; 4] = [0.42, 0.45, 0.50, 1.0];
/// Linienstärke der Verbindungen in Pixeln.
pub const CONNECTION_WIDTH: f32 = 2.0;
/// Kantenlänge der Pfeilspitze in Pixeln.
pub const ARROW_SIZE: f32 = 10.0;
/// Toleranz für Rechtsklicks auf Verbindungen in Screen-Pixeln.
pub const CONNECTION_HIT_TOLERANCE_PX: f32 = 6.0;

// ── Schrift ─────────────────────────────────────────────────────────

/// Schriftgröße der Node-Beschriftung.
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Schriftgröße der Typ-Zeile im Node.
pub const TYPE_FONT_SIZE: f32 = 11.0;
/// Schriftgröße der Verbindungsbeschreibung.
pub const DESCRIPTION_FONT_SIZE: f32 = 12.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `flowchart_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zoom ────────────────────────────────────────────────────
    /// Zoom-Faktor für Rad nach oben
    pub wheel_zoom_in_step: f32,
    /// Zoom-Faktor für Rad nach unten
    pub wheel_zoom_out_step: f32,

    // ── Sidebar ─────────────────────────────────────────────────
    /// Breite nach Wiederherstellen per Klick
    pub sidebar_default_width: f32,

    // ── Nodes ───────────────────────────────────────────────────
    /// Node-Breite in Canvas-Pixeln
    pub node_width: f32,
    /// Node-Höhe in Canvas-Pixeln
    pub node_height: f32,
    /// Radius des Verbindungs-Ankers
    pub anchor_radius: f32,

    // ── Connections ─────────────────────────────────────────────
    /// Linienfarbe (RGBA)
    pub connection_color: [f32; 4],
    /// Linienstärke in Pixeln
    pub connection_width: f32,
    /// Pfeilgröße in Pixeln
    pub arrow_size: f32,
    /// Hit-Toleranz für Rechtsklicks in Screen-Pixeln
    pub connection_hit_tolerance_px: f32,

    // ── Schrift ─────────────────────────────────────────────────
    /// Schriftgröße der Node-Beschriftung
    pub label_font_size: f32,
    /// Schriftgröße der Typ-Zeile
    pub type_font_size: f32,
    /// Schriftgröße der Verbindungsbeschreibung
    pub description_font_size: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            wheel_zoom_in_step: WHEEL_ZOOM_IN_STEP,
            wheel_zoom_out_step: WHEEL_ZOOM_OUT_STEP,

            sidebar_default_width: SIDEBAR_DEFAULT_WIDTH,

            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            anchor_radius: ANCHOR_RADIUS,

            connection_color: CONNECTION_COLOR,
            connection_width: CONNECTION_WIDTH,
            arrow_size: ARROW_SIZE,
            connection_hit_tolerance_px: CONNECTION_HIT_TOLERANCE_PX,

            label_font_size: LABEL_FONT_SIZE,
            type_font_size: TYPE_FONT_SIZE,
            description_font_size: DESCRIPTION_FONT_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("flowchart-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("flowchart_editor.toml")
    }

    /// Node-Größe als Vektor (Breite, Höhe).
    pub fn node_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.node_width, self.node_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("flowchart_editor_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_keeps_values() {
        let path = temp_path("roundtrip");
        let mut options = EditorOptions::default();
        options.sidebar_default_width = 260.0;
        options.wheel_zoom_in_step = 1.25;

        options.save_to_file(&path).expect("Speichern erwartet");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let loaded = EditorOptions::load_from_file(&temp_path("does_not_exist"));
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let loaded: EditorOptions =
            toml::from_str("node_width = 200.0\n").expect("TOML erwartet");
        assert_eq!(loaded.node_width, 200.0);
        assert_eq!(loaded.node_height, NODE_HEIGHT);
        assert_eq!(loaded.sidebar_default_width, SIDEBAR_DEFAULT_WIDTH);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "node_width = \"breit\"").expect("Schreiben erwartet");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, EditorOptions::default());
    }
}
