//! Viewport: Zoom-Faktor und Screen→Canvas-Umrechnung.

use glam::Vec2;

/// Zoom-Zustand des Canvas (kein Pan, Zoom verankert am Canvas-Ursprung)
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f32,
}

impl Viewport {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 3.0;

    /// Erstellt einen Viewport mit Zoom 1.0
    pub fn new() -> Self {
        Self { zoom: 1.0 }
    }

    /// Viewport mit vorgegebenem Zoom, geklemmt auf `[ZOOM_MIN, ZOOM_MAX]`.
    ///
    /// Nicht-endliche Werte ergeben Zoom 1.0.
    pub fn from_zoom(zoom: f32) -> Self {
        if !zoom.is_finite() {
            return Self::new();
        }
        Self {
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Aktueller Zoom-Faktor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Multipliziert den Zoom mit `factor` und klemmt auf `[ZOOM_MIN, ZOOM_MAX]`.
    ///
    /// Nicht-endliche oder nicht-positive Faktoren lassen den Zoom unverändert.
    pub fn zoom_by(&mut self, factor: f32) -> f32 {
        if !factor.is_finite() || factor <= 0.0 {
            return self.zoom;
        }
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        self.zoom
    }

    /// Konvertiert Screen-Koordinaten in Canvas-Koordinaten.
    ///
    /// Zieht nur den Container-Ursprung ab; der Zoom fließt bewusst nicht ein,
    /// damit bestehende Diagramme an derselben Stelle landen.
    pub fn screen_to_canvas(&self, screen_pos: Vec2, container_origin: Vec2) -> Vec2 {
        screen_pos - container_origin
    }

    /// Konvertiert Canvas-Koordinaten in Screen-Koordinaten (Darstellung mit Zoom).
    pub fn canvas_to_screen(&self, canvas_pos: Vec2, container_origin: Vec2) -> Vec2 {
        container_origin + canvas_pos * self.zoom
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounding-Box des Canvas-Containers in Screen-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Linke obere Ecke (Container-Ursprung)
    pub min: Vec2,
    /// Rechte untere Ecke
    pub max: Vec2,
}

impl CanvasRect {
    /// Erstellt ein Rechteck aus zwei Ecken.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Erstellt ein Rechteck aus Ursprung und Größe.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Prüft ob ein Screen-Punkt im Container liegt (Ränder inklusive).
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }
}

/// Bestimmt den Zoom-Faktor einer Mausrad-Geste.
///
/// Nur mit Zoom-Modifier (Ctrl/Cmd) wird gezoomt; ohne Modifier bleibt das
/// Rad für Scrollen reserviert. `delta_y > 0` (Rad nach unten) zoomt heraus.
pub fn wheel_zoom_factor(
    delta_y: f32,
    zoom_modifier: bool,
    zoom_in_step: f32,
    zoom_out_step: f32,
) -> Option<f32> {
    if !zoom_modifier || delta_y == 0.0 {
        return None;
    }
    Some(if delta_y > 0.0 {
        zoom_out_step
    } else {
        zoom_in_step
    })
}
