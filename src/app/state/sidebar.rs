//! Breite der Palette-Sidebar und ihre beiden Drag-Gesten.

use crate::shared::options::SIDEBAR_DEFAULT_WIDTH;

/// Zustand der Sidebar.
///
/// `resizing` und `restoring` sind unabhängige Flags: beide starten mit einem
/// Pointer-Press und enden mit dem nächsten Release irgendwo im Fenster.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    width: f32,
    /// Resize-Griff am rechten Rand wird gezogen
    pub resizing: bool,
    /// Wiederherstellen-Pfeil (bei Breite 0) ist gedrückt
    pub restoring: bool,
    /// Ob der Pfeil seit dem Drücken bewegt wurde (Klick vs. Drag)
    restore_dragged: bool,
}

impl SidebarState {
    /// Maximale Sidebar-Breite in Pixeln.
    pub const MAX_WIDTH: f32 = 500.0;
    /// Start-Breite in Pixeln.
    pub const DEFAULT_WIDTH: f32 = SIDEBAR_DEFAULT_WIDTH;

    /// Erstellt eine Sidebar mit Standardbreite
    pub fn new(width: f32) -> Self {
        Self {
            width: Self::clamp_width(width),
            resizing: false,
            restoring: false,
            restore_dragged: false,
        }
    }

    /// Aktuelle Breite in Pixeln
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Breite 0: Sidebar eingeklappt, Wiederherstellen-Pfeil sichtbar
    pub fn is_collapsed(&self) -> bool {
        self.width <= 0.0
    }

    /// Ist gerade eine der beiden Drag-Gesten aktiv?
    pub fn is_dragging(&self) -> bool {
        self.resizing || self.restoring
    }

    /// Press auf den Resize-Griff.
    pub fn begin_resize(&mut self) {
        self.resizing = true;
    }

    /// Press auf den Wiederherstellen-Pfeil. Nur im eingeklappten Zustand.
    pub fn begin_restore(&mut self) {
        if !self.is_collapsed() {
            return;
        }
        self.restoring = true;
        self.restore_dragged = false;
    }

    /// Pointer-Bewegung: Breite folgt der x-Position, geklemmt auf `[0, 500]`.
    pub fn pointer_moved(&mut self, x: f32) {
        if !self.is_dragging() {
            return;
        }
        if self.restoring {
            self.restore_dragged = true;
        }
        self.width = Self::clamp_width(x);
    }

    /// Pointer-Release: beendet beide Gesten.
    ///
    /// Ein Restore-Press ohne Bewegung gilt als Klick und stellt `default_width` her.
    pub fn pointer_released(&mut self, default_width: f32) {
        if self.restoring && !self.restore_dragged {
            self.width = Self::clamp_width(default_width);
        }
        self.resizing = false;
        self.restoring = false;
        self.restore_dragged = false;
    }

    fn clamp_width(x: f32) -> f32 {
        if x.is_nan() {
            return 0.0;
        }
        x.clamp(0.0, Self::MAX_WIDTH)
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resize_clamps_width() {
        let mut sidebar = SidebarState::default();
        sidebar.begin_resize();
        sidebar.pointer_moved(600.0);
        assert_relative_eq!(sidebar.width(), 500.0);
        sidebar.pointer_moved(-50.0);
        assert_relative_eq!(sidebar.width(), 0.0);
        assert!(sidebar.is_collapsed());
        sidebar.pointer_released(220.0);
        assert!(!sidebar.resizing);
    }

    #[test]
    fn test_default_width_matches_options() {
        let options = crate::shared::EditorOptions::default();
        assert_relative_eq!(
            SidebarState::default().width(),
            options.sidebar_default_width
        );
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut sidebar = SidebarState::default();
        sidebar.pointer_moved(400.0);
        assert_relative_eq!(sidebar.width(), 220.0);
    }

    #[test]
    fn test_restore_click_sets_default_width() {
        let mut sidebar = SidebarState::new(0.0);
        sidebar.begin_restore();
        sidebar.pointer_released(220.0);
        assert_relative_eq!(sidebar.width(), 220.0);
        assert!(!sidebar.restoring);
    }

    #[test]
    fn test_restore_drag_follows_pointer() {
        let mut sidebar = SidebarState::new(0.0);
        sidebar.begin_restore();
        sidebar.pointer_moved(140.0);
        sidebar.pointer_released(220.0);
        assert_relative_eq!(sidebar.width(), 140.0);
    }

    #[test]
    fn test_restore_ignored_when_expanded() {
        let mut sidebar = SidebarState::default();
        sidebar.begin_restore();
        assert!(!sidebar.restoring);
    }
}
