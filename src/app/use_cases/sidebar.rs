//! Use-Case-Funktionen für die Sidebar-Gesten.

use crate::app::AppState;

/// Startet das Ziehen am Resize-Griff.
pub fn begin_resize(state: &mut AppState) {
    state.interaction.sidebar.begin_resize();
}

/// Startet das Ziehen am Wiederherstellen-Pfeil.
pub fn begin_restore(state: &mut AppState) {
    state.interaction.sidebar.begin_restore();
}

/// Lässt die Breite der Pointer-Position folgen.
pub fn pointer_moved(state: &mut AppState, x: f32) {
    state.interaction.sidebar.pointer_moved(x);
}

/// Beendet die Sidebar-Geste.
pub fn pointer_released(state: &mut AppState) {
    let default_width = state.options.sidebar_default_width;
    state.interaction.sidebar.pointer_released(default_width);
    if state.interaction.sidebar.is_collapsed() {
        log::debug!("Sidebar eingeklappt");
    }
}
