//! Handler für die Sidebar-Gesten.

use crate::app::use_cases;
use crate::app::AppState;

/// Press auf den Resize-Griff.
pub fn begin_resize(state: &mut AppState) {
    use_cases::sidebar::begin_resize(state);
}

/// Press auf den Wiederherstellen-Pfeil.
pub fn begin_restore(state: &mut AppState) {
    use_cases::sidebar::begin_restore(state);
}

/// Pointer-Bewegung während einer Geste.
pub fn pointer_moved(state: &mut AppState, x: f32) {
    use_cases::sidebar::pointer_moved(state, x);
}

/// Pointer-Release.
pub fn pointer_released(state: &mut AppState) {
    use_cases::sidebar::pointer_released(state);
}
