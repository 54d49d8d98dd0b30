//! Handler für Zoom, Connector-Abgleich und Programmende.

use crate::app::use_cases;
use crate::app::AppState;
use crate::connector::Connector;

/// Zoomt den Canvas um einen Faktor.
pub fn zoom(state: &mut AppState, connector: &mut dyn Connector, factor: f32) {
    use_cases::viewport::zoom_canvas(state, connector, factor);
}

/// Gleicht die Knoten-Visuals mit dem Modell ab.
pub fn sync_registration(state: &AppState, connector: &mut dyn Connector) {
    use_cases::registration::sync_node_registration(state, connector);
}

/// Fordert ein kontrolliertes Beenden an.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
