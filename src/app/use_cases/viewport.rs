//! Use-Case-Funktionen für den Canvas-Zoom.

use crate::app::AppState;
use crate::connector::Connector;

/// Multipliziert den Zoom und gibt ihn an den Connector weiter.
pub fn zoom_canvas(state: &mut AppState, connector: &mut dyn Connector, factor: f32) {
    let zoom = state.view.viewport.zoom_by(factor);
    connector.set_zoom(zoom);
    connector.repaint_everything();
    log::debug!("Zoom: {:.0}%", zoom * 100.0);
}
