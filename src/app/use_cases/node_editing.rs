//! Use-Case: Knoten umbenennen, verschieben und löschen.

use super::connections::remove_connection_visuals_of;
use crate::app::AppState;
use crate::connector::Connector;
use crate::core::NodeId;
use glam::Vec2;

/// Löscht einen Knoten samt aller Verbindungen.
///
/// Die Visuals werden vor der Modell-Kaskade abgebaut, damit kein
/// Verbindungs-Visual auf einen gelöschten Knoten zeigt.
pub fn delete_node(state: &mut AppState, connector: &mut dyn Connector, node_id: &NodeId) {
    if !state.diagram.contains_node(node_id) {
        log::debug!("Node {} existiert nicht (mehr)", node_id);
        return;
    }

    let visuals = remove_connection_visuals_of(connector, node_id);
    connector.unregister_node(node_id);

    let cascaded = state.diagram.connections_of(node_id).len();
    if state.diagram.remove_node(node_id).is_some() {
        log::info!(
            "Node {} gelöscht ({} Verbindung(en), {} Visual(s))",
            node_id,
            cascaded,
            visuals
        );
    }
}

/// Übernimmt ein neues Label. Leere Labels werden verworfen.
pub fn rename_node(
    state: &mut AppState,
    connector: &mut dyn Connector,
    node_id: &NodeId,
    label: &str,
) -> bool {
    if !state.diagram.update_node_label(node_id, label) {
        log::warn!("Umbenennen von {} verworfen (leer oder unbekannt)", node_id);
        return false;
    }
    if let Some(node) = state.diagram.node(node_id) {
        connector.refresh_node(node);
    }
    log::info!("Node {} umbenannt in '{}'", node_id, label);
    true
}

/// Übernimmt die Position aus einem Drag.
pub fn move_node(
    state: &mut AppState,
    connector: &mut dyn Connector,
    node_id: &NodeId,
    position: Vec2,
) {
    if !state.diagram.update_node_position(node_id, position) {
        log::debug!("Drag für unbekannten Node {} ignoriert", node_id);
        return;
    }
    if let Some(node) = state.diagram.node(node_id) {
        connector.refresh_node(node);
    }
}
