//! Use-Case: Knoten-Visuals mit dem Modell abgleichen.

use crate::app::AppState;
use crate::connector::{Connector, ConnectorError};

/// Meldet noch nicht registrierte Knoten an und gleicht registrierte ab.
///
/// Fehlt das Visual eines Knotens noch, wird er übersprungen und beim
/// nächsten Abgleich erneut versucht.
pub fn sync_node_registration(state: &AppState, connector: &mut dyn Connector) {
    for node in state.diagram.nodes_iter() {
        if connector.is_registered(node.id()) {
            connector.refresh_node(node);
            continue;
        }
        match connector.register_node(node) {
            Ok(()) => log::debug!("Node {} beim Connector angemeldet", node.id()),
            Err(ConnectorError::MissingVisualElement(id)) => {
                log::debug!("Visual für {} fehlt noch, nächster Versuch beim Refresh", id);
            }
            Err(e) => log::warn!("Anmeldung von {} fehlgeschlagen: {}", node.id(), e),
        }
    }
}
