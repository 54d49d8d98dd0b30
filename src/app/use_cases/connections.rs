//! Use-Case: Verbindungen anlegen, beschreiben und löschen.

use crate::app::AppState;
use crate::connector::{ConnectionRole, Connector};
use crate::core::{ConnectionHandle, ConnectionKey, DiagramError, NodeId};

/// Registriert eine vom Connector gemeldete Verbindung im Modell und hängt
/// erst danach ihr Visual an. Abgelehnte Paare bekommen kein Visual.
pub fn register_connection(
    state: &mut AppState,
    connector: &mut dyn Connector,
    from_id: &NodeId,
    to_id: &NodeId,
) -> Option<ConnectionHandle> {
    let handle = match state.diagram.add_connection(from_id, to_id) {
        Ok(handle) => handle,
        Err(e @ DiagramError::InvalidConnection { .. }) => {
            log::warn!("{}", e);
            return None;
        }
        Err(e) => {
            log::error!("Verbindung konnte nicht angelegt werden: {}", e);
            return None;
        }
    };

    if let Some(connection) = state.diagram.connection(handle) {
        connector.attach_connection(connection);
        // Parallele Verbindung übernimmt die bestehende Beschreibung des Paars
        if let Some(text) = state.diagram.connection_description(connection.key()) {
            if let Err(e) = connector.set_label_overlay(handle, Some(text)) {
                log::warn!("Overlay für {} nicht gesetzt: {}", handle, e);
            }
        }
    }
    log::info!("Verbindung {} erstellt: {} → {}", handle, from_id, to_id);
    Some(handle)
}

/// Löscht eine Verbindung: Modell immer, Visual nach bestem Bemühen.
pub fn delete_connection(
    state: &mut AppState,
    connector: &mut dyn Connector,
    handle: ConnectionHandle,
) {
    let removed = state.diagram.remove_connection(handle);
    if let Err(e) = connector.remove_connection_visual(handle) {
        log::warn!("Visual von {} nicht entfernt: {}", handle, e);
    }
    match removed {
        Some(connection) => log::info!("Verbindung {} gelöscht ({})", handle, connection.key()),
        None => log::debug!("Verbindung {} war bereits gelöscht", handle),
    }
}

/// Setzt die Beschreibung eines Paars und ersetzt die Overlays aller
/// Verbindungen, die sich diesen Slot teilen.
pub fn set_description(
    state: &mut AppState,
    connector: &mut dyn Connector,
    key: &ConnectionKey,
    text: &str,
) {
    if !state.diagram.set_connection_description(key, text) {
        log::debug!("Beschreibung für {} verworfen: keine Verbindung", key);
        return;
    }

    let overlay = state.diagram.connection_description(key);
    for handle in state.diagram.connections_with_key(key) {
        if let Err(e) = connector.set_label_overlay(handle, overlay) {
            log::warn!("Overlay für {} nicht gesetzt: {}", handle, e);
        }
    }
    match overlay {
        Some(text) => log::info!("Beschreibung für {} gesetzt: {}", key, text),
        None => log::info!("Beschreibung für {} entfernt", key),
    }
}

/// Entfernt die Visuals aller Verbindungen eines Knotens (Quelle und Ziel).
///
/// Fragt den Connector in beiden Rollen ab, damit auch Visuals ohne
/// Modell-Gegenstück verschwinden.
pub fn remove_connection_visuals_of(connector: &mut dyn Connector, node_id: &NodeId) -> usize {
    let mut handles = connector.connections_of(node_id, ConnectionRole::Source);
    handles.extend(connector.connections_of(node_id, ConnectionRole::Target));
    handles.sort_unstable();
    handles.dedup();

    for &handle in &handles {
        if let Err(e) = connector.remove_connection_visual(handle) {
            log::warn!("Visual von {} nicht entfernt: {}", handle, e);
        }
    }
    handles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::HeadlessConnector;
    use crate::core::{palette_item, Diagram, NodeIdGenerator, NodeKind};
    use crate::shared::EditorOptions;
    use glam::Vec2;

    fn state_with_two_nodes() -> (AppState, NodeId, NodeId) {
        let diagram = Diagram::with_id_generator(NodeIdGenerator::starting_at(7, 0));
        let mut state = AppState::with_diagram(diagram, EditorOptions::default());
        let item = palette_item(NodeKind::Task).expect("Vorlage erwartet");
        let a = state
            .diagram
            .add_node(&item, Vec2::ZERO)
            .expect("ok")
            .id()
            .clone();
        let b = state
            .diagram
            .add_node(&item, Vec2::new(200.0, 0.0))
            .expect("ok")
            .id()
            .clone();
        (state, a, b)
    }

    #[test]
    fn self_loop_leaves_no_visual() {
        let (mut state, a, _) = state_with_two_nodes();
        let mut connector = HeadlessConnector::new();

        assert!(register_connection(&mut state, &mut connector, &a, &a).is_none());
        assert_eq!(state.diagram.connection_count(), 0);
        assert_eq!(connector.connection_visual_count(), 0);
    }

    #[test]
    fn description_updates_all_parallel_overlays() {
        let (mut state, a, b) = state_with_two_nodes();
        let mut connector = HeadlessConnector::new();
        let first = register_connection(&mut state, &mut connector, &a, &b).expect("ok");
        let second = register_connection(&mut state, &mut connector, &a, &b).expect("ok");

        let key = ConnectionKey::new(a.clone(), b.clone());
        set_description(&mut state, &mut connector, &key, "通过");

        assert_eq!(connector.overlay(first), Some("通过"));
        assert_eq!(connector.overlay(second), Some("通过"));
    }

    #[test]
    fn delete_connection_tolerates_missing_visual() {
        let (mut state, a, b) = state_with_two_nodes();
        let handle = state.diagram.add_connection(&a, &b).expect("ok");
        let mut connector = HeadlessConnector::new();

        delete_connection(&mut state, &mut connector, handle);

        assert_eq!(state.diagram.connection_count(), 0);
    }

    #[test]
    fn visuals_of_node_removed_in_both_roles() {
        let (mut state, a, b) = state_with_two_nodes();
        let mut connector = HeadlessConnector::new();
        register_connection(&mut state, &mut connector, &a, &b).expect("ok");
        register_connection(&mut state, &mut connector, &b, &a).expect("ok");

        assert_eq!(remove_connection_visuals_of(&mut connector, &a), 2);
        assert_eq!(connector.connection_visual_count(), 0);
    }
}
