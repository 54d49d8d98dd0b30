//! Handler für Kontextmenü, Label-Editor und Beschreibungs-Dialog.

use crate::app::use_cases;
use crate::app::AppState;
use crate::connector::Connector;
use crate::core::{ConnectionHandle, ConnectionKey, NodeId};
use glam::Vec2;

/// Öffnet das Kontextmenü eines Knotens.
pub fn open_node_menu(state: &mut AppState, node_id: NodeId, screen_pos: Vec2) {
    use_cases::interaction::open_node_menu(state, node_id, screen_pos);
}

/// Öffnet das Kontextmenü einer Verbindung.
pub fn open_connection_menu(state: &mut AppState, handle: ConnectionHandle, screen_pos: Vec2) {
    use_cases::interaction::open_connection_menu(state, handle, screen_pos);
}

/// Schließt das Kontextmenü.
pub fn close_menu(state: &mut AppState) {
    use_cases::interaction::close_menu(state);
}

/// Schließt das Kontextmenü nach einem Press außerhalb.
pub fn dismiss_menu_outside(state: &mut AppState) {
    use_cases::interaction::dismiss_menu_outside(state);
}

/// Öffnet den Label-Editor.
pub fn begin_label_edit(state: &mut AppState, node_id: NodeId) {
    use_cases::interaction::begin_label_edit(state, node_id);
}

/// Übernimmt das Label.
pub fn commit_label_edit(state: &mut AppState, connector: &mut dyn Connector, label: &str) {
    use_cases::interaction::commit_label_edit(state, connector, label);
}

/// Verwirft den Label-Editor.
pub fn cancel_label_edit(state: &mut AppState) {
    use_cases::interaction::cancel_label_edit(state);
}

/// Öffnet den Beschreibungs-Dialog.
pub fn begin_description_edit(state: &mut AppState, handle: ConnectionHandle) {
    use_cases::interaction::begin_description_edit(state, handle);
}

/// Übernimmt die Beschreibung.
pub fn commit_description_edit(
    state: &mut AppState,
    connector: &mut dyn Connector,
    key: &ConnectionKey,
    text: &str,
) {
    use_cases::interaction::commit_description_edit(state, connector, key, text);
}

/// Verwirft den Beschreibungs-Dialog.
pub fn cancel_description_edit(state: &mut AppState) {
    use_cases::interaction::cancel_description_edit(state);
}
