//! Use-Case-Funktionen für Kontextmenü und Inline-Editoren.

use super::{connections, node_editing};
use crate::app::state::{InteractionMode, MenuTarget};
use crate::app::AppState;
use crate::connector::Connector;
use crate::core::{ConnectionHandle, ConnectionKey, NodeId};
use glam::Vec2;

/// Öffnet das Kontextmenü eines Knotens.
pub fn open_node_menu(state: &mut AppState, node_id: NodeId, screen_pos: Vec2) {
    if !state.diagram.contains_node(&node_id) {
        log::debug!("Kontextmenü für unbekannten Node {} ignoriert", node_id);
        return;
    }
    open_menu(state, MenuTarget::Node(node_id), screen_pos);
}

/// Öffnet das Kontextmenü einer Verbindung.
pub fn open_connection_menu(state: &mut AppState, handle: ConnectionHandle, screen_pos: Vec2) {
    if state.diagram.connection(handle).is_none() {
        log::debug!("Kontextmenü für unbekannte Verbindung {} ignoriert", handle);
        return;
    }
    open_menu(state, MenuTarget::Connection(handle), screen_pos);
}

fn open_menu(state: &mut AppState, target: MenuTarget, screen_pos: Vec2) {
    if !state.interaction.open_context_menu(target, screen_pos) {
        log::debug!("Kontextmenü während der Bearbeitung ignoriert");
    }
}

/// Schließt das Kontextmenü.
pub fn close_menu(state: &mut AppState) {
    state.interaction.close_context_menu();
}

/// Schließt das Kontextmenü nach einem Press außerhalb.
pub fn dismiss_menu_outside(state: &mut AppState) {
    if !state.interaction.dismiss_context_menu_outside() {
        log::debug!("Press außerhalb im Öffnungs-Zyklus ignoriert");
    }
}

/// Öffnet den Label-Editor, vorbelegt mit dem aktuellen Label.
pub fn begin_label_edit(state: &mut AppState, node_id: NodeId) {
    let Some(label) = state.diagram.node(&node_id).map(|n| n.label().to_owned()) else {
        log::debug!("Umbenennen: Node {} existiert nicht", node_id);
        return;
    };
    state.interaction.begin_label_edit(node_id, &label);
}

/// Übernimmt das Label und kehrt nach Idle zurück.
pub fn commit_label_edit(state: &mut AppState, connector: &mut dyn Connector, label: &str) {
    if state.interaction.label_editor().is_none() {
        return;
    }
    if let InteractionMode::EditingNodeLabel(editor) = state.interaction.reset_to_idle() {
        node_editing::rename_node(state, connector, &editor.node_id, label);
    }
}

/// Verwirft die Eingabe; das Label bleibt unverändert.
pub fn cancel_label_edit(state: &mut AppState) {
    if state.interaction.label_editor().is_none() {
        return;
    }
    if let InteractionMode::EditingNodeLabel(editor) = state.interaction.reset_to_idle() {
        log::debug!("Umbenennen von {} abgebrochen", editor.node_id);
    }
}

/// Öffnet den Beschreibungs-Dialog, vorbelegt mit der bestehenden Beschreibung.
pub fn begin_description_edit(state: &mut AppState, handle: ConnectionHandle) {
    let Some(key) = state.diagram.connection(handle).map(|c| c.key().clone()) else {
        log::debug!("Beschreibung: Verbindung {} existiert nicht", handle);
        return;
    };
    let existing = state
        .diagram
        .connection_description(&key)
        .map(str::to_owned);
    state
        .interaction
        .begin_description_edit(handle, key, existing.as_deref());
}

/// Übernimmt die Beschreibung und kehrt nach Idle zurück.
pub fn commit_description_edit(
    state: &mut AppState,
    connector: &mut dyn Connector,
    key: &ConnectionKey,
    text: &str,
) {
    if state.interaction.description_editor().is_none() {
        return;
    }
    if let InteractionMode::EditingConnectionDescription(_) = state.interaction.reset_to_idle() {
        connections::set_description(state, connector, key, text);
    }
}

/// Schließt den Beschreibungs-Dialog ohne Änderung.
pub fn cancel_description_edit(state: &mut AppState) {
    if state.interaction.description_editor().is_none() {
        return;
    }
    if let InteractionMode::EditingConnectionDescription(editor) =
        state.interaction.reset_to_idle()
    {
        log::debug!("Beschreibung für {} abgebrochen", editor.key);
    }
}
