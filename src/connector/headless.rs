//! In-Memory-Connector ohne Darstellung (Tests, Benchmarks, Headless-Betrieb).

use super::{ConnectionRole, Connector, ConnectorError, ConnectorEvent};
use crate::core::{Connection, ConnectionHandle, ConnectionKey, FlowNode, NodeId};
use glam::Vec2;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet};

/// Speichert angemeldete Visuals nur als Daten.
///
/// Über [`hide_element`](Self::hide_element) und
/// [`fail_overlay_removal`](Self::fail_overlay_removal) lassen sich die
/// Fehlerpfade echter Backends nachstellen.
#[derive(Debug, Default)]
pub struct HeadlessConnector {
    nodes: IndexMap<NodeId, (Vec2, String)>,
    visuals: IndexMap<ConnectionHandle, ConnectionKey>,
    overlays: HashMap<ConnectionHandle, String>,
    hidden: HashSet<NodeId>,
    failing_overlays: IndexSet<ConnectionHandle>,
    pending: Vec<ConnectorEvent>,
    zoom: f32,
    repaint_count: usize,
    destroyed: bool,
}

impl HeadlessConnector {
    /// Erstellt einen leeren Connector mit Zoom 1.0
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            ..Default::default()
        }
    }

    /// Simuliert ein noch nicht vorhandenes DOM-/Widget-Element.
    pub fn hide_element(&mut self, node_id: &NodeId) {
        self.hidden.insert(node_id.clone());
    }

    /// Macht ein zuvor verstecktes Element wieder verfügbar.
    pub fn show_element(&mut self, node_id: &NodeId) {
        self.hidden.remove(node_id);
    }

    /// Lässt das nächste Entfernen des Overlays dieser Verbindung fehlschlagen.
    pub fn fail_overlay_removal(&mut self, handle: ConnectionHandle) {
        self.failing_overlays.insert(handle);
    }

    /// Reiht eine Benutzergeste ein (wie ein Klick im echten Backend).
    pub fn push_event(&mut self, event: ConnectorEvent) {
        self.pending.push(event);
    }

    /// Anzahl angemeldeter Knoten-Visuals
    pub fn registered_count(&self) -> usize {
        self.nodes.len()
    }

    /// Zuletzt synchronisierte Position eines Knotens
    pub fn node_position(&self, node_id: &NodeId) -> Option<Vec2> {
        self.nodes.get(node_id).map(|(pos, _)| *pos)
    }

    /// Zuletzt synchronisierte Beschriftung eines Knotens
    pub fn node_label(&self, node_id: &NodeId) -> Option<&str> {
        self.nodes.get(node_id).map(|(_, label)| label.as_str())
    }

    /// Gibt `true` zurück, wenn ein Verbindungs-Visual existiert
    pub fn has_connection_visual(&self, handle: ConnectionHandle) -> bool {
        self.visuals.contains_key(&handle)
    }

    /// Anzahl der Verbindungs-Visuals
    pub fn connection_visual_count(&self) -> usize {
        self.visuals.len()
    }

    /// Aktuelles Overlay einer Verbindung
    pub fn overlay(&self, handle: ConnectionHandle) -> Option<&str> {
        self.overlays.get(&handle).map(String::as_str)
    }

    /// Zuletzt gesetzter Zoom
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Wie oft neu gezeichnet wurde
    pub fn repaint_count(&self) -> usize {
        self.repaint_count
    }

    /// Wurde der Connector freigegeben?
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Connector for HeadlessConnector {
    fn register_node(&mut self, node: &FlowNode) -> Result<(), ConnectorError> {
        if self.hidden.contains(node.id()) {
            return Err(ConnectorError::MissingVisualElement(node.id().clone()));
        }
        self.nodes.insert(
            node.id().clone(),
            (node.position(), node.label().to_owned()),
        );
        Ok(())
    }

    fn is_registered(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    fn refresh_node(&mut self, node: &FlowNode) {
        if let Some(entry) = self.nodes.get_mut(node.id()) {
            *entry = (node.position(), node.label().to_owned());
        }
    }

    fn unregister_node(&mut self, node_id: &NodeId) {
        self.nodes.shift_remove(node_id);
    }

    fn attach_connection(&mut self, connection: &Connection) {
        self.visuals
            .insert(connection.handle(), connection.key().clone());
    }

    fn connections_of(&self, node_id: &NodeId, role: ConnectionRole) -> Vec<ConnectionHandle> {
        self.visuals
            .iter()
            .filter(|(_, key)| match role {
                ConnectionRole::Source => key.source == *node_id,
                ConnectionRole::Target => key.target == *node_id,
            })
            .map(|(handle, _)| *handle)
            .collect()
    }

    fn remove_connection_visual(
        &mut self,
        handle: ConnectionHandle,
    ) -> Result<(), ConnectorError> {
        self.overlays.remove(&handle);
        self.visuals
            .shift_remove(&handle)
            .map(|_| ())
            .ok_or(ConnectorError::UnknownConnection(handle))
    }

    fn remove_label_overlay(&mut self, handle: ConnectionHandle) -> Result<(), ConnectorError> {
        if self.failing_overlays.shift_remove(&handle) {
            return Err(ConnectorError::OverlayRemovalFailure(handle));
        }
        self.overlays.remove(&handle);
        Ok(())
    }

    fn add_label_overlay(
        &mut self,
        handle: ConnectionHandle,
        text: &str,
    ) -> Result<(), ConnectorError> {
        if !self.visuals.contains_key(&handle) {
            return Err(ConnectorError::UnknownConnection(handle));
        }
        self.overlays.insert(handle, text.to_owned());
        Ok(())
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    fn repaint_everything(&mut self) {
        self.repaint_count += 1;
    }

    fn drain_events(&mut self) -> Vec<ConnectorEvent> {
        std::mem::take(&mut self.pending)
    }

    fn destroy(&mut self) {
        self.nodes.clear();
        self.visuals.clear();
        self.overlays.clear();
        self.pending.clear();
        self.destroyed = true;
    }
}
