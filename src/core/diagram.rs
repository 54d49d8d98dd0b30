//! Das Diagramm-Modell: Knoten, Verbindungen und Verbindungsbeschreibungen.

use super::{
    Connection, ConnectionHandle, ConnectionKey, DiagramError, FlowNode, InvalidConnectionReason,
    NodeId, NodeIdGenerator, PaletteItem,
};
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Container für alle Knoten und Verbindungen eines Canvas.
///
/// Invarianten:
/// - jede Verbindung referenziert zwei lebende, verschiedene Knoten
/// - jede Beschreibung gehört zu mindestens einer lebenden Verbindung ihres Paars
/// - kein Knoten hat ein leeres Label
#[derive(Debug, Clone)]
pub struct Diagram {
    /// Knoten in Einfügereihenfolge (= Zeichenreihenfolge)
    nodes: IndexMap<NodeId, FlowNode>,
    /// Verbindungen in Einfügereihenfolge
    connections: IndexMap<ConnectionHandle, Connection>,
    /// Beschreibungen je Node-Paar, nie leer
    descriptions: HashMap<ConnectionKey, String>,
    id_generator: NodeIdGenerator,
    next_connection_handle: u64,
}

impl Diagram {
    /// Erstellt ein leeres Diagramm
    pub fn new() -> Self {
        Self::with_id_generator(NodeIdGenerator::new())
    }

    /// Erstellt ein leeres Diagramm mit vorgegebenem ID-Generator
    pub fn with_id_generator(id_generator: NodeIdGenerator) -> Self {
        Self {
            nodes: IndexMap::new(),
            connections: IndexMap::new(),
            descriptions: HashMap::new(),
            id_generator,
            next_connection_handle: 1,
        }
    }

    /// Ersetzt den ID-Generator (nur für Tests des Kollisionspfads).
    #[cfg(test)]
    pub(crate) fn replace_id_generator(&mut self, id_generator: NodeIdGenerator) {
        self.id_generator = id_generator;
    }

    // ── Knoten ──────────────────────────────────────────────────────

    /// Legt einen Knoten aus einer Vorlage an der Canvas-Position an.
    ///
    /// Liefert der Generator eine bereits vergebene ID, wird nichts überschrieben
    /// und `IdCollision` zurückgegeben.
    pub fn add_node(
        &mut self,
        template: &PaletteItem,
        position: Vec2,
    ) -> Result<&FlowNode, DiagramError> {
        let id = self.id_generator.next_id();
        if self.nodes.contains_key(&id) {
            log::error!("Node-ID-Kollision: {} existiert bereits", id);
            return Err(DiagramError::IdCollision(id));
        }

        let node = FlowNode::from_template(id.clone(), template, position);
        let entry = self.nodes.entry(id).or_insert(node);
        Ok(entry)
    }

    /// Entfernt einen Knoten inklusive aller Verbindungen, an denen er beteiligt ist.
    ///
    /// Idempotent: unbekannte IDs sind ein No-op.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<FlowNode> {
        let removed = self.nodes.shift_remove(node_id)?;

        let before = self.connections.len();
        self.connections.retain(|_, conn| !conn.touches(node_id));
        self.descriptions.retain(|key, _| !key.touches(node_id));

        log::debug!(
            "Node {} entfernt ({} Verbindung(en) kaskadiert)",
            node_id,
            before - self.connections.len()
        );
        Some(removed)
    }

    /// Setzt ein neues Label. Leere Labels werden abgelehnt (`false`).
    pub fn update_node_label(&mut self, node_id: &NodeId, label: &str) -> bool {
        if label.is_empty() {
            return false;
        }
        let Some(node) = self.nodes.get_mut(node_id) else {
            return false;
        };
        node.set_label(label);
        true
    }

    /// Aktualisiert die Canvas-Position eines Knotens.
    pub fn update_node_position(&mut self, node_id: &NodeId, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(node_id) else {
            return false;
        };
        node.set_position(position);
        true
    }

    /// Findet einen Knoten
    pub fn node(&self, node_id: &NodeId) -> Option<&FlowNode> {
        self.nodes.get(node_id)
    }

    /// Prüft ob ein Knoten existiert
    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Iterator über alle Knoten in Einfügereihenfolge
    pub fn nodes_iter(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values()
    }

    /// Gibt die Anzahl der Knoten zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn das Diagramm keine Knoten hat
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Verbindungen ────────────────────────────────────────────────

    /// Erstellt eine Verbindung von `from_id` nach `to_id`.
    ///
    /// Parallele Verbindungen desselben Paars sind erlaubt.
    pub fn add_connection(
        &mut self,
        from_id: &NodeId,
        to_id: &NodeId,
    ) -> Result<ConnectionHandle, DiagramError> {
        let reason = if from_id == to_id {
            Some(InvalidConnectionReason::SelfLoop)
        } else if !self.nodes.contains_key(from_id) || !self.nodes.contains_key(to_id) {
            Some(InvalidConnectionReason::DanglingEndpoint)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(DiagramError::InvalidConnection {
                from_id: from_id.clone(),
                to_id: to_id.clone(),
                reason,
            });
        }

        let handle = ConnectionHandle::new(self.next_connection_handle);
        self.next_connection_handle += 1;
        self.connections.insert(
            handle,
            Connection::new(handle, from_id.clone(), to_id.clone()),
        );
        Ok(handle)
    }

    /// Entfernt eine Verbindung. Idempotent.
    ///
    /// Die Beschreibung des Paars verschwindet, sobald keine Verbindung
    /// dieses Paars mehr lebt.
    pub fn remove_connection(&mut self, handle: ConnectionHandle) -> Option<Connection> {
        let removed = self.connections.shift_remove(&handle)?;
        let key = removed.key();
        if !self.connections.values().any(|c| c.key() == key) {
            self.descriptions.remove(key);
        }
        Some(removed)
    }

    /// Findet eine Verbindung
    pub fn connection(&self, handle: ConnectionHandle) -> Option<&Connection> {
        self.connections.get(&handle)
    }

    /// Iterator über alle Verbindungen in Einfügereihenfolge
    pub fn connections_iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Alle Verbindungen, an denen der Knoten als Quelle oder Ziel beteiligt ist
    pub fn connections_of(&self, node_id: &NodeId) -> Vec<ConnectionHandle> {
        self.connections
            .values()
            .filter(|c| c.touches(node_id))
            .map(Connection::handle)
            .collect()
    }

    /// Alle Verbindungen eines Node-Paars (parallele Verbindungen)
    pub fn connections_with_key(&self, key: &ConnectionKey) -> Vec<ConnectionHandle> {
        self.connections
            .values()
            .filter(|c| c.key() == key)
            .map(Connection::handle)
            .collect()
    }

    /// Gibt die Anzahl der Verbindungen zurück
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    // ── Beschreibungen ──────────────────────────────────────────────

    /// Setzt die Beschreibung eines Paars; leerer Text löscht den Eintrag.
    ///
    /// Gibt `false` zurück, wenn keine Verbindung dieses Paars existiert.
    pub fn set_connection_description(&mut self, key: &ConnectionKey, text: &str) -> bool {
        if !self.connections.values().any(|c| c.key() == key) {
            return false;
        }
        if text.is_empty() {
            self.descriptions.remove(key);
        } else {
            self.descriptions.insert(key.clone(), text.to_owned());
        }
        true
    }

    /// Beschreibung eines Paars (None = keine Beschreibung)
    pub fn connection_description(&self, key: &ConnectionKey) -> Option<&str> {
        self.descriptions.get(key).map(String::as_str)
    }

    /// Gibt die Anzahl gespeicherter Beschreibungen zurück
    pub fn description_count(&self) -> usize {
        self.descriptions.len()
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}
