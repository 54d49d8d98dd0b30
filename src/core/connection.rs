//! Repräsentiert eine gerichtete Verbindung zwischen zwei Knoten.

use super::{ConnectionHandle, NodeId};
use std::fmt;

/// Geordnetes Node-Paar; Schlüssel für die Verbindungsbeschreibung.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionKey {
    /// Quell-Node
    pub source: NodeId,
    /// Ziel-Node
    pub target: NodeId,
}

impl ConnectionKey {
    /// Erstellt einen Schlüssel aus Quelle und Ziel.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Prüft ob der Node Quelle oder Ziel ist.
    pub fn touches(&self, node_id: &NodeId) -> bool {
        self.source == *node_id || self.target == *node_id
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// Eine lebende Verbindung im Diagramm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    handle: ConnectionHandle,
    key: ConnectionKey,
}

impl Connection {
    pub(super) fn new(handle: ConnectionHandle, source: NodeId, target: NodeId) -> Self {
        Self {
            handle,
            key: ConnectionKey::new(source, target),
        }
    }

    /// Handle dieser einzelnen Verbindung
    pub fn handle(&self) -> ConnectionHandle {
        self.handle
    }

    /// Quell-Node
    pub fn source(&self) -> &NodeId {
        &self.key.source
    }

    /// Ziel-Node
    pub fn target(&self) -> &NodeId {
        &self.key.target
    }

    /// Paar-Schlüssel (Beschreibungs-Slot)
    pub fn key(&self) -> &ConnectionKey {
        &self.key
    }

    /// Prüft ob der Node an dieser Verbindung beteiligt ist.
    pub fn touches(&self, node_id: &NodeId) -> bool {
        self.key.touches(node_id)
    }
}
