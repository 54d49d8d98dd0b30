//! Fehlertypen des Diagramm-Modells.

use super::NodeId;
use std::fmt;

/// Grund für eine abgelehnte Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidConnectionReason {
    /// Quelle und Ziel sind derselbe Node
    SelfLoop,
    /// Mindestens ein Endpunkt existiert nicht
    DanglingEndpoint,
}

impl fmt::Display for InvalidConnectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidConnectionReason::SelfLoop => f.write_str("Self-Loop nicht erlaubt"),
            InvalidConnectionReason::DanglingEndpoint => f.write_str("Endpunkt existiert nicht"),
        }
    }
}

/// Fehler an der Modellgrenze
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// Verbindung abgelehnt (Self-Loop oder hängender Endpunkt)
    #[error("Ungültige Verbindung {from_id}→{to_id}: {reason}")]
    InvalidConnection {
        from_id: NodeId,
        to_id: NodeId,
        reason: InvalidConnectionReason,
    },
    /// Der ID-Generator hat eine bereits vergebene ID geliefert
    #[error("Node-ID {0} ist bereits vergeben (ID-Generator defekt)")]
    IdCollision(NodeId),
}
