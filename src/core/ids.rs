//! Identitäten für Nodes und Verbindungen.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Eindeutige Node-ID (`node-<session-ms>-<laufnummer>`).
///
/// Wird nie wiederverwendet; Verbindungen, Kontextmenü und Editoren
/// referenzieren Nodes ausschließlich über diese ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Erstellt eine ID aus einem Rohwert.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Rohwert als String-Slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Erzeugt monoton steigende Node-IDs innerhalb einer Session.
#[derive(Debug, Clone)]
pub struct NodeIdGenerator {
    session_ms: u128,
    next_seq: u64,
}

impl NodeIdGenerator {
    /// Startet einen Generator mit dem aktuellen Zeitstempel als Session-Präfix.
    pub fn new() -> Self {
        let session_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self::starting_at(session_ms, 0)
    }

    /// Generator mit festem Präfix und Startwert (deterministisch, z.B. für Tests).
    pub fn starting_at(session_ms: u128, next_seq: u64) -> Self {
        Self {
            session_ms,
            next_seq,
        }
    }

    /// Liefert die nächste ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(format!("node-{}-{}", self.session_ms, self.next_seq));
        self.next_seq += 1;
        id
    }
}

impl Default for NodeIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle einer einzelnen Verbindung.
///
/// Mehrere parallele Verbindungen desselben Node-Paars haben unterschiedliche
/// Handles, teilen sich aber den Beschreibungs-Slot ihres [`ConnectionKey`](super::ConnectionKey).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionHandle(u64);

impl ConnectionHandle {
    /// Erstellt ein Handle aus einem Rohwert.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Rohwert des Handles.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}
