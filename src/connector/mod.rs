//! Connector-Schnittstelle: Darstellung, Hit-Testing und Drag der Knoten-Visuals.
//!
//! Das Diagramm-Modell bleibt die einzige Wahrheit; der Connector spiegelt es
//! nur visuell und meldet Benutzergesten als [`ConnectorEvent`] zurück.

mod headless;

pub use headless::HeadlessConnector;

use crate::core::{Connection, ConnectionHandle, FlowNode, NodeId};
use glam::Vec2;

/// Rolle eines Knotens in einer Verbindung (für Abfragen am Connector)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRole {
    /// Knoten ist Quelle
    Source,
    /// Knoten ist Ziel
    Target,
}

/// Vom Connector gemeldete Benutzergesten
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorEvent {
    /// Benutzer hat eine Verbindung von Anker zu Anker gezogen
    ConnectionDrawn { from_id: NodeId, to_id: NodeId },
    /// Knoten wurde an eine neue Canvas-Position gezogen
    NodeDragged { node_id: NodeId, position: Vec2 },
    /// Rechtsklick auf einen Knoten
    NodeContextMenu { node_id: NodeId, screen_pos: Vec2 },
    /// Rechtsklick auf eine Verbindung
    ConnectionContextMenu {
        handle: ConnectionHandle,
        screen_pos: Vec2,
    },
}

/// Fehler der Connector-Backends
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    /// Das Visual des Knotens existiert (noch) nicht
    #[error("Visual für Node {0} nicht vorhanden")]
    MissingVisualElement(NodeId),
    /// Verbindung ist dem Connector unbekannt
    #[error("Verbindung {0} ist nicht registriert")]
    UnknownConnection(ConnectionHandle),
    /// Entfernen des Label-Overlays fehlgeschlagen
    #[error("Label-Overlay von {0} konnte nicht entfernt werden")]
    OverlayRemovalFailure(ConnectionHandle),
}

/// Fähigkeiten, die der Editor von einer Verbindungs-Bibliothek erwartet.
///
/// Ein Connector wird einmal pro Canvas erzeugt und mit [`Connector::destroy`]
/// freigegeben, nachdem alle Visuals abgemeldet sind.
pub trait Connector {
    /// Meldet einen Knoten als zieh- und verbindbares Visual an.
    fn register_node(&mut self, node: &FlowNode) -> Result<(), ConnectorError>;

    /// Ist der Knoten bereits angemeldet?
    fn is_registered(&self, node_id: &NodeId) -> bool;

    /// Gleicht Position und Beschriftung eines angemeldeten Knotens ab.
    fn refresh_node(&mut self, node: &FlowNode);

    /// Meldet das Visual eines Knotens ab.
    fn unregister_node(&mut self, node_id: &NodeId);

    /// Hängt das Visual einer im Modell registrierten Verbindung an.
    fn attach_connection(&mut self, connection: &Connection);

    /// Verbindungs-Visuals, an denen der Knoten in der gegebenen Rolle beteiligt ist.
    fn connections_of(&self, node_id: &NodeId, role: ConnectionRole) -> Vec<ConnectionHandle>;

    /// Entfernt das Visual einer Verbindung.
    fn remove_connection_visual(&mut self, handle: ConnectionHandle)
        -> Result<(), ConnectorError>;

    /// Entfernt das Label-Overlay einer Verbindung.
    fn remove_label_overlay(&mut self, handle: ConnectionHandle) -> Result<(), ConnectorError>;

    /// Fügt ein Label-Overlay in der Mitte der Verbindung hinzu.
    fn add_label_overlay(
        &mut self,
        handle: ConnectionHandle,
        text: &str,
    ) -> Result<(), ConnectorError>;

    /// Ersetzt das Label-Overlay: altes entfernen (Fehler werden ignoriert),
    /// neues nur bei nicht-leerem Text hinzufügen.
    fn set_label_overlay(
        &mut self,
        handle: ConnectionHandle,
        text: Option<&str>,
    ) -> Result<(), ConnectorError> {
        if let Err(e) = self.remove_label_overlay(handle) {
            log::debug!("Overlay-Entfernung ignoriert: {}", e);
        }
        match text {
            Some(text) if !text.is_empty() => self.add_label_overlay(handle, text),
            _ => Ok(()),
        }
    }

    /// Übernimmt den Zoom-Faktor für die Darstellung.
    fn set_zoom(&mut self, zoom: f32);

    /// Erzwingt ein Neuzeichnen aller Verbindungen.
    fn repaint_everything(&mut self);

    /// Liefert alle seit dem letzten Aufruf gesammelten Events.
    fn drain_events(&mut self) -> Vec<ConnectorEvent>;

    /// Gibt den Connector frei.
    fn destroy(&mut self);
}
