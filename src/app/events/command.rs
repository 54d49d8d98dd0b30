use crate::core::{CanvasRect, ConnectionHandle, ConnectionKey, NodeId, PaletteItem};
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Zoom mit Faktor multiplizieren (geklemmt)
    ZoomCanvas { factor: f32 },
    /// Neuen Knoten aus Vorlage am Drop-Punkt anlegen
    PlaceNode {
        item: PaletteItem,
        screen_pos: Vec2,
        container: CanvasRect,
    },
    /// Noch nicht registrierte Knoten beim Connector anmelden
    SyncNodeRegistration,
    /// Knoten-Position aus einem Drag übernehmen
    MoveNode { node_id: NodeId, position: Vec2 },
    /// Gezogene Verbindung im Modell registrieren
    RegisterConnection { from_id: NodeId, to_id: NodeId },
    /// Knoten samt Verbindungen löschen
    DeleteNode { node_id: NodeId },
    /// Einzelne Verbindung löschen
    DeleteConnection { handle: ConnectionHandle },
    /// Kontextmenü für Knoten öffnen
    OpenNodeContextMenu { node_id: NodeId, screen_pos: Vec2 },
    /// Kontextmenü für Verbindung öffnen
    OpenConnectionContextMenu {
        handle: ConnectionHandle,
        screen_pos: Vec2,
    },
    /// Kontextmenü schließen
    CloseContextMenu,
    /// Kontextmenü nach Press außerhalb schließen (nicht im Öffnungs-Zyklus)
    DismissContextMenuOutside,
    /// Label-Editor für Knoten öffnen
    BeginNodeLabelEdit { node_id: NodeId },
    /// Label übernehmen
    CommitNodeLabelEdit { label: String },
    /// Label-Editor verwerfen
    CancelNodeLabelEdit,
    /// Beschreibungs-Dialog öffnen
    BeginConnectionDescriptionEdit { handle: ConnectionHandle },
    /// Beschreibung übernehmen
    CommitConnectionDescriptionEdit { key: ConnectionKey, text: String },
    /// Beschreibungs-Dialog verwerfen
    CancelConnectionDescriptionEdit,
    /// Sidebar-Resize starten
    BeginSidebarResize,
    /// Sidebar-Restore starten
    BeginSidebarRestore,
    /// Sidebar-Breite der Pointer-Position folgen lassen
    MoveSidebarPointer { x: f32 },
    /// Sidebar-Geste beenden
    ReleaseSidebarPointer,
    /// Anwendung beenden
    RequestExit,
}
