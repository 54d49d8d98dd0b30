use crate::core::{CanvasRect, ConnectionHandle, NodeId, PaletteItem};
use glam::Vec2;

/// Einträge der Kontextmenüs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Node umbenennen ("修改名称")
    Rename,
    /// Node löschen ("删除节点")
    DeleteNode,
    /// Beschreibung hinzufügen ("添加描述")
    AddDescription,
    /// Verbindung löschen ("删除连线")
    DeleteConnection,
}

/// Für die Editoren relevante Tasten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Enter
    Enter,
    /// Escape
    Escape,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Palette-Vorlage wurde über dem Canvas losgelassen
    PaletteItemDropped {
        item: PaletteItem,
        screen_pos: Vec2,
        container: CanvasRect,
    },
    /// Mausrad über dem Canvas (`zoom_modifier` = Ctrl/Cmd gehalten)
    WheelScrolled { delta_y: f32, zoom_modifier: bool },
    /// Connector meldet eine gezogene Verbindung
    ConnectionDrawn { from_id: NodeId, to_id: NodeId },
    /// Connector meldet einen verschobenen Knoten
    NodeDragged { node_id: NodeId, position: Vec2 },
    /// Rechtsklick auf einen Knoten
    NodeContextMenuRequested { node_id: NodeId, screen_pos: Vec2 },
    /// Rechtsklick auf eine Verbindung
    ConnectionContextMenuRequested {
        handle: ConnectionHandle,
        screen_pos: Vec2,
    },
    /// Primärer Press außerhalb des Kontextmenüs
    PointerPressedOutsideMenu,
    /// Eintrag im Kontextmenü gewählt
    ContextMenuActionChosen { action: MenuAction },
    /// Taste im Label-Editor
    LabelEditorKeyPressed { key: EditorKey },
    /// Label-Editor hat den Fokus verloren
    LabelEditorBlurred,
    /// Taste im Beschreibungs-Dialog (`command_modifier` = Ctrl/Cmd gehalten)
    DescriptionEditorKeyPressed {
        key: EditorKey,
        command_modifier: bool,
    },
    /// Beschreibungs-Dialog hat den Fokus verloren
    DescriptionEditorBlurred,
    /// Press auf den Sidebar-Resize-Griff
    SidebarResizePressed,
    /// Press auf den Wiederherstellen-Pfeil
    SidebarRestorePressed,
    /// Pointer-Bewegung während einer Sidebar-Geste (x in Screen-Pixeln)
    SidebarPointerMoved { x: f32 },
    /// Pointer losgelassen während einer Sidebar-Geste
    SidebarPointerReleased,
    /// Registrierung der Knoten mit dem Connector abgleichen
    CanvasRefreshRequested,
    /// Anwendung beenden
    ExitRequested,
}

impl From<crate::connector::ConnectorEvent> for AppIntent {
    fn from(event: crate::connector::ConnectorEvent) -> Self {
        use crate::connector::ConnectorEvent;
        match event {
            ConnectorEvent::ConnectionDrawn { from_id, to_id } => {
                AppIntent::ConnectionDrawn { from_id, to_id }
            }
            ConnectorEvent::NodeDragged { node_id, position } => {
                AppIntent::NodeDragged { node_id, position }
            }
            ConnectorEvent::NodeContextMenu {
                node_id,
                screen_pos,
            } => AppIntent::NodeContextMenuRequested {
                node_id,
                screen_pos,
            },
            ConnectorEvent::ConnectionContextMenu { handle, screen_pos } => {
                AppIntent::ConnectionContextMenuRequested { handle, screen_pos }
            }
        }
    }
}
