//! Interaktions-Zustandsmaschine: Kontextmenü und Inline-Editoren.

use super::SidebarState;
use crate::core::{ConnectionHandle, ConnectionKey, NodeId};
use glam::Vec2;

/// Ziel eines Kontextmenüs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    /// Rechtsklick auf einen Knoten
    Node(NodeId),
    /// Rechtsklick auf eine Verbindung
    Connection(ConnectionHandle),
}

/// Geöffnetes Kontextmenü
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    /// Worauf sich das Menü bezieht
    pub target: MenuTarget,
    /// Screen-Position der linken oberen Ecke
    pub screen_pos: Vec2,
    /// Dispatch-Zyklus, in dem das Menü geöffnet wurde
    pub opened_cycle: u64,
}

/// Inline-Editor für ein Node-Label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEditor {
    /// Bearbeiteter Knoten
    pub node_id: NodeId,
    /// Aktueller Eingabetext
    pub buffer: String,
    /// Fokus + Vollauswahl im nächsten Frame setzen
    pub focus_pending: bool,
}

/// Dialog für eine Verbindungsbeschreibung
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionEditor {
    /// Verbindung, über die der Dialog geöffnet wurde
    pub handle: ConnectionHandle,
    /// Paar-Schlüssel des Beschreibungs-Slots
    pub key: ConnectionKey,
    /// Aktueller Eingabetext (vorbelegt mit der bestehenden Beschreibung)
    pub buffer: String,
    /// Fokus im nächsten Frame setzen
    pub focus_pending: bool,
}

/// Gegenseitig exklusive Interaktionsmodi
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    /// Nichts geöffnet
    #[default]
    Idle,
    /// Kontextmenü sichtbar
    ContextMenuOpen(ContextMenu),
    /// Node-Label wird inline bearbeitet
    EditingNodeLabel(LabelEditor),
    /// Beschreibungs-Dialog offen
    EditingConnectionDescription(DescriptionEditor),
}

/// Interaktionszustand des Canvas
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Aktueller Modus
    pub mode: InteractionMode,
    /// Sidebar-Breite und Drag-Flags (unabhängig vom Modus)
    pub sidebar: SidebarState,
    dispatch_cycle: u64,
}

impl InteractionState {
    /// Erstellt den Idle-Zustand mit gegebener Sidebar-Breite.
    pub fn new(sidebar_width: f32) -> Self {
        Self {
            mode: InteractionMode::Idle,
            sidebar: SidebarState::new(sidebar_width),
            dispatch_cycle: 0,
        }
    }

    /// Startet einen neuen Dispatch-Zyklus (ein Frame bzw. ein Event-Batch).
    pub fn begin_dispatch_cycle(&mut self) {
        self.dispatch_cycle += 1;
    }

    /// Nummer des laufenden Dispatch-Zyklus
    pub fn dispatch_cycle(&self) -> u64 {
        self.dispatch_cycle
    }

    /// Ist kein Overlay offen?
    pub fn is_idle(&self) -> bool {
        matches!(self.mode, InteractionMode::Idle)
    }

    /// Ist einer der beiden Editoren offen?
    pub fn is_editing(&self) -> bool {
        matches!(
            self.mode,
            InteractionMode::EditingNodeLabel(_) | InteractionMode::EditingConnectionDescription(_)
        )
    }

    /// Geöffnetes Kontextmenü
    pub fn context_menu(&self) -> Option<&ContextMenu> {
        match &self.mode {
            InteractionMode::ContextMenuOpen(menu) => Some(menu),
            _ => None,
        }
    }

    /// Aktiver Label-Editor
    pub fn label_editor(&self) -> Option<&LabelEditor> {
        match &self.mode {
            InteractionMode::EditingNodeLabel(editor) => Some(editor),
            _ => None,
        }
    }

    /// Aktiver Label-Editor (mutierbar, für die Texteingabe)
    pub fn label_editor_mut(&mut self) -> Option<&mut LabelEditor> {
        match &mut self.mode {
            InteractionMode::EditingNodeLabel(editor) => Some(editor),
            _ => None,
        }
    }

    /// Aktiver Beschreibungs-Editor
    pub fn description_editor(&self) -> Option<&DescriptionEditor> {
        match &self.mode {
            InteractionMode::EditingConnectionDescription(editor) => Some(editor),
            _ => None,
        }
    }

    /// Aktiver Beschreibungs-Editor (mutierbar, für die Texteingabe)
    pub fn description_editor_mut(&mut self) -> Option<&mut DescriptionEditor> {
        match &mut self.mode {
            InteractionMode::EditingConnectionDescription(editor) => Some(editor),
            _ => None,
        }
    }

    /// Öffnet ein Kontextmenü.
    ///
    /// Aus `Idle` und aus einem offenen Menü (Neu-Ausrichtung) erlaubt,
    /// während eines Editors ignoriert. Gibt `true` zurück, wenn geöffnet.
    pub fn open_context_menu(&mut self, target: MenuTarget, screen_pos: Vec2) -> bool {
        if self.is_editing() {
            return false;
        }
        self.mode = InteractionMode::ContextMenuOpen(ContextMenu {
            target,
            screen_pos,
            opened_cycle: self.dispatch_cycle,
        });
        true
    }

    /// Schließt ein offenes Kontextmenü; andere Modi bleiben unberührt.
    pub fn close_context_menu(&mut self) {
        if self.context_menu().is_some() {
            self.mode = InteractionMode::Idle;
        }
    }

    /// Primärer Press außerhalb des Menüs.
    ///
    /// Ein im selben Dispatch-Zyklus geöffnetes Menü bleibt offen.
    pub fn dismiss_context_menu_outside(&mut self) -> bool {
        match self.context_menu() {
            Some(menu) if menu.opened_cycle != self.dispatch_cycle => {
                self.mode = InteractionMode::Idle;
                true
            }
            _ => false,
        }
    }

    /// Wechselt in den Label-Editor (Puffer = aktuelles Label).
    pub fn begin_label_edit(&mut self, node_id: NodeId, current_label: &str) {
        self.mode = InteractionMode::EditingNodeLabel(LabelEditor {
            node_id,
            buffer: current_label.to_owned(),
            focus_pending: true,
        });
    }

    /// Wechselt in den Beschreibungs-Dialog (Puffer = bestehende Beschreibung).
    pub fn begin_description_edit(
        &mut self,
        handle: ConnectionHandle,
        key: ConnectionKey,
        existing: Option<&str>,
    ) {
        self.mode = InteractionMode::EditingConnectionDescription(DescriptionEditor {
            handle,
            key,
            buffer: existing.unwrap_or_default().to_owned(),
            focus_pending: true,
        });
    }

    /// Beendet den Modus und liefert den vorherigen zurück.
    pub fn reset_to_idle(&mut self) -> InteractionMode {
        std::mem::take(&mut self.mode)
    }
}
