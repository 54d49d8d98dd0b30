//! Repräsentiert einen platzierten Flussdiagramm-Knoten und seine Vorlage.

use super::NodeId;
use glam::Vec2;
use std::fmt;

/// Typ eines Knotens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Startpunkt
    Start,
    /// Arbeitsschritt
    Task,
    /// Verzweigung
    Condition,
    /// Endpunkt
    End,
}

impl NodeKind {
    /// Kennung wie sie im Knoten angezeigt wird.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Task => "task",
            NodeKind::Condition => "condition",
            NodeKind::End => "end",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unveränderliche Palettenvorlage (zugleich Drag-Payload Palette → Canvas).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    /// Knotentyp
    pub kind: NodeKind,
    /// Start-Beschriftung neuer Knoten
    pub label: String,
    /// Farbe als Hex-String (`#rrggbb`)
    pub color: String,
}

impl PaletteItem {
    /// Erstellt eine Vorlage.
    pub fn new(kind: NodeKind, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Ein platzierter Knoten.
///
/// Felder sind privat: Label und Position ändern sich nur über das
/// [`Diagram`](super::Diagram), Typ und Farbe nie.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    id: NodeId,
    kind: NodeKind,
    label: String,
    /// Canvas-Position der linken oberen Ecke
    position: Vec2,
    color: String,
}

impl FlowNode {
    pub(super) fn from_template(id: NodeId, template: &PaletteItem, position: Vec2) -> Self {
        Self {
            id,
            kind: template.kind,
            label: template.label.clone(),
            position,
            color: template.color.clone(),
        }
    }

    /// ID des Knotens
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Knotentyp
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Aktuelle Beschriftung (nie leer)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Canvas-Position (links oben)
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Farbe aus der Vorlage
    pub fn color(&self) -> &str {
        &self.color
    }

    pub(super) fn set_label(&mut self, label: &str) {
        self.label = label.to_owned();
    }

    pub(super) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}
