//! Statische Palette der verfügbaren Knotenvorlagen.

use super::{NodeKind, PaletteItem};

const PALETTE: [(NodeKind, &str, &str); 4] = [
    (NodeKind::Start, "开始", "#16a34a"),
    (NodeKind::Task, "任务节点", "#3b82f6"),
    (NodeKind::Condition, "条件分支", "#f59e0b"),
    (NodeKind::End, "结束", "#ef4444"),
];

/// Liefert die Standard-Palette in Anzeigereihenfolge.
pub fn default_palette() -> Vec<PaletteItem> {
    PALETTE
        .iter()
        .map(|&(kind, label, color)| PaletteItem::new(kind, label, color))
        .collect()
}

/// Sucht die Vorlage eines Knotentyps.
pub fn palette_item(kind: NodeKind) -> Option<PaletteItem> {
    default_palette().into_iter().find(|item| item.kind == kind)
}
