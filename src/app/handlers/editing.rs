//! Handler für Knoten: Platzieren, Verschieben, Umbenennen, Löschen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::connector::Connector;
use crate::core::{CanvasRect, NodeId, PaletteItem};
use glam::Vec2;

/// Legt einen Knoten am Drop-Punkt an.
///
/// Eine ID-Kollision ist ein Invarianten-Bruch und wird propagiert.
pub fn place_node(
    state: &mut AppState,
    item: &PaletteItem,
    screen_pos: Vec2,
    container: CanvasRect,
) -> anyhow::Result<()> {
    use_cases::placement::place_node(state, item, screen_pos, container)?;
    Ok(())
}

/// Übernimmt die Position aus einem Drag.
pub fn move_node(
    state: &mut AppState,
    connector: &mut dyn Connector,
    node_id: &NodeId,
    position: Vec2,
) {
    use_cases::node_editing::move_node(state, connector, node_id, position);
}

/// Löscht einen Knoten samt Verbindungen.
pub fn delete_node(state: &mut AppState, connector: &mut dyn Connector, node_id: &NodeId) {
    use_cases::node_editing::delete_node(state, connector, node_id);
}
