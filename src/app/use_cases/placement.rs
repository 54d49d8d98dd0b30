//! Use-Case: Palette-Vorlage auf dem Canvas ablegen.

use crate::app::AppState;
use crate::core::{CanvasRect, DiagramError, NodeId, PaletteItem};
use glam::Vec2;

/// Legt einen Knoten am Drop-Punkt an.
///
/// Der Knoten wird mit seiner linken oberen Ecke am Drop-Punkt verankert.
/// Drops außerhalb des Containers werden still verworfen (`Ok(None)`).
pub fn place_node(
    state: &mut AppState,
    item: &PaletteItem,
    screen_pos: Vec2,
    container: CanvasRect,
) -> Result<Option<NodeId>, DiagramError> {
    if !container.contains(screen_pos) {
        log::debug!(
            "Drop außerhalb des Canvas bei ({:.0}, {:.0}) verworfen",
            screen_pos.x,
            screen_pos.y
        );
        return Ok(None);
    }

    let canvas_pos = state
        .view
        .viewport
        .screen_to_canvas(screen_pos, container.min);
    let node = state.diagram.add_node(item, canvas_pos)?;
    log::info!(
        "Node {} ({}) platziert bei ({:.0}, {:.0})",
        node.id(),
        node.kind(),
        canvas_pos.x,
        canvas_pos.y
    );
    Ok(Some(node.id().clone()))
}
