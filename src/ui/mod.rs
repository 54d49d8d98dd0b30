//! UI-Layer mit egui: Sidebar, Workspace, Kontextmenü, Editoren, Input-Handling.

mod canvas;
mod connector;
mod context_menu;
mod editors;
mod fonts;
pub mod input;
mod palette;
pub mod theme;

pub use canvas::render_workspace;
pub use connector::EguiConnector;
pub use context_menu::render_context_menu;
pub use editors::render_description_editor;
pub use fonts::configure_fonts;
pub use palette::render_sidebar;

use crate::core::Viewport;
use crate::shared::EditorOptions;

/// Screen-Rechteck einer Knoten-Box an einer Canvas-Position.
pub(crate) fn node_screen_rect(
    position: glam::Vec2,
    origin: egui::Pos2,
    viewport: &Viewport,
    options: &EditorOptions,
) -> egui::Rect {
    let min = viewport.canvas_to_screen(position, to_vec2(origin));
    let size = options.node_size() * viewport.zoom();
    egui::Rect::from_min_size(to_pos2(min), egui::vec2(size.x, size.y))
}

/// glam → egui
pub(crate) fn to_pos2(v: glam::Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// egui → glam
pub(crate) fn to_vec2(p: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(p.x, p.y)
}
