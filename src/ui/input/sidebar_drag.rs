//! Fensterweites Tracking der Sidebar-Gesten.

use crate::app::{AppIntent, SidebarState};

/// Liefert Move/Release-Intents, solange eine Sidebar-Geste aktiv ist.
///
/// Die Geste wird über das ganze Fenster verfolgt, nicht nur über dem Griff.
/// Ist die Primärtaste nicht mehr gedrückt, endet die Geste auch ohne
/// beobachtetes Release-Event; bloßes Hovern verändert die Breite nie.
pub fn collect_sidebar_drag_intents(ctx: &egui::Context, sidebar: &SidebarState) -> Vec<AppIntent> {
    if !sidebar.is_dragging() {
        return Vec::new();
    }

    let (latest_pos, delta, down, released) = ctx.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.delta(),
            i.pointer.primary_down(),
            i.pointer.primary_released(),
        )
    });

    let mut events = Vec::new();
    let moved = delta != egui::Vec2::ZERO && (down || released);
    if let Some(pos) = latest_pos.filter(|_| moved) {
        events.push(AppIntent::SidebarPointerMoved { x: pos.x });
    }
    if released || !down {
        events.push(AppIntent::SidebarPointerReleased);
    }
    events
}
