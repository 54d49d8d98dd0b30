use super::theme::node_color;
use crate::app::{AppIntent, AppState, SidebarState};
use egui::{Color32, CornerRadius, Rect, RichText, Sense, Stroke, Vec2};

const RESIZER_WIDTH: f32 = 6.0;
const RESTORE_ARROW_SIZE: f32 = 24.0;

/// Rendert die Palette-Sidebar mit den ziehbaren Vorlagen.
///
/// Bei Breite 0 wird nichts gezeichnet; der Wiederherstellen-Pfeil kommt
/// dann aus [`render_sidebar_handles`].
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) {
    let width = state.interaction.sidebar.width();
    if width <= 0.0 {
        return;
    }

    egui::SidePanel::left("palette_sidebar")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new("预置控件").strong().size(15.0));
            ui.add_space(8.0);

            for item in &state.palette {
                let id = egui::Id::new(("palette_item", item.kind.as_str()));
                ui.dnd_drag_source(id, item.clone(), |ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        Vec2::new(ui.available_width(), 36.0),
                        Sense::hover(),
                    );
                    let painter = ui.painter();
                    painter.rect_filled(rect, CornerRadius::same(4), Color32::WHITE);
                    painter.rect_filled(
                        Rect::from_min_size(rect.min, Vec2::new(4.0, rect.height())),
                        CornerRadius::same(2),
                        node_color(&item.color),
                    );
                    painter.text(
                        rect.left_center() + Vec2::new(14.0, 0.0),
                        egui::Align2::LEFT_CENTER,
                        &item.label,
                        egui::FontId::proportional(14.0),
                        Color32::from_rgb(0x1f, 0x29, 0x37),
                    );
                });
                ui.add_space(6.0);
            }
        });
}

/// Resize-Griff am linken Workspace-Rand bzw. Wiederherstellen-Pfeil.
///
/// Liefert die Press-Intents; Move und Release verfolgt
/// `input::collect_sidebar_drag_intents` fensterweit. Fallen Press und
/// Release in denselben Frame (Tap), wird der Release gleich mitgeliefert,
/// weil die fensterweite Verfolgung erst ab dem nächsten Frame greift.
pub(super) fn render_sidebar_handles(
    ui: &mut egui::Ui,
    workspace: Rect,
    sidebar: &SidebarState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let (primary_pressed, primary_down) =
        ui.input(|i| (i.pointer.primary_pressed(), i.pointer.primary_down()));

    if sidebar.is_collapsed() {
        let rect = Rect::from_center_size(
            egui::pos2(
                workspace.left() + RESTORE_ARROW_SIZE * 0.5,
                workspace.center().y,
            ),
            Vec2::splat(RESTORE_ARROW_SIZE),
        );
        let response = ui
            .interact(rect, ui.id().with("sidebar_restore"), Sense::click_and_drag())
            .on_hover_text("点击或拖拽恢复侧边栏");
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(4), Color32::from_gray(230));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "▶",
            egui::FontId::proportional(12.0),
            Color32::from_gray(80),
        );
        if primary_pressed && response.contains_pointer() {
            events.push(AppIntent::SidebarRestorePressed);
        }
    } else {
        let rect = Rect::from_min_size(
            workspace.left_top(),
            Vec2::new(RESIZER_WIDTH, workspace.height()),
        );
        let response = ui.interact(rect, ui.id().with("sidebar_resizer"), Sense::drag());
        if response.hovered() || sidebar.resizing {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
            ui.painter().line_segment(
                [rect.center_top(), rect.center_bottom()],
                Stroke::new(2.0, Color32::from_rgb(0x3b, 0x82, 0xf6)),
            );
        }
        if primary_pressed && response.contains_pointer() {
            events.push(AppIntent::SidebarResizePressed);
        }
    }

    if !events.is_empty() && !primary_down {
        events.push(AppIntent::SidebarPointerReleased);
    }
    events
}
