//! Kontextmenü für Knoten und Verbindungen.

use super::theme::DANGER;
use super::to_pos2;
use crate::app::{AppIntent, AppState, MenuAction, MenuTarget};
use egui::{Button, RichText};

/// Menüeinträge je Ziel: (Aktion, Text, destruktiv)
fn menu_items(target: &MenuTarget) -> [(MenuAction, &'static str, bool); 2] {
    match target {
        MenuTarget::Node(_) => [
            (MenuAction::Rename, "修改名称", false),
            (MenuAction::DeleteNode, "删除节点", true),
        ],
        MenuTarget::Connection(_) => [
            (MenuAction::AddDescription, "添加描述", false),
            (MenuAction::DeleteConnection, "删除连线", true),
        ],
    }
}

/// Zeichnet das offene Kontextmenü und meldet Auswahl bzw. Klick daneben.
pub fn render_context_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(menu) = state.interaction.context_menu() else {
        return events;
    };

    let area = egui::Area::new(egui::Id::new("flow_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(to_pos2(menu.screen_pos))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(120.0);
                for (action, text, danger) in menu_items(&menu.target) {
                    let label = if danger {
                        RichText::new(text).color(DANGER)
                    } else {
                        RichText::new(text)
                    };
                    if ui.add(Button::new(label).frame(false)).clicked() {
                        events.push(AppIntent::ContextMenuActionChosen { action });
                    }
                }
            });
        });

    let pressed_outside = ctx.input(|i| {
        i.pointer.primary_pressed()
            && i
                .pointer
                .interact_pos()
                .is_some_and(|pos| !area.response.rect.contains(pos))
    });
    if pressed_outside {
        events.push(AppIntent::PointerPressedOutsideMenu);
    }

    events
}
