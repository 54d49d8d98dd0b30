//! Inline-Label-Editor und Beschreibungs-Dialog.

use crate::app::state::LabelEditor;
use crate::app::{AppIntent, AppState, EditorKey};
use egui::text::{CCursor, CCursorRange};
use egui::{Key, Modifiers, Rect, TextEdit};

/// Fokussiert ein Textfeld und markiert den gesamten Inhalt.
fn focus_and_select_all(ui: &egui::Ui, id: egui::Id, text: &str) {
    ui.memory_mut(|m| m.request_focus(id));
    let mut state = egui::text_edit::TextEditState::load(ui.ctx(), id).unwrap_or_default();
    // CCursor zählt Zeichen, nicht Bytes
    let len = text.chars().count();
    state
        .cursor
        .set_char_range(Some(CCursorRange::two(CCursor::new(0), CCursor::new(len))));
    state.store(ui.ctx(), id);
}

/// Zeichnet das Eingabefeld über dem Label eines Knotens.
///
/// Enter und Escape werden vor dem TextEdit konsumiert, damit das Feld
/// sie nicht selbst als Fokusverlust interpretiert.
pub(super) fn render_label_editor(
    ui: &mut egui::Ui,
    rect: Rect,
    editor: &mut LabelEditor,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let id = ui.id().with(("label_editor", editor.node_id.as_str()));

    if editor.focus_pending {
        focus_and_select_all(ui, id, &editor.buffer);
        editor.focus_pending = false;
    }

    if ui.memory(|m| m.has_focus(id)) {
        let (enter, escape) = ui.input_mut(|i| {
            (
                i.consume_key(Modifiers::NONE, Key::Enter),
                i.consume_key(Modifiers::NONE, Key::Escape),
            )
        });
        if enter {
            events.push(AppIntent::LabelEditorKeyPressed {
                key: EditorKey::Enter,
            });
        } else if escape {
            events.push(AppIntent::LabelEditorKeyPressed {
                key: EditorKey::Escape,
            });
        }
    }

    let response = ui.put(
        rect,
        TextEdit::singleline(&mut editor.buffer)
            .id(id)
            .horizontal_align(egui::Align::Center),
    );

    if events.is_empty() && response.lost_focus() {
        events.push(AppIntent::LabelEditorBlurred);
    }
    events
}

/// Zeigt den Dialog zur Verbindungsbeschreibung, falls geöffnet.
///
/// Ctrl/Cmd+Enter speichert, Escape verwirft, Fokusverlust speichert.
pub fn render_description_editor(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(editor) = state.interaction.description_editor_mut() else {
        return events;
    };

    egui::Window::new("添加连线描述")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let id = ui.id().with(("description_editor", editor.handle.get()));

            if editor.focus_pending {
                ui.memory_mut(|m| m.request_focus(id));
                editor.focus_pending = false;
            }

            if ui.memory(|m| m.has_focus(id)) {
                let (commit, escape) = ui.input_mut(|i| {
                    (
                        i.consume_key(Modifiers::COMMAND, Key::Enter),
                        i.consume_key(Modifiers::NONE, Key::Escape),
                    )
                });
                if commit {
                    events.push(AppIntent::DescriptionEditorKeyPressed {
                        key: EditorKey::Enter,
                        command_modifier: true,
                    });
                } else if escape {
                    events.push(AppIntent::DescriptionEditorKeyPressed {
                        key: EditorKey::Escape,
                        command_modifier: false,
                    });
                }
            }

            let response = ui.add(
                TextEdit::multiline(&mut editor.buffer)
                    .id(id)
                    .hint_text("请输入连线描述...")
                    .desired_rows(4)
                    .desired_width(280.0),
            );
            ui.label(
                egui::RichText::new("按 Ctrl+Enter 保存，Esc 取消")
                    .small()
                    .weak(),
            );

            if events.is_empty() && response.lost_focus() {
                events.push(AppIntent::DescriptionEditorBlurred);
            }
        });

    events
}
