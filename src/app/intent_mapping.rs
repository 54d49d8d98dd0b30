//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::MenuTarget;
use super::{AppCommand, AppIntent, AppState, EditorKey, MenuAction};
use crate::core::wheel_zoom_factor;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PaletteItemDropped {
            item,
            screen_pos,
            container,
        } => vec![
            AppCommand::PlaceNode {
                item,
                screen_pos,
                container,
            },
            AppCommand::SyncNodeRegistration,
        ],
        AppIntent::WheelScrolled {
            delta_y,
            zoom_modifier,
        } => wheel_zoom_factor(
            delta_y,
            zoom_modifier,
            state.options.wheel_zoom_in_step,
            state.options.wheel_zoom_out_step,
        )
        .map(|factor| AppCommand::ZoomCanvas { factor })
        .into_iter()
        .collect(),
        AppIntent::ConnectionDrawn { from_id, to_id } => {
            vec![AppCommand::RegisterConnection { from_id, to_id }]
        }
        AppIntent::NodeDragged { node_id, position } => {
            vec![AppCommand::MoveNode { node_id, position }]
        }
        AppIntent::NodeContextMenuRequested {
            node_id,
            screen_pos,
        } => vec![AppCommand::OpenNodeContextMenu {
            node_id,
            screen_pos,
        }],
        AppIntent::ConnectionContextMenuRequested { handle, screen_pos } => {
            vec![AppCommand::OpenConnectionContextMenu { handle, screen_pos }]
        }
        AppIntent::PointerPressedOutsideMenu => {
            if state.interaction.context_menu().is_some() {
                vec![AppCommand::DismissContextMenuOutside]
            } else {
                vec![]
            }
        }
        AppIntent::ContextMenuActionChosen { action } => map_menu_action(state, action),
        AppIntent::LabelEditorKeyPressed {
            key: EditorKey::Escape,
        } => {
            if state.interaction.label_editor().is_some() {
                vec![AppCommand::CancelNodeLabelEdit]
            } else {
                vec![]
            }
        }
        AppIntent::LabelEditorKeyPressed {
            key: EditorKey::Enter,
        }
        | AppIntent::LabelEditorBlurred => finish_label_edit(state),
        AppIntent::DescriptionEditorKeyPressed {
            key: EditorKey::Escape,
            ..
        } => {
            if state.interaction.description_editor().is_some() {
                vec![AppCommand::CancelConnectionDescriptionEdit]
            } else {
                vec![]
            }
        }
        AppIntent::DescriptionEditorKeyPressed {
            key: EditorKey::Enter,
            command_modifier,
        } => {
            // Einfaches Enter erzeugt nur einen Zeilenumbruch
            if command_modifier {
                commit_description_edit(state)
            } else {
                vec![]
            }
        }
        AppIntent::DescriptionEditorBlurred => commit_description_edit(state),
        AppIntent::SidebarResizePressed => vec![AppCommand::BeginSidebarResize],
        AppIntent::SidebarRestorePressed => vec![AppCommand::BeginSidebarRestore],
        AppIntent::SidebarPointerMoved { x } => {
            if state.interaction.sidebar.is_dragging() {
                vec![AppCommand::MoveSidebarPointer { x }]
            } else {
                vec![]
            }
        }
        AppIntent::SidebarPointerReleased => {
            if state.interaction.sidebar.is_dragging() {
                vec![AppCommand::ReleaseSidebarPointer]
            } else {
                vec![]
            }
        }
        AppIntent::CanvasRefreshRequested => vec![AppCommand::SyncNodeRegistration],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Löst einen Menüeintrag gegen das Ziel des offenen Menüs auf.
fn map_menu_action(state: &AppState, action: MenuAction) -> Vec<AppCommand> {
    let Some(menu) = state.interaction.context_menu() else {
        return vec![];
    };

    match (&menu.target, action) {
        (MenuTarget::Node(node_id), MenuAction::Rename) => vec![
            AppCommand::CloseContextMenu,
            AppCommand::BeginNodeLabelEdit {
                node_id: node_id.clone(),
            },
        ],
        (MenuTarget::Node(node_id), MenuAction::DeleteNode) => vec![
            AppCommand::DeleteNode {
                node_id: node_id.clone(),
            },
            AppCommand::CloseContextMenu,
        ],
        (MenuTarget::Connection(handle), MenuAction::AddDescription) => vec![
            AppCommand::CloseContextMenu,
            AppCommand::BeginConnectionDescriptionEdit { handle: *handle },
        ],
        (MenuTarget::Connection(handle), MenuAction::DeleteConnection) => vec![
            AppCommand::DeleteConnection { handle: *handle },
            AppCommand::CloseContextMenu,
        ],
        _ => {
            log::debug!("Menüeintrag {:?} passt nicht zum Menüziel", action);
            vec![AppCommand::CloseContextMenu]
        }
    }
}

/// Enter oder Blur im Label-Editor: leerer Puffer verwirft.
fn finish_label_edit(state: &AppState) -> Vec<AppCommand> {
    match state.interaction.label_editor() {
        Some(editor) if !editor.buffer.is_empty() => vec![AppCommand::CommitNodeLabelEdit {
            label: editor.buffer.clone(),
        }],
        Some(_) => vec![AppCommand::CancelNodeLabelEdit],
        None => vec![],
    }
}

fn commit_description_edit(state: &AppState) -> Vec<AppCommand> {
    match state.interaction.description_editor() {
        Some(editor) => vec![AppCommand::CommitConnectionDescriptionEdit {
            key: editor.key.clone(),
            text: editor.buffer.clone(),
        }],
        None => vec![],
    }
}

#[cfg(test)]
mod tests;
