use crate::app::state::MenuTarget;
use crate::app::{AppCommand, AppIntent, AppState, EditorKey, MenuAction};
use crate::core::{palette_item, CanvasRect, ConnectionHandle, ConnectionKey, NodeId, NodeKind};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with_node_menu() -> AppState {
    let mut state = AppState::new();
    state.interaction.begin_dispatch_cycle();
    state
        .interaction
        .open_context_menu(MenuTarget::Node(NodeId::new("node-1-0")), Vec2::ZERO);
    state
}

#[test]
fn palette_drop_maps_to_place_and_sync_in_order() {
    let state = AppState::new();
    let item = palette_item(NodeKind::Task).expect("Vorlage erwartet");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PaletteItemDropped {
            item,
            screen_pos: Vec2::new(150.0, 80.0),
            container: CanvasRect::from_origin_size(Vec2::new(20.0, 20.0), Vec2::splat(400.0)),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::PlaceNode { .. }));
    assert!(matches!(commands[1], AppCommand::SyncNodeRegistration));
}

#[test]
fn wheel_without_modifier_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::WheelScrolled {
            delta_y: 120.0,
            zoom_modifier: false,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn wheel_down_with_modifier_zooms_out() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::WheelScrolled {
            delta_y: 120.0,
            zoom_modifier: true,
        },
    );

    assert_eq!(commands, vec![AppCommand::ZoomCanvas { factor: 0.9 }]);
}

#[test]
fn delete_node_action_deletes_then_closes_menu() {
    let state = state_with_node_menu();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ContextMenuActionChosen {
            action: MenuAction::DeleteNode,
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::DeleteNode {
                node_id: NodeId::new("node-1-0")
            },
            AppCommand::CloseContextMenu,
        ]
    );
}

#[test]
fn connection_action_on_node_menu_only_closes() {
    let state = state_with_node_menu();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ContextMenuActionChosen {
            action: MenuAction::DeleteConnection,
        },
    );

    assert_eq!(commands, vec![AppCommand::CloseContextMenu]);
}

#[test]
fn menu_action_without_menu_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ContextMenuActionChosen {
            action: MenuAction::Rename,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn outside_press_without_menu_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressedOutsideMenu);

    assert!(commands.is_empty());
}

#[test]
fn label_blur_with_empty_buffer_cancels() {
    let mut state = AppState::new();
    state
        .interaction
        .begin_label_edit(NodeId::new("node-1-0"), "开始");
    if let Some(editor) = state.interaction.label_editor_mut() {
        editor.buffer.clear();
    }

    let commands = map_intent_to_commands(&state, AppIntent::LabelEditorBlurred);

    assert_eq!(commands, vec![AppCommand::CancelNodeLabelEdit]);
}

#[test]
fn label_enter_commits_buffer() {
    let mut state = AppState::new();
    state
        .interaction
        .begin_label_edit(NodeId::new("node-1-0"), "审核");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::LabelEditorKeyPressed {
            key: EditorKey::Enter,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::CommitNodeLabelEdit {
            label: "审核".to_string()
        }]
    );
}

#[test]
fn description_plain_enter_is_ignored() {
    let mut state = AppState::new();
    let key = ConnectionKey::new(NodeId::new("a"), NodeId::new("b"));
    state
        .interaction
        .begin_description_edit(ConnectionHandle::new(1), key.clone(), None);

    let plain = map_intent_to_commands(
        &state,
        AppIntent::DescriptionEditorKeyPressed {
            key: EditorKey::Enter,
            command_modifier: false,
        },
    );
    assert!(plain.is_empty());

    let with_modifier = map_intent_to_commands(
        &state,
        AppIntent::DescriptionEditorKeyPressed {
            key: EditorKey::Enter,
            command_modifier: true,
        },
    );
    assert_eq!(
        with_modifier,
        vec![AppCommand::CommitConnectionDescriptionEdit {
            key,
            text: String::new()
        }]
    );
}

#[test]
fn sidebar_move_without_drag_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SidebarPointerMoved { x: 300.0 });

    assert!(commands.is_empty());
}
