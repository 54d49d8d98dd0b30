use crate::{drop_node, new_session};
use flowchart_editor::{AppIntent, EditorKey, MenuAction, NodeKind};
use glam::Vec2;

fn open_menu_and_rename(
    controller: &mut flowchart_editor::AppController<flowchart_editor::HeadlessConnector>,
    state: &mut flowchart_editor::AppState,
    node_id: &flowchart_editor::NodeId,
) {
    controller
        .handle_intent(
            state,
            AppIntent::NodeContextMenuRequested {
                node_id: node_id.clone(),
                screen_pos: Vec2::new(90.0, 90.0),
            },
        )
        .expect("Menü sollte öffnen");
    controller
        .handle_intent(
            state,
            AppIntent::ContextMenuActionChosen {
                action: MenuAction::Rename,
            },
        )
        .expect("Editor sollte öffnen");
}

#[test]
fn test_rename_then_escape_keeps_label() {
    let (mut controller, mut state) = new_session();
    let id = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(80.0, 80.0));
    open_menu_and_rename(&mut controller, &mut state, &id);

    let editor = state
        .interaction
        .label_editor_mut()
        .expect("Label-Editor erwartet");
    assert_eq!(editor.buffer, "任务节点");
    editor.buffer = "审批".to_string();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LabelEditorKeyPressed {
                key: EditorKey::Escape,
            },
        )
        .expect("Escape sollte ohne Fehler durchlaufen");

    assert_eq!(state.diagram.node(&id).expect("ok").label(), "任务节点");
    assert!(state.interaction.is_idle());
}

#[test]
fn test_rename_commits_on_blur_and_refreshes_visual() {
    let (mut controller, mut state) = new_session();
    let id = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(80.0, 80.0));
    open_menu_and_rename(&mut controller, &mut state, &id);

    state
        .interaction
        .label_editor_mut()
        .expect("Label-Editor erwartet")
        .buffer = "审批".to_string();
    controller
        .handle_intent(&mut state, AppIntent::LabelEditorBlurred)
        .expect("Blur sollte speichern");

    assert_eq!(state.diagram.node(&id).expect("ok").label(), "审批");
    assert_eq!(controller.connector().node_label(&id), Some("审批"));
    assert!(state.interaction.is_idle());
}

#[test]
fn test_rename_with_empty_input_keeps_label() {
    let (mut controller, mut state) = new_session();
    let id = drop_node(&mut controller, &mut state, NodeKind::End, Vec2::new(80.0, 80.0));
    open_menu_and_rename(&mut controller, &mut state, &id);

    state
        .interaction
        .label_editor_mut()
        .expect("Label-Editor erwartet")
        .buffer
        .clear();
    controller
        .handle_intent(
            &mut state,
            AppIntent::LabelEditorKeyPressed {
                key: EditorKey::Enter,
            },
        )
        .expect("Enter sollte ohne Fehler durchlaufen");

    assert_eq!(state.diagram.node(&id).expect("ok").label(), "结束");
    assert!(state.interaction.is_idle());
}

#[test]
fn test_menu_survives_outside_press_in_opening_cycle() {
    let (mut controller, mut state) = new_session();
    let id = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(80.0, 80.0));

    controller
        .handle_intents(
            &mut state,
            [
                AppIntent::NodeContextMenuRequested {
                    node_id: id.clone(),
                    screen_pos: Vec2::new(90.0, 90.0),
                },
                AppIntent::PointerPressedOutsideMenu,
            ],
        )
        .expect("Batch sollte ohne Fehler durchlaufen");
    assert!(state.interaction.context_menu().is_some());

    controller
        .handle_intent(&mut state, AppIntent::PointerPressedOutsideMenu)
        .expect("Press sollte ohne Fehler durchlaufen");
    assert!(state.interaction.is_idle());
}

#[test]
fn test_context_menu_ignored_while_editing() {
    let (mut controller, mut state) = new_session();
    let a = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(80.0, 80.0));
    let b = drop_node(&mut controller, &mut state, NodeKind::End, Vec2::new(300.0, 80.0));
    open_menu_and_rename(&mut controller, &mut state, &a);

    controller
        .handle_intent(
            &mut state,
            AppIntent::NodeContextMenuRequested {
                node_id: b,
                screen_pos: Vec2::new(310.0, 90.0),
            },
        )
        .expect("Menü-Anfrage sollte kein Fehler sein");

    assert_eq!(
        state.interaction.label_editor().map(|e| e.node_id.clone()),
        Some(a)
    );
}

#[test]
fn test_plain_enter_in_description_editor_does_not_commit() {
    let (mut controller, mut state) = new_session();
    let a = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(60.0, 60.0));
    let b = drop_node(&mut controller, &mut state, NodeKind::End, Vec2::new(300.0, 60.0));
    controller
        .handle_intent(&mut state, AppIntent::ConnectionDrawn { from_id: a, to_id: b })
        .expect("Verbindung sollte ohne Fehler durchlaufen");
    let handle = state.diagram.connections_iter().next().expect("ok").handle();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectionContextMenuRequested {
                handle,
                screen_pos: Vec2::new(200.0, 70.0),
            },
        )
        .expect("Menü sollte öffnen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ContextMenuActionChosen {
                action: MenuAction::AddDescription,
            },
        )
        .expect("Editor sollte öffnen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::DescriptionEditorKeyPressed {
                key: EditorKey::Enter,
                command_modifier: false,
            },
        )
        .expect("Enter sollte kein Fehler sein");
    assert!(state.interaction.description_editor().is_some());

    controller
        .handle_intent(
            &mut state,
            AppIntent::DescriptionEditorKeyPressed {
                key: EditorKey::Escape,
                command_modifier: false,
            },
        )
        .expect("Escape sollte kein Fehler sein");
    assert!(state.interaction.is_idle());
    assert_eq!(state.diagram.description_count(), 0);
}

#[test]
fn test_sidebar_width_is_clamped_and_restored() {
    let (mut controller, mut state) = new_session();

    controller
        .handle_intents(
            &mut state,
            [
                AppIntent::SidebarResizePressed,
                AppIntent::SidebarPointerMoved { x: 600.0 },
            ],
        )
        .expect("Resize sollte ohne Fehler durchlaufen");
    approx::assert_relative_eq!(state.interaction.sidebar.width(), 500.0);

    controller
        .handle_intents(
            &mut state,
            [
                AppIntent::SidebarPointerMoved { x: -50.0 },
                AppIntent::SidebarPointerReleased,
            ],
        )
        .expect("Resize sollte ohne Fehler durchlaufen");
    approx::assert_relative_eq!(state.interaction.sidebar.width(), 0.0);
    assert!(state.interaction.sidebar.is_collapsed());
    assert!(!state.interaction.sidebar.is_dragging());

    // Klick auf den Pfeil ohne Bewegung stellt die Standardbreite her
    controller
        .handle_intents(
            &mut state,
            [
                AppIntent::SidebarRestorePressed,
                AppIntent::SidebarPointerReleased,
            ],
        )
        .expect("Restore sollte ohne Fehler durchlaufen");
    approx::assert_relative_eq!(state.interaction.sidebar.width(), 220.0);
}

#[test]
fn test_pointer_moves_without_gesture_are_ignored() {
    let (mut controller, mut state) = new_session();

    controller
        .handle_intent(&mut state, AppIntent::SidebarPointerMoved { x: 400.0 })
        .expect("Move sollte kein Fehler sein");

    approx::assert_relative_eq!(state.interaction.sidebar.width(), 220.0);
    assert!(state.command_log.is_empty());
}
