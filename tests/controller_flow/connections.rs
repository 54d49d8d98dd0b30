use crate::{drop_node, new_session};
use flowchart_editor::connector::Connector;
use flowchart_editor::core::ConnectionKey;
use flowchart_editor::{AppIntent, EditorKey, MenuAction, NodeKind};
use glam::Vec2;

#[test]
fn test_description_and_connection_cascade_with_deleted_node() {
    let (mut controller, mut state) = new_session();
    let a = drop_node(&mut controller, &mut state, NodeKind::Start, Vec2::new(60.0, 60.0));
    let b = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(300.0, 60.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectionDrawn {
                from_id: a.clone(),
                to_id: b.clone(),
            },
        )
        .expect("Verbindung sollte ohne Fehler durchlaufen");
    let handle = state
        .diagram
        .connections_iter()
        .next()
        .expect("Verbindung erwartet")
        .handle();
    assert!(controller.connector().has_connection_visual(handle));

    // Beschreibung über das Verbindungsmenü setzen
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
    state
        .interaction
        .description_editor_mut()
        .expect("Beschreibungs-Editor erwartet")
        .buffer = "ok".to_string();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DescriptionEditorKeyPressed {
                key: EditorKey::Enter,
                command_modifier: true,
            },
        )
        .expect("Speichern sollte ohne Fehler durchlaufen");

    let key = ConnectionKey::new(a.clone(), b.clone());
    assert_eq!(state.diagram.connection_description(&key), Some("ok"));
    assert_eq!(controller.connector().overlay(handle), Some("ok"));
    assert!(state.interaction.is_idle());

    // Quelle löschen
    controller
        .handle_intent(
            &mut state,
            AppIntent::NodeContextMenuRequested {
                node_id: a.clone(),
                screen_pos: Vec2::new(70.0, 70.0),
            },
        )
        .expect("Menü sollte öffnen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ContextMenuActionChosen {
                action: MenuAction::DeleteNode,
            },
        )
        .expect("Löschen sollte ohne Fehler durchlaufen");

    assert_eq!(state.connection_count(), 0);
    assert_eq!(state.diagram.description_count(), 0);
    assert_eq!(controller.connector().connection_visual_count(), 0);
    assert!(controller.connector().is_registered(&b));
}

#[test]
fn test_self_loop_is_rejected_without_visual() {
    let (mut controller, mut state) = new_session();
    let a = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(60.0, 60.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectionDrawn {
                from_id: a.clone(),
                to_id: a,
            },
        )
        .expect("Abgelehnte Verbindung ist kein Fehler");

    assert_eq!(state.connection_count(), 0);
    assert_eq!(controller.connector().connection_visual_count(), 0);
}

#[test]
fn test_parallel_connection_inherits_description_overlay() {
    let (mut controller, mut state) = new_session();
    let a = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(60.0, 60.0));
    let b = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(300.0, 60.0));
    let draw = AppIntent::ConnectionDrawn {
        from_id: a.clone(),
        to_id: b.clone(),
    };

    controller
        .handle_intent(&mut state, draw.clone())
        .expect("Verbindung sollte ohne Fehler durchlaufen");
    let key = ConnectionKey::new(a, b);
    assert!(state.diagram.set_connection_description(&key, "是"));

    controller
        .handle_intent(&mut state, draw)
        .expect("Parallele Verbindung sollte ohne Fehler durchlaufen");

    let handles = state.diagram.connections_with_key(&key);
    assert_eq!(handles.len(), 2);
    assert_eq!(controller.connector().overlay(handles[1]), Some("是"));
}

#[test]
fn test_empty_description_clears_overlay() {
    let (mut controller, mut state) = new_session();
    let a = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(60.0, 60.0));
    let b = drop_node(&mut controller, &mut state, NodeKind::End, Vec2::new(300.0, 60.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::ConnectionDrawn {
                from_id: a.clone(),
                to_id: b.clone(),
            },
        )
        .expect("Verbindung sollte ohne Fehler durchlaufen");
    let handle = state.diagram.connections_iter().next().expect("ok").handle();

    for text in ["weiter", ""] {
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
        state
            .interaction
            .description_editor_mut()
            .expect("Beschreibungs-Editor erwartet")
            .buffer = text.to_string();
        controller
            .handle_intent(&mut state, AppIntent::DescriptionEditorBlurred)
            .expect("Blur sollte speichern");
    }

    assert_eq!(
        state
            .diagram
            .connection_description(&ConnectionKey::new(a, b)),
        None
    );
    assert_eq!(controller.connector().overlay(handle), None);
}

#[test]
fn test_delete_connection_from_menu() {
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
                action: MenuAction::DeleteConnection,
            },
        )
        .expect("Löschen sollte ohne Fehler durchlaufen");

    assert_eq!(state.connection_count(), 0);
    assert!(!controller.connector().has_connection_visual(handle));
    assert!(state.interaction.is_idle());
}
