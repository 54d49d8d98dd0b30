use crate::{container, drop_node, new_session};
use flowchart_editor::connector::Connector;
use flowchart_editor::core::palette_item;
use flowchart_editor::{AppIntent, ConnectorEvent, MenuAction, NodeId, NodeKind};
use glam::Vec2;

#[test]
fn test_drop_places_node_at_container_relative_position() {
    let (mut controller, mut state) = new_session();

    let id = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(150.0, 80.0));

    let node = state.diagram.node(&id).expect("Knoten erwartet");
    approx::assert_relative_eq!(node.position().x, 130.0);
    approx::assert_relative_eq!(node.position().y, 60.0);
    assert_eq!(node.kind(), NodeKind::Task);
    assert_eq!(node.label(), "任务节点");
    assert_eq!(node.color(), "#3b82f6");
    assert!(controller.connector().is_registered(&id));
}

#[test]
fn test_drop_ignores_zoom() {
    let (mut controller, mut state) = new_session();
    state.view.viewport.zoom_by(2.0);

    let id = drop_node(&mut controller, &mut state, NodeKind::Start, Vec2::new(150.0, 80.0));

    let node = state.diagram.node(&id).expect("Knoten erwartet");
    approx::assert_relative_eq!(node.position().x, 130.0);
    approx::assert_relative_eq!(node.position().y, 60.0);
}

#[test]
fn test_drop_outside_container_is_ignored() {
    let (mut controller, mut state) = new_session();
    let item = palette_item(NodeKind::End).expect("Vorlage erwartet");

    controller
        .handle_intent(
            &mut state,
            AppIntent::PaletteItemDropped {
                item,
                screen_pos: Vec2::new(5.0, 5.0),
                container: container(),
            },
        )
        .expect("Drop außerhalb sollte kein Fehler sein");

    assert!(state.diagram.is_empty());
}

#[test]
fn test_missing_visual_is_retried_on_next_refresh() {
    let (mut controller, mut state) = new_session();
    let expected = NodeId::new("node-1700-0");
    controller.connector_mut().hide_element(&expected);

    let id = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(100.0, 100.0));
    assert_eq!(id, expected);
    assert!(!controller.connector().is_registered(&id));

    controller.connector_mut().show_element(&id);
    controller
        .handle_intent(&mut state, AppIntent::CanvasRefreshRequested)
        .expect("Refresh sollte ohne Fehler durchlaufen");

    assert!(controller.connector().is_registered(&id));
}

#[test]
fn test_dragged_node_updates_model_position() {
    let (mut controller, mut state) = new_session();
    let id = drop_node(&mut controller, &mut state, NodeKind::Task, Vec2::new(100.0, 100.0));

    controller
        .connector_mut()
        .push_event(ConnectorEvent::NodeDragged {
            node_id: id.clone(),
            position: Vec2::new(240.0, 180.0),
        });
    let intents = controller.poll_connector();
    controller
        .handle_intents(&mut state, intents)
        .expect("Drag sollte ohne Fehler durchlaufen");

    let node = state.diagram.node(&id).expect("Knoten erwartet");
    approx::assert_relative_eq!(node.position().x, 240.0);
    approx::assert_relative_eq!(node.position().y, 180.0);
    assert_eq!(
        controller.connector().node_position(&id),
        Some(Vec2::new(240.0, 180.0))
    );
}

#[test]
fn test_delete_node_from_menu_unregisters_visual() {
    let (mut controller, mut state) = new_session();
    let id = drop_node(&mut controller, &mut state, NodeKind::Condition, Vec2::new(80.0, 80.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::NodeContextMenuRequested {
                node_id: id.clone(),
                screen_pos: Vec2::new(90.0, 90.0),
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

    assert!(state.diagram.is_empty());
    assert!(!controller.connector().is_registered(&id));
    assert!(state.interaction.is_idle());
}
