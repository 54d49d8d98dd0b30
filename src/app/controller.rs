//! Application Controller für zentrale Event-Verarbeitung.

use super::use_cases::connections::remove_connection_visuals_of;
use super::{AppCommand, AppIntent, AppState};
use crate::connector::Connector;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Besitzt den Connector für die Lebensdauer des Canvas; freigegeben wird
/// er über [`AppController::unmount`].
pub struct AppController<C: Connector> {
    connector: C,
}

impl<C: Connector> AppController<C> {
    /// Erstellt einen neuen Controller um einen frischen Connector.
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Zugriff auf den Connector (z.B. zum Zeichnen)
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Mutabler Zugriff auf den Connector
    pub fn connector_mut(&mut self) -> &mut C {
        &mut self.connector
    }

    /// Verarbeitet einen einzelnen Intent als eigenen Dispatch-Zyklus.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        self.handle_intents(state, [intent])
    }

    /// Verarbeitet alle Intents eines Frames als einen Dispatch-Zyklus.
    pub fn handle_intents(
        &mut self,
        state: &mut AppState,
        intents: impl IntoIterator<Item = AppIntent>,
    ) -> anyhow::Result<()> {
        state.interaction.begin_dispatch_cycle();
        for intent in intents {
            let commands = self.map_intent_to_commands(state, intent);
            for command in commands {
                self.handle_command(state, command)?;
            }
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Holt die Gesten, die der Connector seit dem letzten Aufruf gesammelt hat.
    pub fn poll_connector(&mut self) -> Vec<AppIntent> {
        self.connector
            .drain_events()
            .into_iter()
            .map(AppIntent::from)
            .collect()
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state
            .command_log
            .record(state.interaction.dispatch_cycle(), &command);
        use super::handlers;
        let connector = &mut self.connector;

        match command {
            // === Knoten ===
            AppCommand::PlaceNode {
                item,
                screen_pos,
                container,
            } => handlers::editing::place_node(state, &item, screen_pos, container)?,
            AppCommand::MoveNode { node_id, position } => {
                handlers::editing::move_node(state, connector, &node_id, position)
            }
            AppCommand::DeleteNode { node_id } => {
                handlers::editing::delete_node(state, connector, &node_id)
            }

            // === Verbindungen ===
            AppCommand::RegisterConnection { from_id, to_id } => {
                handlers::connection::register(state, connector, &from_id, &to_id)
            }
            AppCommand::DeleteConnection { handle } => {
                handlers::connection::delete(state, connector, handle)
            }

            // === Kontextmenü & Editoren ===
            AppCommand::OpenNodeContextMenu {
                node_id,
                screen_pos,
            } => handlers::interaction::open_node_menu(state, node_id, screen_pos),
            AppCommand::OpenConnectionContextMenu { handle, screen_pos } => {
                handlers::interaction::open_connection_menu(state, handle, screen_pos)
            }
            AppCommand::CloseContextMenu => handlers::interaction::close_menu(state),
            AppCommand::DismissContextMenuOutside => {
                handlers::interaction::dismiss_menu_outside(state)
            }
            AppCommand::BeginNodeLabelEdit { node_id } => {
                handlers::interaction::begin_label_edit(state, node_id)
            }
            AppCommand::CommitNodeLabelEdit { label } => {
                handlers::interaction::commit_label_edit(state, connector, &label)
            }
            AppCommand::CancelNodeLabelEdit => handlers::interaction::cancel_label_edit(state),
            AppCommand::BeginConnectionDescriptionEdit { handle } => {
                handlers::interaction::begin_description_edit(state, handle)
            }
            AppCommand::CommitConnectionDescriptionEdit { key, text } => {
                handlers::interaction::commit_description_edit(state, connector, &key, &text)
            }
            AppCommand::CancelConnectionDescriptionEdit => {
                handlers::interaction::cancel_description_edit(state)
            }

            // === Sidebar ===
            AppCommand::BeginSidebarResize => handlers::sidebar::begin_resize(state),
            AppCommand::BeginSidebarRestore => handlers::sidebar::begin_restore(state),
            AppCommand::MoveSidebarPointer { x } => handlers::sidebar::pointer_moved(state, x),
            AppCommand::ReleaseSidebarPointer => handlers::sidebar::pointer_released(state),

            // === View ===
            AppCommand::ZoomCanvas { factor } => handlers::view::zoom(state, connector, factor),
            AppCommand::SyncNodeRegistration => handlers::view::sync_registration(state, connector),
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }

    /// Baut alle Visuals ab und gibt den Connector frei.
    ///
    /// Das Modell bleibt unverändert; offene Menüs und Editoren werden geschlossen.
    pub fn unmount(&mut self, state: &mut AppState) {
        for node in state.diagram.nodes_iter() {
            remove_connection_visuals_of(&mut self.connector, node.id());
            self.connector.unregister_node(node.id());
        }
        self.connector.destroy();
        state.interaction.reset_to_idle();
        log::info!(
            "Canvas freigegeben ({} Node(s), {} Verbindung(en))",
            state.node_count(),
            state.connection_count()
        );
    }
}
