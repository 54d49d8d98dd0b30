//! Flussdiagramm-Editor.
//!
//! Palette links, Canvas rechts: Knoten per Drag & Drop platzieren, über
//! Anker verbinden, per Kontextmenü umbenennen, beschreiben oder löschen.

use eframe::egui;
use flowchart_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Flowchart Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("流程图工作台"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Flowchart Editor",
            options,
            Box::new(|cc| {
                ui::configure_fonts(&cc.egui_ctx);
                Ok(Box::new(EditorApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController<ui::EguiConnector>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(ui::EguiConnector::new()),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::CanvasRefreshRequested));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl Drop for EditorApp {
    fn drop(&mut self) {
        self.controller.unmount(&mut self.state);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(AppIntent::ExitRequested);
        }

        ui::render_sidebar(ctx, &self.state);
        events.extend(ui::render_workspace(
            ctx,
            &mut self.state,
            self.controller.connector_mut(),
        ));
        events.extend(ui::render_context_menu(ctx, &self.state));
        events.extend(ui::render_description_editor(ctx, &mut self.state));
        events.extend(ui::input::collect_sidebar_drag_intents(
            ctx,
            &self.state.interaction.sidebar,
        ));

        // Neue Knoten erst anmelden, wenn ihre Box gezeichnet wurde
        events.push(AppIntent::CanvasRefreshRequested);
        events.extend(self.controller.poll_connector());
        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        if let Err(e) = self.controller.handle_intents(&mut self.state, events) {
            log::error!("Event handling failed: {:#}", e);
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool) {
        let connector_dirty = self.controller.connector_mut().take_repaint_request();
        if has_meaningful_events
            || connector_dirty
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.interaction.sidebar.is_dragging()
            || self.has_unregistered_nodes()
        {
            ctx.request_repaint();
        }
    }

    /// Knoten, deren Anmeldung noch aussteht, brauchen einen weiteren Frame.
    fn has_unregistered_nodes(&self) -> bool {
        use flowchart_editor::connector::Connector;
        self.state
            .diagram
            .nodes_iter()
            .any(|node| !self.controller.connector().is_registered(node.id()))
    }
}
