use crate::app::CommandLog;
use crate::core::{default_palette, Diagram, PaletteItem};
use crate::shared::EditorOptions;

use super::{InteractionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Knoten, Verbindungen und Beschreibungen
    pub diagram: Diagram,
    /// Palette-Vorlagen in Anzeigereihenfolge
    pub palette: Vec<PaletteItem>,
    /// View-State
    pub view: ViewState,
    /// Kontextmenü, Editoren und Sidebar
    pub interaction: InteractionState,
    /// Laufzeit-Optionen (Zoom-Schritte, Größen, Farben)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self::with_diagram(Diagram::new(), options)
    }

    /// Erstellt einen App-State um ein vorgegebenes Diagramm
    /// (z.B. mit deterministischem ID-Generator in Tests).
    pub fn with_diagram(diagram: Diagram, options: EditorOptions) -> Self {
        Self {
            diagram,
            palette: default_palette(),
            view: ViewState::new(),
            interaction: InteractionState::new(options.sidebar_default_width),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.diagram.node_count()
    }

    /// Gibt die Anzahl der Connections zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.diagram.connection_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
