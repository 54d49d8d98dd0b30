//! Flowchart Editor Library.
//! Diagramm-Modell, Interaktionslogik und egui-Frontend, als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod connector;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorKey, InteractionMode, MenuAction,
    ViewState,
};
pub use connector::{Connector, ConnectorError, ConnectorEvent, HeadlessConnector};
pub use core::{
    CanvasRect, Connection, ConnectionHandle, ConnectionKey, Diagram, DiagramError, FlowNode,
    NodeId, NodeKind, PaletteItem, Viewport,
};
pub use shared::EditorOptions;
