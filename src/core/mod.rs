//! Core-Domänentypen: Knoten, Verbindungen, Diagramm und Viewport.

pub mod connection;
pub mod diagram;
pub mod error;
pub mod ids;
/// Knotentypen und Palettenvorlagen
pub mod node;
pub mod palette;
pub mod viewport;

pub use connection::{Connection, ConnectionKey};
pub use diagram::Diagram;
pub use error::{DiagramError, InvalidConnectionReason};
pub use ids::{ConnectionHandle, NodeId, NodeIdGenerator};
pub use node::{FlowNode, NodeKind, PaletteItem};
pub use palette::{default_palette, palette_item};
pub use viewport::{wheel_zoom_factor, CanvasRect, Viewport};
