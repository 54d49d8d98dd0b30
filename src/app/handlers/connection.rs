//! Handler für Verbindungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::connector::Connector;
use crate::core::{ConnectionHandle, NodeId};

/// Registriert eine gezogene Verbindung.
pub fn register(
    state: &mut AppState,
    connector: &mut dyn Connector,
    from_id: &NodeId,
    to_id: &NodeId,
) {
    use_cases::connections::register_connection(state, connector, from_id, to_id);
}

/// Löscht eine einzelne Verbindung.
pub fn delete(state: &mut AppState, connector: &mut dyn Connector, handle: ConnectionHandle) {
    use_cases::connections::delete_connection(state, connector, handle);
}
