//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Reihenfolge innerhalb eines Use-Cases: erst das Modell, dann die Visuals.
//! Ausnahme ist das Löschen eines Knotens, dessen Visuals vorher abgebaut werden.

pub mod connections;
pub mod interaction;
pub mod node_editing;
pub mod placement;
pub mod registration;
pub mod sidebar;
pub mod viewport;
