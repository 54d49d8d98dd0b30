//! Globale Eingaben → AppIntent.
//!
//! - `zoom` — Mausrad mit Ctrl/Cmd über dem Canvas
//! - `sidebar_drag` — Pointer-Bewegung und Release während einer Sidebar-Geste

mod sidebar_drag;
mod zoom;

pub use sidebar_drag::collect_sidebar_drag_intents;
pub use zoom::collect_wheel_intents;
