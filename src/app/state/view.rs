use crate::core::Viewport;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Zoom des Canvas
    pub viewport: Viewport,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Zoom 1.0).
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(),
        }
    }
}
