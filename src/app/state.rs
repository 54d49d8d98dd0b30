//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod sidebar;
mod view;

pub use app_state::AppState;
pub use interaction::{
    ContextMenu, DescriptionEditor, InteractionMode, InteractionState, LabelEditor, MenuTarget,
};
pub use sidebar::SidebarState;
pub use view::ViewState;
