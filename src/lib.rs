pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;
pub mod util;

pub use controllers::panel::{PanelCommand, PanelController, PanelEvent, PanelListener};
pub use controllers::snapshot::{SnapshotOptions, render_snapshot};

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
