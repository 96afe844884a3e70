pub mod command;
pub mod controller;
pub mod event;

pub use command::PanelCommand;
pub use controller::PanelController;
pub use event::{PanelEvent, PanelListener};
