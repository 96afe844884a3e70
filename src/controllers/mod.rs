pub mod panel;
pub mod snapshot;
