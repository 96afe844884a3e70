//! Input adapters: surfaces that translate user gestures into panel
//! commands.

pub mod gui;
