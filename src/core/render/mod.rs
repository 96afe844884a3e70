pub mod draw_command;
pub mod pattern;
pub mod raster;
pub mod style;

pub use draw_command::DrawCommand;
pub use pattern::{FrameParams, frame_commands};
pub use style::{Palette, PatternColourMode, RenderStyle};
