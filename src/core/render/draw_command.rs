use crate::core::data::colour::Colour;
use crate::core::data::vec2::Vec2;

/// One screen-space drawing primitive. Geometry is fully transformed; the
/// consumer only has to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    CircleOutline {
        centre: Vec2,
        radius: f64,
        colour: Colour,
    },
    Marker {
        at: Vec2,
        radius: f64,
        colour: Colour,
    },
    Chord {
        from: Vec2,
        to: Vec2,
        colour: Colour,
    },
}
