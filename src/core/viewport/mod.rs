pub mod transform;

pub use transform::{ViewportReport, ViewportTransform};

pub const SCALE_MIN: f64 = 0.1;
pub const SCALE_MAX: f64 = 50.0;
pub const SCALE_UNIT_INCREMENT: f64 = 0.5;
pub const SCALE_UNIT_DECREMENT_BELOW_1: f64 = 0.1;

/// Wheel rotation to scale delta, used by the interactive surface.
pub const SCALE_WHEEL_ROTATION_MULTIPLIER: f64 = 0.2;

/// One keyboard drag unit is this fraction of the canvas dimension.
pub const DRAG_UNITS: f64 = 50.0;
