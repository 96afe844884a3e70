pub mod end_behaviour;
pub mod engine;
pub mod speed;

pub use end_behaviour::EndBehaviour;
pub use engine::{StepEngine, StepReport};

pub const FACTOR_MIN: f64 = 1.0;
pub const FACTOR_MAX: f64 = 500.0;

/// Value the factor (re)starts from.
pub const FACTOR_START: f64 = FACTOR_MIN;

/// How long the factor holds still after snapping onto an integer.
pub const STICK_DURATION_MS: u64 = 600;
