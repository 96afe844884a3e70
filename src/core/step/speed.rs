use crate::core::util::map_range::map_range;

/// Step-rate magnitude domain, in factor units per millisecond.
pub const STEP_PER_MS_MIN: f64 = 0.0001;
pub const STEP_PER_MS_MAX: f64 = 0.002;

pub const DEFAULT_SPEED_PERCENT: f64 = 25.0;

/// Maps a signed step rate to the external speed percentage in [0, 100].
/// Only the magnitude participates; the sign is direction, not speed.
#[must_use]
pub fn speed_percent(step_per_ms: f64) -> f64 {
    map_range(
        step_per_ms.abs().clamp(STEP_PER_MS_MIN, STEP_PER_MS_MAX),
        STEP_PER_MS_MIN,
        STEP_PER_MS_MAX,
        0.0,
        100.0,
    )
}

/// Maps a speed percentage in [0, 100] to a positive step rate.
#[must_use]
pub fn step_per_ms(speed_percent: f64) -> f64 {
    map_range(
        speed_percent.clamp(0.0, 100.0),
        0.0,
        100.0,
        STEP_PER_MS_MIN,
        STEP_PER_MS_MAX,
    )
}

#[must_use]
pub fn default_step_per_ms() -> f64 {
    step_per_ms(DEFAULT_SPEED_PERCENT)
}
