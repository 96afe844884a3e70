use crate::core::step::end_behaviour::EndBehaviour;
use crate::core::step::speed;
use crate::core::step::{FACTOR_MAX, FACTOR_MIN, FACTOR_START, STICK_DURATION_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub factor_changed: bool,
    pub snapped: bool,
    pub auto_paused: bool,
}

/// Advances the times factor over wall-clock milliseconds supplied by the
/// caller. Owns play state, stick-on-integer behaviour and the end-of-range
/// policy.
#[derive(Debug, Clone)]
pub struct StepEngine {
    running: bool,
    factor: f64,
    step_per_ms: f64,
    end_behaviour: EndBehaviour,
    stick_enabled: bool,
    pending_start_factor: Option<f64>,
    last_tick_ms: Option<u64>,
    last_stick_ms: Option<u64>,
}

impl Default for StepEngine {
    fn default() -> Self {
        Self {
            running: false,
            factor: FACTOR_START,
            step_per_ms: speed::default_step_per_ms(),
            end_behaviour: EndBehaviour::default(),
            stick_enabled: false,
            pending_start_factor: None,
            last_tick_ms: None,
            last_stick_ms: None,
        }
    }
}

impl StepEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }

        self.running = true;
        true
    }

    /// Stops the engine, remembering the current factor so a later
    /// `start()` resumes instead of restarting.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.running = false;
        self.pending_start_factor = Some(self.factor);
        self.last_tick_ms = None;
        true
    }

    pub fn tick(&mut self, now_ms: u64) -> StepReport {
        let mut report = StepReport::default();
        if !self.running {
            return report;
        }

        let Some(last_tick) = self.last_tick_ms else {
            // First tick after start only establishes the time baseline.
            if let Some(pending) = self.pending_start_factor.take() {
                report.factor_changed = pending != self.factor;
                self.factor = pending;
            }
            self.last_tick_ms = Some(now_ms);
            return report;
        };

        let previous = self.factor;
        let stick_held = self.stick_enabled
            && self
                .last_stick_ms
                .is_some_and(|stick| now_ms.saturating_sub(stick) < STICK_DURATION_MS);

        if !stick_held {
            let incrementing = self.step_per_ms > 0.0;
            let raw_step = self.step_per_ms * now_ms.saturating_sub(last_tick) as f64;

            let mut snapped = false;
            if self.stick_enabled {
                let next_stop = if self.factor.fract() == 0.0 {
                    self.factor + if incrementing { 1.0 } else { -1.0 }
                } else if incrementing {
                    self.factor.ceil()
                } else {
                    self.factor.floor()
                };

                if (next_stop - self.factor).abs() <= raw_step.abs() {
                    self.factor = next_stop;
                    snapped = true;
                }
            }

            if snapped {
                self.last_stick_ms = Some(now_ms);
                report.snapped = true;
            } else {
                self.factor += raw_step;
                self.last_stick_ms = None;
            }

            let passed_bound = if incrementing {
                self.factor >= FACTOR_MAX
            } else {
                self.factor <= FACTOR_MIN
            };

            if passed_bound {
                self.factor = self.factor.clamp(FACTOR_MIN, FACTOR_MAX);

                match self.end_behaviour {
                    EndBehaviour::Pause => {
                        self.stop();
                        report.auto_paused = true;
                    }
                    EndBehaviour::Repeat => self.factor = FACTOR_START,
                    EndBehaviour::Cycle => self.step_per_ms = -self.step_per_ms,
                }
            }
        }

        if self.running {
            self.last_tick_ms = Some(now_ms);
        }

        report.factor_changed = self.factor != previous;
        report
    }

    pub fn set_factor(&mut self, factor: f64) -> f64 {
        if !factor.is_finite() {
            return self.factor;
        }

        let clamped = factor.clamp(FACTOR_MIN, FACTOR_MAX);
        if clamped != self.factor {
            self.factor = clamped;
            if self.pending_start_factor.is_some() {
                // Resuming must resume from the value the caller just set.
                self.pending_start_factor = Some(clamped);
            }
        }

        self.factor
    }

    pub fn set_speed_percent(&mut self, percent: f64) -> f64 {
        if percent.is_finite() {
            let magnitude = speed::step_per_ms(percent);
            self.step_per_ms = if self.step_per_ms < 0.0 {
                -magnitude
            } else {
                magnitude
            };
        }

        self.speed_percent()
    }

    /// The explicit directional request; returns true when the factor is now
    /// incrementing.
    pub fn reverse_direction(&mut self) -> bool {
        self.step_per_ms = -self.step_per_ms;
        self.is_incrementing()
    }

    pub fn set_end_behaviour(&mut self, end_behaviour: EndBehaviour) -> bool {
        if self.end_behaviour == end_behaviour {
            return false;
        }

        self.end_behaviour = end_behaviour;
        true
    }

    pub fn set_stick_enabled(&mut self, stick_enabled: bool) -> bool {
        if self.stick_enabled == stick_enabled {
            return false;
        }

        self.stick_enabled = stick_enabled;
        true
    }

    /// Factor back to the start, pending state cleared. Play state is left
    /// alone.
    pub fn reset(&mut self) {
        self.factor = FACTOR_START;
        self.pending_start_factor = None;
        self.last_tick_ms = None;
        self.last_stick_ms = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[must_use]
    pub fn speed_percent(&self) -> f64 {
        speed::speed_percent(self.step_per_ms)
    }

    #[must_use]
    pub fn step_per_ms(&self) -> f64 {
        self.step_per_ms
    }

    #[must_use]
    pub fn is_incrementing(&self) -> bool {
        self.step_per_ms > 0.0
    }

    #[must_use]
    pub fn end_behaviour(&self) -> EndBehaviour {
        self.end_behaviour
    }

    #[must_use]
    pub fn stick_enabled(&self) -> bool {
        self.stick_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::{StepEngine, StepReport};
    use crate::core::step::{EndBehaviour, FACTOR_MAX, FACTOR_MIN, FACTOR_START, STICK_DURATION_MS};

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    /// Engine running at full speed (0.002 units/ms) with a baseline at 0.
    fn running_engine() -> StepEngine {
        let mut engine = StepEngine::new();
        engine.set_speed_percent(100.0);
        engine.start();
        engine.tick(0);
        engine
    }

    #[test]
    fn default_engine_is_stopped_at_the_start_factor() {
        let engine = StepEngine::new();

        assert!(!engine.is_running());
        assert_eq!(engine.factor(), FACTOR_START);
        assert!(engine.is_incrementing());
        assert_eq!(engine.end_behaviour(), EndBehaviour::Cycle);
        assert!(!engine.stick_enabled());
    }

    #[test]
    fn set_factor_clamps_to_the_domain() {
        let mut engine = StepEngine::new();

        assert_eq!(engine.set_factor(0.0), FACTOR_MIN);
        assert_eq!(engine.set_factor(1234.5), FACTOR_MAX);
        assert_eq!(engine.set_factor(42.5), 42.5);
    }

    #[test]
    fn set_factor_ignores_non_finite_input() {
        let mut engine = StepEngine::new();
        engine.set_factor(7.0);

        assert_eq!(engine.set_factor(f64::NAN), 7.0);
        assert_eq!(engine.set_factor(f64::INFINITY), 7.0);
    }

    #[test]
    fn first_tick_after_start_moves_nothing() {
        let mut engine = StepEngine::new();
        engine.set_factor(10.0);
        engine.start();

        let report = engine.tick(5_000);

        assert_eq!(report, StepReport::default());
        assert_eq!(engine.factor(), 10.0);
    }

    #[test]
    fn ticks_advance_by_rate_times_elapsed() {
        let mut engine = running_engine();

        let report = engine.tick(1_000);

        assert!(report.factor_changed);
        assert_approx_eq(engine.factor(), FACTOR_START + 2.0);

        engine.tick(1_500);
        assert_approx_eq(engine.factor(), FACTOR_START + 3.0);
    }

    #[test]
    fn stop_and_start_resume_from_the_paused_factor() {
        let mut engine = running_engine();
        engine.tick(1_000);
        let paused_at = engine.factor();

        assert!(engine.stop());
        assert!(!engine.is_running());
        assert_eq!(engine.factor(), paused_at);

        engine.start();
        // A long pause must not turn into a huge step: the first tick only
        // re-establishes the baseline.
        let report = engine.tick(1_000_000);
        assert!(!report.factor_changed);
        assert_eq!(engine.factor(), paused_at);

        engine.tick(1_000_500);
        assert_approx_eq(engine.factor(), paused_at + 1.0);
    }

    #[test]
    fn set_factor_while_paused_wins_over_the_pending_resume_value() {
        let mut engine = running_engine();
        engine.tick(1_000);
        engine.stop();

        engine.set_factor(100.0);
        engine.start();
        engine.tick(2_000);

        assert_eq!(engine.factor(), 100.0);
    }

    #[test]
    fn ticks_while_stopped_are_noops() {
        let mut engine = StepEngine::new();
        engine.set_factor(10.0);

        let report = engine.tick(1_000);

        assert_eq!(report, StepReport::default());
        assert_eq!(engine.factor(), 10.0);
    }

    #[test]
    fn reset_returns_to_the_start_and_clears_pending_state() {
        let mut engine = running_engine();
        engine.tick(1_000);
        engine.stop();

        engine.reset();
        engine.start();
        engine.tick(2_000);

        assert_eq!(engine.factor(), FACTOR_START);
    }

    #[test]
    fn cycle_flips_direction_at_the_upper_bound() {
        let mut engine = running_engine();
        engine.set_factor(499.0);

        engine.tick(1_000);

        assert_eq!(engine.factor(), FACTOR_MAX);
        assert!(!engine.is_incrementing());

        engine.tick(2_000);
        assert_approx_eq(engine.factor(), 498.0);
    }

    #[test]
    fn cycle_flips_direction_at_the_lower_bound() {
        let mut engine = running_engine();
        engine.reverse_direction();
        engine.set_factor(2.0);

        engine.tick(1_000);

        assert_eq!(engine.factor(), FACTOR_MIN);
        assert!(engine.is_incrementing());

        engine.tick(2_000);
        assert_approx_eq(engine.factor(), 3.0);
    }

    #[test]
    fn cycle_trajectory_stays_inside_the_domain() {
        let mut engine = running_engine();
        engine.set_factor(498.0);

        for step in 1..200 {
            engine.tick(step * 1_000);
            let factor = engine.factor();
            assert!(
                (FACTOR_MIN..=FACTOR_MAX).contains(&factor),
                "factor {} left the domain",
                factor
            );
        }
    }

    #[test]
    fn repeat_jumps_back_to_the_start() {
        let mut engine = running_engine();
        engine.set_end_behaviour(EndBehaviour::Repeat);
        engine.set_factor(499.5);

        let report = engine.tick(1_000);

        assert!(report.factor_changed);
        assert_eq!(engine.factor(), FACTOR_START);
        assert!(engine.is_incrementing());
    }

    #[test]
    fn pause_behaviour_stops_the_engine_at_the_bound() {
        let mut engine = running_engine();
        engine.set_end_behaviour(EndBehaviour::Pause);
        engine.set_factor(499.0);

        let report = engine.tick(1_000);

        assert!(report.auto_paused);
        assert!(report.factor_changed);
        assert!(!engine.is_running());
        assert_eq!(engine.factor(), FACTOR_MAX);

        // Further ticks do nothing until explicitly resumed.
        let idle = engine.tick(2_000);
        assert_eq!(idle, StepReport::default());
        assert_eq!(engine.factor(), FACTOR_MAX);
    }

    #[test]
    fn resume_after_auto_pause_keeps_the_factor_at_the_bound() {
        let mut engine = running_engine();
        engine.set_end_behaviour(EndBehaviour::Pause);
        engine.set_factor(499.0);
        engine.tick(1_000);

        engine.start();
        engine.tick(2_000);

        assert_eq!(engine.factor(), FACTOR_MAX);
    }

    #[test]
    fn sticking_snaps_onto_the_next_integer() {
        let mut engine = running_engine();
        engine.set_stick_enabled(true);
        engine.set_factor(4.7);

        // Step of 0.2 cannot reach 5 yet.
        let report = engine.tick(100);
        assert!(!report.snapped);
        assert_approx_eq(engine.factor(), 4.9);

        // Now |5 - 4.9| <= 0.2: snap exactly onto 5.
        let report = engine.tick(200);
        assert!(report.snapped);
        assert_eq!(engine.factor(), 5.0);
    }

    #[test]
    fn sticking_holds_the_factor_for_the_stick_duration() {
        let mut engine = running_engine();
        engine.set_stick_enabled(true);
        engine.set_factor(4.9);

        let report = engine.tick(100);
        assert!(report.snapped);
        assert_eq!(engine.factor(), 5.0);

        // Inside the hold window nothing moves and nothing is reported.
        for now in [200, 400, 100 + STICK_DURATION_MS - 1] {
            let held = engine.tick(now);
            assert_eq!(held, StepReport::default());
            assert_eq!(engine.factor(), 5.0);
        }

        // Once the window elapses, stepping resumes towards the next stop.
        let resumed = engine.tick(100 + STICK_DURATION_MS);
        assert!(resumed.factor_changed);
        assert!(engine.factor() > 5.0);
    }

    #[test]
    fn sticking_from_an_integer_targets_the_adjacent_integer() {
        let mut engine = running_engine();
        engine.set_stick_enabled(true);
        engine.set_factor(5.0);

        // 1000 ms at 0.002/ms is a step of 2.0, enough to reach 6.
        let report = engine.tick(1_000);

        assert!(report.snapped);
        assert_eq!(engine.factor(), 6.0);
    }

    #[test]
    fn sticking_while_decrementing_snaps_downwards() {
        let mut engine = running_engine();
        engine.reverse_direction();
        engine.set_stick_enabled(true);
        engine.set_factor(5.1);

        let report = engine.tick(100);

        assert!(report.snapped);
        assert_eq!(engine.factor(), 5.0);
    }

    #[test]
    fn set_speed_percent_preserves_direction() {
        let mut engine = StepEngine::new();
        engine.reverse_direction();

        let percent = engine.set_speed_percent(80.0);

        assert_approx_eq(percent, 80.0);
        assert!(!engine.is_incrementing());
        assert!(engine.step_per_ms() < 0.0);
    }

    #[test]
    fn set_speed_percent_clamps_and_reports_the_stored_percent() {
        let mut engine = StepEngine::new();

        assert_approx_eq(engine.set_speed_percent(150.0), 100.0);
        assert_approx_eq(engine.set_speed_percent(-5.0), 0.0);
    }

    #[test]
    fn reverse_direction_flips_the_sign_only() {
        let mut engine = StepEngine::new();
        let magnitude = engine.step_per_ms().abs();

        assert!(!engine.reverse_direction());
        assert_approx_eq(engine.step_per_ms().abs(), magnitude);
        assert!(engine.reverse_direction());
    }
}
