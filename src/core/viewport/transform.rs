use crate::core::data::surface::SurfaceSize;
use crate::core::data::vec2::Vec2;
use crate::core::viewport::{
    DRAG_UNITS, SCALE_MAX, SCALE_MIN, SCALE_UNIT_DECREMENT_BELOW_1, SCALE_UNIT_INCREMENT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportReport {
    pub scale_changed: bool,
    pub drag_changed: bool,
}

/// Pan and zoom state. The drag bound depends on the canvas size and the
/// current scale, so both scale changes and canvas resizes re-clamp an
/// existing drag.
#[derive(Debug, Clone)]
pub struct ViewportTransform {
    scale: f64,
    drag: Option<Vec2>,
    canvas: SurfaceSize,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(SurfaceSize::ZERO)
    }
}

impl ViewportTransform {
    #[must_use]
    pub fn new(canvas: SurfaceSize) -> Self {
        Self {
            scale: 1.0,
            drag: None,
            canvas,
        }
    }

    pub fn set_scale(&mut self, scale: f64) -> ViewportReport {
        let mut report = ViewportReport::default();
        if !scale.is_finite() {
            return report;
        }

        let clamped = scale.clamp(SCALE_MIN, SCALE_MAX);
        if clamped == self.scale {
            return report;
        }

        self.scale = clamped;
        report.scale_changed = true;
        // The drag bound just moved with the scale.
        report.drag_changed = self.set_drag(self.drag);
        report
    }

    pub fn increase_scale(&mut self, delta: f64) -> ViewportReport {
        self.set_scale(self.scale + delta)
    }

    pub fn increment_scale(&mut self) -> ViewportReport {
        self.increase_scale(self.scale_unit_increment())
    }

    pub fn decrement_scale(&mut self) -> ViewportReport {
        self.increase_scale(-self.scale_unit_decrement())
    }

    /// Snapping delta upwards: from an integer scale a full unit, otherwise
    /// no further than the next integer above.
    #[must_use]
    pub fn scale_unit_increment(&self) -> f64 {
        let int_scale = self.scale.floor();
        if int_scale == self.scale {
            SCALE_UNIT_INCREMENT
        } else {
            (int_scale + 1.0 - self.scale).min(SCALE_UNIT_INCREMENT)
        }
    }

    /// Snapping delta downwards, with finer steps at or below scale 1.
    #[must_use]
    pub fn scale_unit_decrement(&self) -> f64 {
        let int_scale = self.scale.floor();
        let default = if self.scale > 1.0 {
            SCALE_UNIT_INCREMENT
        } else {
            SCALE_UNIT_DECREMENT_BELOW_1
        };

        if int_scale == self.scale {
            default
        } else {
            (self.scale - int_scale).min(default)
        }
    }

    pub fn set_drag(&mut self, drag: Option<Vec2>) -> bool {
        if drag.is_some_and(|d| !d.x.is_finite() || !d.y.is_finite()) {
            return false;
        }

        let clamped = drag.map(|d| self.clamp_drag(d));
        if clamped == self.drag {
            return false;
        }

        self.drag = clamped;
        true
    }

    pub fn drag_by(&mut self, delta: Vec2) -> bool {
        let base = self.drag.unwrap_or(Vec2::ZERO);
        self.set_drag(Some(base + delta))
    }

    pub fn drag_x_by_unit(&mut self, right: bool) -> bool {
        let unit = f64::from(self.canvas.width) / DRAG_UNITS;
        self.drag_by(Vec2::new(if right { unit } else { -unit }, 0.0))
    }

    pub fn drag_y_by_unit(&mut self, down: bool) -> bool {
        let unit = f64::from(self.canvas.height) / DRAG_UNITS;
        self.drag_by(Vec2::new(0.0, if down { unit } else { -unit }))
    }

    /// A resize moves the drag bound, so the stored drag is re-validated.
    pub fn set_canvas_size(&mut self, canvas: SurfaceSize) -> bool {
        if canvas == self.canvas {
            return false;
        }

        self.canvas = canvas;
        self.set_drag(self.drag)
    }

    pub fn reset(&mut self) -> ViewportReport {
        let report = ViewportReport {
            scale_changed: self.scale != 1.0,
            drag_changed: self.drag.is_some(),
        };

        self.scale = 1.0;
        self.drag = None;
        report
    }

    #[must_use]
    pub fn max_drag(&self) -> Vec2 {
        let factor = self.scale.max(0.5);
        Vec2::new(
            f64::from(self.canvas.width) * factor,
            f64::from(self.canvas.height) * factor,
        )
    }

    fn clamp_drag(&self, drag: Vec2) -> Vec2 {
        let max = self.max_drag();
        Vec2::new(drag.x.clamp(-max.x, max.x), drag.y.clamp(-max.y, max.y))
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn drag(&self) -> Option<Vec2> {
        self.drag
    }

    #[must_use]
    pub fn canvas_size(&self) -> SurfaceSize {
        self.canvas
    }

    #[must_use]
    pub fn has_scale(&self) -> bool {
        self.scale != 1.0
    }

    #[must_use]
    pub fn has_drag(&self) -> bool {
        self.drag.is_some_and(|d| !d.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportReport, ViewportTransform};
    use crate::core::data::surface::SurfaceSize;
    use crate::core::data::vec2::Vec2;
    use crate::core::viewport::{SCALE_MAX, SCALE_MIN};

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn viewport() -> ViewportTransform {
        ViewportTransform::new(SurfaceSize::new(800, 600))
    }

    #[test]
    fn default_viewport_has_unit_scale_and_no_drag() {
        let viewport = viewport();

        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.drag(), None);
        assert!(!viewport.has_scale());
        assert!(!viewport.has_drag());
    }

    #[test]
    fn set_scale_clamps_to_the_domain() {
        let mut viewport = viewport();

        viewport.set_scale(0.0);
        assert_eq!(viewport.scale(), SCALE_MIN);

        viewport.set_scale(1e9);
        assert_eq!(viewport.scale(), SCALE_MAX);
    }

    #[test]
    fn set_scale_to_the_current_value_reports_no_change() {
        let mut viewport = viewport();
        viewport.set_scale(2.0);

        let report = viewport.set_scale(2.0);

        assert_eq!(report, ViewportReport::default());
    }

    #[test]
    fn set_scale_ignores_non_finite_input() {
        let mut viewport = viewport();
        viewport.set_scale(3.0);

        let report = viewport.set_scale(f64::NAN);

        assert_eq!(report, ViewportReport::default());
        assert_eq!(viewport.scale(), 3.0);
    }

    #[test]
    fn increment_from_an_integer_scale_adds_the_full_unit() {
        let mut viewport = viewport();
        viewport.set_scale(2.0);

        viewport.increment_scale();

        assert_approx_eq(viewport.scale(), 2.5);
    }

    #[test]
    fn increment_snaps_to_the_next_integer_when_closer_than_a_unit() {
        let mut viewport = viewport();
        viewport.set_scale(2.7);

        viewport.increment_scale();

        assert_approx_eq(viewport.scale(), 3.0);
    }

    #[test]
    fn increment_far_from_an_integer_uses_the_default_unit() {
        let mut viewport = viewport();
        viewport.set_scale(2.3);

        viewport.increment_scale();

        assert_approx_eq(viewport.scale(), 2.8);
    }

    #[test]
    fn decrement_snaps_to_the_next_integer_below() {
        let mut viewport = viewport();
        viewport.set_scale(2.3);

        viewport.decrement_scale();

        assert_approx_eq(viewport.scale(), 2.0);
    }

    #[test]
    fn decrement_below_one_uses_the_fine_unit() {
        let mut viewport = viewport();
        viewport.set_scale(1.0);

        viewport.decrement_scale();
        assert_approx_eq(viewport.scale(), 0.9);

        viewport.decrement_scale();
        assert_approx_eq(viewport.scale(), 0.8);
    }

    #[test]
    fn drag_is_clamped_per_axis_with_the_sign_preserved() {
        let mut viewport = viewport();
        viewport.set_scale(2.0);

        viewport.set_drag(Some(Vec2::new(5_000.0, -5_000.0)));

        // 800 * 2 = 1600, 600 * 2 = 1200.
        assert_eq!(viewport.drag(), Some(Vec2::new(1_600.0, -1_200.0)));
    }

    #[test]
    fn drag_bound_never_drops_below_half_the_canvas() {
        let mut viewport = viewport();
        viewport.set_scale(0.1);

        let max = viewport.max_drag();

        assert_approx_eq(max.x, 400.0);
        assert_approx_eq(max.y, 300.0);
    }

    #[test]
    fn clearing_an_absent_drag_is_a_noop() {
        let mut viewport = viewport();

        assert!(!viewport.set_drag(None));

        viewport.set_drag(Some(Vec2::new(10.0, 10.0)));
        assert!(viewport.set_drag(None));
        assert_eq!(viewport.drag(), None);
    }

    #[test]
    fn drag_by_accumulates_from_nothing() {
        let mut viewport = viewport();

        viewport.drag_by(Vec2::new(10.0, 5.0));
        viewport.drag_by(Vec2::new(-4.0, 1.0));

        assert_eq!(viewport.drag(), Some(Vec2::new(6.0, 6.0)));
    }

    #[test]
    fn unit_drags_move_by_a_canvas_fraction() {
        let mut viewport = viewport();

        viewport.drag_x_by_unit(true);
        viewport.drag_y_by_unit(false);

        assert_eq!(viewport.drag(), Some(Vec2::new(16.0, -12.0)));
    }

    #[test]
    fn shrinking_the_canvas_reclamps_the_stored_drag() {
        let mut viewport = viewport();
        viewport.set_drag(Some(Vec2::new(790.0, 0.0)));

        let drag_changed = viewport.set_canvas_size(SurfaceSize::new(400, 300));

        assert!(drag_changed);
        assert_eq!(viewport.drag(), Some(Vec2::new(400.0, 0.0)));
    }

    #[test]
    fn lowering_the_scale_reclamps_the_stored_drag() {
        let mut viewport = viewport();
        viewport.set_scale(2.0);
        viewport.set_drag(Some(Vec2::new(1_600.0, 0.0)));

        let report = viewport.set_scale(1.0);

        assert!(report.scale_changed);
        assert!(report.drag_changed);
        assert_eq!(viewport.drag(), Some(Vec2::new(800.0, 0.0)));
    }

    #[test]
    fn resize_to_the_same_canvas_reports_no_change() {
        let mut viewport = viewport();
        viewport.set_drag(Some(Vec2::new(100.0, 100.0)));

        assert!(!viewport.set_canvas_size(SurfaceSize::new(800, 600)));
    }

    #[test]
    fn reset_restores_unit_scale_and_clears_drag() {
        let mut viewport = viewport();
        viewport.set_scale(4.0);
        viewport.set_drag(Some(Vec2::new(50.0, 50.0)));

        let report = viewport.reset();

        assert!(report.scale_changed);
        assert!(report.drag_changed);
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.drag(), None);
    }

    #[test]
    fn reset_of_a_pristine_viewport_reports_no_change() {
        let mut viewport = viewport();

        assert_eq!(viewport.reset(), ViewportReport::default());
    }
}
