use std::rc::Rc;

use crate::controllers::panel::command::PanelCommand;
use crate::controllers::panel::event::{PanelEvent, PanelListener};
use crate::core::data::surface::SurfaceSize;
use crate::core::data::vec2::Vec2;
use crate::core::render::pattern::{FrameParams, frame_commands};
use crate::core::render::style::{Palette, PatternColourMode, RenderStyle};
use crate::core::render::DrawCommand;
use crate::core::step::engine::{StepEngine, StepReport};
use crate::core::step::EndBehaviour;
use crate::core::viewport::transform::ViewportTransform;
use crate::util::listeners::{ListenerId, Listeners};

pub const POINTS_COUNT_MIN: u32 = 10;
pub const POINTS_COUNT_MAX: u32 = 400;
pub const POINTS_COUNT_DEFAULT: u32 = 200;

pub const DEFAULT_DARK_MODE: bool = true;

/// Aggregates the step engine, the viewport and the scalar configuration
/// behind one command/notification surface.
///
/// Every setter follows the same contract: clamp, compare, and either no-op
/// silently or mutate, notify that property's listeners and request a
/// redraw.
pub struct PanelController {
    engine: StepEngine,
    viewport: ViewportTransform,
    style: RenderStyle,
    dark_mode: bool,
    points_count: u32,
    invert_x: bool,
    invert_y: bool,
    draw_circle: bool,
    draw_points: bool,
    listeners: Rc<Listeners<dyn PanelListener>>,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: StepEngine::new(),
            viewport: ViewportTransform::default(),
            style: RenderStyle::default(),
            dark_mode: DEFAULT_DARK_MODE,
            points_count: POINTS_COUNT_DEFAULT,
            invert_x: false,
            invert_y: false,
            draw_circle: false,
            draw_points: false,
            listeners: Rc::new(Listeners::new()),
        }
    }

    /* ................................ listeners ............................ */

    pub fn add_listener(&self, listener: Rc<dyn PanelListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// A clone of the hub itself, so listeners can unsubscribe from within a
    /// notification.
    #[must_use]
    pub fn listeners(&self) -> Rc<Listeners<dyn PanelListener>> {
        Rc::clone(&self.listeners)
    }

    fn notify(&self, event: PanelEvent) {
        self.listeners.for_each(|listener| listener.on_panel_event(&event));
    }

    fn notify_redraw(&self) {
        self.notify(PanelEvent::RedrawNeeded);
    }

    /* ................................ playback ............................. */

    pub fn set_play(&mut self, play: bool) -> bool {
        let changed = if play {
            self.engine.start()
        } else {
            self.engine.stop()
        };

        if changed {
            self.notify(PanelEvent::PlayingChanged(play));
        }

        changed
    }

    /// Returns the new playing state.
    pub fn toggle_play(&mut self) -> bool {
        let play = !self.is_playing();
        self.set_play(play);
        play
    }

    /// Pause and rewind the factor, leaving the viewport alone.
    pub fn stop(&mut self) {
        self.set_play(false);
        self.reset(false);
    }

    /// Advances the animation. The external timer calls this while playing;
    /// ticks on a stopped panel are no-ops.
    pub fn tick(&mut self, now_ms: u64) -> StepReport {
        let report = self.engine.tick(now_ms);

        if report.factor_changed {
            self.notify(PanelEvent::TimesFactorChanged(self.engine.factor()));
            self.notify_redraw();
        }

        if report.auto_paused {
            self.notify(PanelEvent::PlayingChanged(false));
        }

        report
    }

    /* .............................. factor / speed ........................ */

    pub fn set_times_factor(&mut self, times_factor: f64) -> f64 {
        let previous = self.engine.factor();
        let stored = self.engine.set_factor(times_factor);

        if stored != previous {
            self.notify(PanelEvent::TimesFactorChanged(stored));
            self.notify_redraw();
        }

        stored
    }

    pub fn set_speed_percent(&mut self, percent: f64) -> f64 {
        let previous = self.engine.step_per_ms();
        let stored = self.engine.set_speed_percent(percent);

        if self.engine.step_per_ms() != previous {
            self.notify(PanelEvent::SpeedPercentChanged(stored));
        }

        stored
    }

    /// Returns true when the factor is now incrementing.
    pub fn reverse_direction(&mut self) -> bool {
        self.engine.reverse_direction()
    }

    pub fn set_points_count(&mut self, points_count: u32) -> u32 {
        let clamped = points_count.clamp(POINTS_COUNT_MIN, POINTS_COUNT_MAX);
        if clamped != self.points_count {
            self.points_count = clamped;
            self.notify(PanelEvent::PointsCountChanged(clamped));
            self.notify_redraw();
        }

        self.points_count
    }

    pub fn set_end_behaviour(&mut self, end_behaviour: EndBehaviour) -> bool {
        let old = self.engine.end_behaviour();
        let changed = self.engine.set_end_behaviour(end_behaviour);

        if changed {
            self.notify(PanelEvent::EndBehaviourChanged {
                old,
                new: end_behaviour,
            });
        }

        changed
    }

    pub fn set_stick_on_integer(&mut self, stick_enabled: bool) -> bool {
        let changed = self.engine.set_stick_enabled(stick_enabled);
        if changed {
            self.notify(PanelEvent::StickOnIntegerChanged(stick_enabled));
            self.notify_redraw();
        }

        changed
    }

    /// Returns the new stick state.
    pub fn toggle_stick_on_integer(&mut self) -> bool {
        let enabled = !self.engine.stick_enabled();
        self.set_stick_on_integer(enabled);
        enabled
    }

    /* ................................. style ............................... */

    pub fn set_colour_mode(&mut self, mode: PatternColourMode) -> bool {
        if self.style.mode == mode {
            return false;
        }

        self.style.mode = mode;
        self.notify(PanelEvent::ColourModeChanged(mode));
        self.notify_redraw();
        true
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> bool {
        if self.dark_mode == dark_mode {
            return false;
        }

        self.dark_mode = dark_mode;
        self.style.palette = Palette::for_dark_mode(dark_mode);
        self.notify(PanelEvent::DarkModeChanged(dark_mode));
        self.notify_redraw();
        true
    }

    /// Returns the new dark-mode state.
    pub fn toggle_dark_mode(&mut self) -> bool {
        let dark_mode = !self.dark_mode;
        self.set_dark_mode(dark_mode);
        dark_mode
    }

    /* ................................ viewport ............................. */

    pub fn set_scale(&mut self, scale: f64) -> f64 {
        let report = self.viewport.set_scale(scale);

        if report.scale_changed {
            self.notify(PanelEvent::ScaleChanged(self.viewport.scale()));
        }
        if report.drag_changed {
            self.notify(PanelEvent::DragChanged(self.viewport.drag()));
        }
        if report.scale_changed || report.drag_changed {
            self.notify_redraw();
        }

        self.viewport.scale()
    }

    pub fn increase_scale(&mut self, delta: f64) -> bool {
        let before = self.viewport.scale();
        self.set_scale(before + delta) != before
    }

    pub fn increment_scale(&mut self) -> bool {
        self.increase_scale(self.viewport.scale_unit_increment())
    }

    pub fn decrement_scale(&mut self) -> bool {
        self.increase_scale(-self.viewport.scale_unit_decrement())
    }

    pub fn set_drag(&mut self, drag: Option<Vec2>) -> bool {
        let changed = self.viewport.set_drag(drag);
        if changed {
            self.notify(PanelEvent::DragChanged(self.viewport.drag()));
            self.notify_redraw();
        }

        changed
    }

    pub fn drag_by(&mut self, delta: Vec2) -> bool {
        let base = self.viewport.drag().unwrap_or(Vec2::ZERO);
        self.set_drag(Some(base + delta))
    }

    pub fn drag_x_by_unit(&mut self, right: bool) -> bool {
        let changed = self.viewport.drag_x_by_unit(right);
        if changed {
            self.notify(PanelEvent::DragChanged(self.viewport.drag()));
            self.notify_redraw();
        }

        changed
    }

    pub fn drag_y_by_unit(&mut self, down: bool) -> bool {
        let changed = self.viewport.drag_y_by_unit(down);
        if changed {
            self.notify(PanelEvent::DragChanged(self.viewport.drag()));
            self.notify_redraw();
        }

        changed
    }

    /// The drawing surface reports its size here; a shrinking surface can
    /// pull an existing drag back inside its bound.
    pub fn set_canvas_size(&mut self, canvas: SurfaceSize) {
        if self.viewport.set_canvas_size(canvas) {
            self.notify(PanelEvent::DragChanged(self.viewport.drag()));
            self.notify_redraw();
        }
    }

    /* ................................. flags ............................... */

    pub fn set_invert_x(&mut self, invert_x: bool) -> bool {
        if self.invert_x == invert_x {
            return false;
        }

        self.invert_x = invert_x;
        self.notify(PanelEvent::InvertXChanged(invert_x));
        self.notify_redraw();
        true
    }

    pub fn toggle_invert_x(&mut self) -> bool {
        let inverted = !self.invert_x;
        self.set_invert_x(inverted);
        inverted
    }

    pub fn set_invert_y(&mut self, invert_y: bool) -> bool {
        if self.invert_y == invert_y {
            return false;
        }

        self.invert_y = invert_y;
        self.notify(PanelEvent::InvertYChanged(invert_y));
        self.notify_redraw();
        true
    }

    pub fn toggle_invert_y(&mut self) -> bool {
        let inverted = !self.invert_y;
        self.set_invert_y(inverted);
        inverted
    }

    pub fn set_draw_circle(&mut self, draw_circle: bool) -> bool {
        if self.draw_circle == draw_circle {
            return false;
        }

        self.draw_circle = draw_circle;
        self.notify(PanelEvent::DrawCircleChanged(draw_circle));
        self.notify_redraw();
        true
    }

    pub fn toggle_draw_circle(&mut self) -> bool {
        let enabled = !self.draw_circle;
        self.set_draw_circle(enabled);
        enabled
    }

    pub fn set_draw_points(&mut self, draw_points: bool) -> bool {
        if self.draw_points == draw_points {
            return false;
        }

        self.draw_points = draw_points;
        self.notify(PanelEvent::DrawPointsChanged(draw_points));
        self.notify_redraw();
        true
    }

    pub fn toggle_draw_points(&mut self) -> bool {
        let enabled = !self.draw_points;
        self.set_draw_points(enabled);
        enabled
    }

    /* ................................. reset ............................... */

    /// Rewinds the factor (always) and the viewport (on request), then emits
    /// exactly one redraw no matter how many sub-components changed.
    pub fn reset(&mut self, include_viewport: bool) {
        let previous_factor = self.engine.factor();
        self.engine.reset();

        if self.engine.factor() != previous_factor {
            self.notify(PanelEvent::TimesFactorChanged(self.engine.factor()));
        }

        if include_viewport {
            let report = self.viewport.reset();
            if report.scale_changed {
                self.notify(PanelEvent::ScaleChanged(self.viewport.scale()));
            }
            if report.drag_changed {
                self.notify(PanelEvent::DragChanged(None));
            }
        }

        self.notify_redraw();
    }

    pub fn reset_viewport(&mut self) -> bool {
        let report = self.viewport.reset();
        if report.scale_changed {
            self.notify(PanelEvent::ScaleChanged(self.viewport.scale()));
        }
        if report.drag_changed {
            self.notify(PanelEvent::DragChanged(None));
        }

        let changed = report.scale_changed || report.drag_changed;
        if changed {
            self.notify_redraw();
        }

        changed
    }

    /* ................................ dispatch ............................. */

    /// The single consumer of panel commands. Returns whether any state
    /// actually changed.
    pub fn dispatch(&mut self, command: PanelCommand) -> bool {
        let changed = match command {
            PanelCommand::SetPlay(play) => self.set_play(play),
            PanelCommand::TogglePlay => {
                self.toggle_play();
                true
            }
            PanelCommand::Stop => {
                self.stop();
                true
            }
            PanelCommand::SetTimesFactor(value) => {
                let before = self.engine.factor();
                self.set_times_factor(value) != before
            }
            PanelCommand::SetSpeedPercent(percent) => {
                let before = self.engine.step_per_ms();
                self.set_speed_percent(percent);
                self.engine.step_per_ms() != before
            }
            PanelCommand::ReverseDirection => {
                self.reverse_direction();
                true
            }
            PanelCommand::SetPointsCount(count) => {
                let before = self.points_count;
                self.set_points_count(count) != before
            }
            PanelCommand::SetEndBehaviour(behaviour) => self.set_end_behaviour(behaviour),
            PanelCommand::SetStickOnInteger(enabled) => self.set_stick_on_integer(enabled),
            PanelCommand::ToggleStickOnInteger => {
                self.toggle_stick_on_integer();
                true
            }
            PanelCommand::SetColourMode(mode) => self.set_colour_mode(mode),
            PanelCommand::SetDarkMode(dark) => self.set_dark_mode(dark),
            PanelCommand::ToggleDarkMode => {
                self.toggle_dark_mode();
                true
            }
            PanelCommand::SetScale(scale) => {
                let before = self.viewport.scale();
                self.set_scale(scale) != before
            }
            PanelCommand::IncreaseScale(delta) => self.increase_scale(delta),
            PanelCommand::IncrementScale => self.increment_scale(),
            PanelCommand::DecrementScale => self.decrement_scale(),
            PanelCommand::SetDrag(drag) => self.set_drag(drag),
            PanelCommand::DragBy(delta) => self.drag_by(delta),
            PanelCommand::DragXByUnit(right) => self.drag_x_by_unit(right),
            PanelCommand::DragYByUnit(down) => self.drag_y_by_unit(down),
            PanelCommand::SetInvertX(invert) => self.set_invert_x(invert),
            PanelCommand::ToggleInvertX => {
                self.toggle_invert_x();
                true
            }
            PanelCommand::SetInvertY(invert) => self.set_invert_y(invert),
            PanelCommand::ToggleInvertY => {
                self.toggle_invert_y();
                true
            }
            PanelCommand::SetDrawCircle(draw) => self.set_draw_circle(draw),
            PanelCommand::ToggleDrawCircle => {
                self.toggle_draw_circle();
                true
            }
            PanelCommand::SetDrawPoints(draw) => self.set_draw_points(draw),
            PanelCommand::ToggleDrawPoints => {
                self.toggle_draw_points();
                true
            }
            PanelCommand::Reset { include_viewport } => {
                self.reset(include_viewport);
                true
            }
            PanelCommand::ResetViewport => self.reset_viewport(),
        };

        tracing::debug!(?command, changed, "panel command dispatched");
        changed
    }

    /* ................................. render .............................. */

    #[must_use]
    pub fn frame_params(&self, canvas: SurfaceSize) -> FrameParams<'_> {
        FrameParams {
            canvas,
            points_count: self.points_count,
            times_factor: self.engine.factor(),
            scale: self.viewport.scale(),
            drag: self.viewport.drag(),
            invert_x: self.invert_x,
            invert_y: self.invert_y,
            draw_circle: self.draw_circle,
            draw_points: self.draw_points,
            style: &self.style,
        }
    }

    /// The render callback: the external surface hands in its current size
    /// and paints whatever comes back.
    pub fn frame_commands(&self, canvas: SurfaceSize) -> impl Iterator<Item = DrawCommand> + '_ {
        frame_commands(self.frame_params(canvas))
    }

    /* ................................ getters .............................. */

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.engine.is_running()
    }

    #[must_use]
    pub fn times_factor(&self) -> f64 {
        self.engine.factor()
    }

    #[must_use]
    pub fn speed_percent(&self) -> f64 {
        self.engine.speed_percent()
    }

    #[must_use]
    pub fn points_count(&self) -> u32 {
        self.points_count
    }

    #[must_use]
    pub fn stick_on_integer(&self) -> bool {
        self.engine.stick_enabled()
    }

    #[must_use]
    pub fn end_behaviour(&self) -> EndBehaviour {
        self.engine.end_behaviour()
    }

    #[must_use]
    pub fn colour_mode(&self) -> PatternColourMode {
        self.style.mode
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    #[must_use]
    pub fn invert_x(&self) -> bool {
        self.invert_x
    }

    #[must_use]
    pub fn invert_y(&self) -> bool {
        self.invert_y
    }

    #[must_use]
    pub fn draw_circle(&self) -> bool {
        self.draw_circle
    }

    #[must_use]
    pub fn draw_points(&self) -> bool {
        self.draw_points
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    #[must_use]
    pub fn drag(&self) -> Option<Vec2> {
        self.viewport.drag()
    }

    #[must_use]
    pub fn canvas_size(&self) -> SurfaceSize {
        self.viewport.canvas_size()
    }

    #[must_use]
    pub fn has_scale_or_drag(&self) -> bool {
        self.viewport.has_scale() || self.viewport.has_drag()
    }
}
