use crate::core::data::vec2::Vec2;
use crate::core::render::style::PatternColourMode;
use crate::core::step::EndBehaviour;

/// One consolidated notification per observable property, plus the generic
/// redraw signal. Payloads are copies; listeners never see internal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    PlayingChanged(bool),
    TimesFactorChanged(f64),
    SpeedPercentChanged(f64),
    PointsCountChanged(u32),
    StickOnIntegerChanged(bool),
    EndBehaviourChanged {
        old: EndBehaviour,
        new: EndBehaviour,
    },
    ColourModeChanged(PatternColourMode),
    DarkModeChanged(bool),
    InvertXChanged(bool),
    InvertYChanged(bool),
    DrawCircleChanged(bool),
    DrawPointsChanged(bool),
    ScaleChanged(f64),
    DragChanged(Option<Vec2>),
    RedrawNeeded,
}

pub trait PanelListener {
    fn on_panel_event(&self, event: &PanelEvent);
}
