use crate::core::data::vec2::Vec2;
use crate::core::render::style::PatternColourMode;
use crate::core::step::EndBehaviour;

/// What the user asked for, separated from how state changes. UI surfaces
/// build these; `PanelController::dispatch` is the single consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCommand {
    SetPlay(bool),
    TogglePlay,
    Stop,
    SetTimesFactor(f64),
    SetSpeedPercent(f64),
    ReverseDirection,
    SetPointsCount(u32),
    SetEndBehaviour(EndBehaviour),
    SetStickOnInteger(bool),
    ToggleStickOnInteger,
    SetColourMode(PatternColourMode),
    SetDarkMode(bool),
    ToggleDarkMode,
    SetScale(f64),
    IncreaseScale(f64),
    IncrementScale,
    DecrementScale,
    SetDrag(Option<Vec2>),
    DragBy(Vec2),
    DragXByUnit(bool),
    DragYByUnit(bool),
    SetInvertX(bool),
    ToggleInvertX,
    SetInvertY(bool),
    ToggleInvertY,
    SetDrawCircle(bool),
    ToggleDrawCircle,
    SetDrawPoints(bool),
    ToggleDrawPoints,
    Reset { include_viewport: bool },
    ResetViewport,
}
