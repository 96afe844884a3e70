use winit::keyboard::{KeyCode, ModifiersState};

use crate::controllers::panel::PanelCommand;

/// Keyboard shortcut table, one key chord per panel command.
#[must_use]
pub fn command_for_key(key: KeyCode, modifiers: ModifiersState) -> Option<PanelCommand> {
    let shift = modifiers.shift_key();
    let ctrl = modifiers.control_key();

    match key {
        KeyCode::Space => Some(PanelCommand::TogglePlay),
        KeyCode::Escape => Some(PanelCommand::Stop),

        KeyCode::KeyR if ctrl => Some(PanelCommand::Reset {
            include_viewport: true,
        }),
        KeyCode::KeyR if shift => Some(PanelCommand::ResetViewport),
        KeyCode::KeyR => Some(PanelCommand::Reset {
            include_viewport: false,
        }),

        KeyCode::ArrowUp if ctrl => Some(PanelCommand::DragYByUnit(false)),
        KeyCode::ArrowDown if ctrl => Some(PanelCommand::DragYByUnit(true)),
        KeyCode::ArrowLeft if ctrl => Some(PanelCommand::DragXByUnit(false)),
        KeyCode::ArrowRight if ctrl => Some(PanelCommand::DragXByUnit(true)),

        KeyCode::ArrowUp if shift => Some(PanelCommand::IncrementScale),
        KeyCode::ArrowDown if shift => Some(PanelCommand::DecrementScale),

        KeyCode::KeyX if shift => Some(PanelCommand::ToggleInvertX),
        KeyCode::KeyY if shift => Some(PanelCommand::ToggleInvertY),
        KeyCode::KeyD if shift => Some(PanelCommand::ToggleDarkMode),

        KeyCode::KeyC => Some(PanelCommand::ToggleDrawCircle),
        KeyCode::KeyP => Some(PanelCommand::ToggleDrawPoints),
        KeyCode::KeyS => Some(PanelCommand::ToggleStickOnInteger),
        KeyCode::KeyV => Some(PanelCommand::ReverseDirection),

        _ => None,
    }
}
