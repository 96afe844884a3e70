use egui::Context;

use crate::controllers::panel::{PanelCommand, PanelController};
use crate::core::render::style::PatternColourMode;
use crate::core::step::EndBehaviour;

/// The egui control panel. Widgets read controller state and push intents;
/// the caller dispatches them after the frame, keeping this function free of
/// mutation.
pub fn draw(ctx: &Context, controller: &PanelController, commands: &mut Vec<PanelCommand>) {
    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .default_size([260.0, 360.0])
        .show(ctx, |ui| {
            ui.heading("Times Table Rose");
            ui.label(format!("Times: {:.2}", controller.times_factor()));
            ui.separator();

            ui.horizontal(|ui| {
                let play_label = if controller.is_playing() {
                    "Pause"
                } else {
                    "Play"
                };
                if ui.button(play_label).clicked() {
                    commands.push(PanelCommand::TogglePlay);
                }
                if ui.button("Stop").clicked() {
                    commands.push(PanelCommand::Stop);
                }
                if ui.button("Reverse").clicked() {
                    commands.push(PanelCommand::ReverseDirection);
                }
            });

            let mut factor = controller.times_factor();
            if ui
                .add(egui::Slider::new(&mut factor, 1.0..=500.0).text("Factor"))
                .changed()
            {
                commands.push(PanelCommand::SetTimesFactor(factor));
            }

            let mut speed = controller.speed_percent();
            if ui
                .add(egui::Slider::new(&mut speed, 0.0..=100.0).text("Speed %"))
                .changed()
            {
                commands.push(PanelCommand::SetSpeedPercent(speed));
            }

            let mut points = controller.points_count();
            if ui
                .add(egui::Slider::new(&mut points, 10..=400).text("Points"))
                .changed()
            {
                commands.push(PanelCommand::SetPointsCount(points));
            }

            ui.horizontal(|ui| {
                ui.label("End:");
                egui::ComboBox::from_id_source("end_behaviour")
                    .selected_text(controller.end_behaviour().display_name())
                    .show_ui(ui, |ui| {
                        for &behaviour in EndBehaviour::ALL {
                            let selected = controller.end_behaviour() == behaviour;
                            if ui
                                .selectable_label(selected, behaviour.display_name())
                                .clicked()
                            {
                                commands.push(PanelCommand::SetEndBehaviour(behaviour));
                            }
                        }
                    });

                ui.label("Colour:");
                egui::ComboBox::from_id_source("colour_mode")
                    .selected_text(controller.colour_mode().display_name())
                    .show_ui(ui, |ui| {
                        for &mode in PatternColourMode::ALL {
                            let selected = controller.colour_mode() == mode;
                            if ui.selectable_label(selected, mode.display_name()).clicked() {
                                commands.push(PanelCommand::SetColourMode(mode));
                            }
                        }
                    });
            });

            let mut stick = controller.stick_on_integer();
            if ui.checkbox(&mut stick, "Stick on integers").changed() {
                commands.push(PanelCommand::SetStickOnInteger(stick));
            }

            let mut draw_circle = controller.draw_circle();
            if ui.checkbox(&mut draw_circle, "Draw circle").changed() {
                commands.push(PanelCommand::SetDrawCircle(draw_circle));
            }

            let mut draw_points = controller.draw_points();
            if ui.checkbox(&mut draw_points, "Draw points").changed() {
                commands.push(PanelCommand::SetDrawPoints(draw_points));
            }

            ui.horizontal(|ui| {
                let mut invert_x = controller.invert_x();
                if ui.checkbox(&mut invert_x, "Invert X").changed() {
                    commands.push(PanelCommand::SetInvertX(invert_x));
                }

                let mut invert_y = controller.invert_y();
                if ui.checkbox(&mut invert_y, "Invert Y").changed() {
                    commands.push(PanelCommand::SetInvertY(invert_y));
                }
            });

            let mut dark_mode = controller.dark_mode();
            if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                commands.push(PanelCommand::SetDarkMode(dark_mode));
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    commands.push(PanelCommand::Reset {
                        include_viewport: false,
                    });
                }
                if ui.button("Reset view").clicked() {
                    commands.push(PanelCommand::ResetViewport);
                }
                if ui.button("Reset all").clicked() {
                    commands.push(PanelCommand::Reset {
                        include_viewport: true,
                    });
                }
            });

            ui.label(format!("Scale: {:.2}", controller.scale()));
            if let Some(drag) = controller.drag() {
                ui.label(format!("Drag: {:.0}, {:.0}", drag.x, drag.y));
            }
        });
}
