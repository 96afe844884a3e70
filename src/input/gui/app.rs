use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{ModifiersState, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use crate::controllers::panel::{PanelCommand, PanelController, PanelEvent, PanelListener};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::vec2::Vec2;
use crate::core::render::raster::rasterize;
use crate::core::viewport::SCALE_WHEEL_ROTATION_MULTIPLIER;
use crate::input::gui::{overlay, panel_input};
use crate::presenters::pixels::PixelsPresenter;

/// Listener that turns the controller's redraw notifications into a flag
/// the event loop drains once per cycle, coalescing bursts into one repaint.
struct RedrawFlag {
    flag: Rc<Cell<bool>>,
}

impl PanelListener for RedrawFlag {
    fn on_panel_event(&self, event: &PanelEvent) {
        if matches!(event, PanelEvent::RedrawNeeded) {
            self.flag.set(true);
        }
    }
}

pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Times Table Rose")
            .with_inner_size(LogicalSize::new(900.0, 700.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let mut app = GuiApp::new(window, &event_loop);

    event_loop
        .run(|event, elwt| {
            // Animate only while playing; otherwise sleep until input.
            elwt.set_control_flow(if app.controller.is_playing() {
                ControlFlow::Poll
            } else {
                ControlFlow::Wait
            });

            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward the event to egui first
                    let response = app.egui_state.on_window_event(window, event);
                    if response.repaint {
                        app.redraw_needed.set(true);
                    }

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::RedrawRequested => {
                            if let Err(error) = app.redraw(window) {
                                tracing::error!(%error, "render failed");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                        }
                        WindowEvent::ModifiersChanged(modifiers) => {
                            app.modifiers = modifiers.state();
                        }
                        WindowEvent::KeyboardInput { event, .. } if !response.consumed => {
                            if event.state == ElementState::Pressed {
                                if let PhysicalKey::Code(key) = event.physical_key {
                                    if let Some(command) =
                                        panel_input::command_for_key(key, app.modifiers)
                                    {
                                        app.controller.dispatch(command);
                                    }
                                }
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            app.cursor = Vec2::new(position.x, position.y);
                            app.drag_with_mouse();
                        }
                        WindowEvent::MouseInput {
                            state,
                            button: MouseButton::Left,
                            ..
                        } => match state {
                            ElementState::Pressed if !response.consumed => app.begin_mouse_drag(),
                            ElementState::Released => app.end_mouse_drag(),
                            _ => {}
                        },
                        WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                            app.scale_with_wheel(*delta);
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if app.controller.is_playing() {
                        app.controller.tick(app.now_ms());
                    }

                    if app.redraw_needed.replace(false) {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}

struct MouseDragAnchor {
    cursor: Vec2,
    drag: Option<Vec2>,
}

struct GuiApp {
    controller: PanelController,
    presenter: PixelsPresenter,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    modifiers: ModifiersState,
    cursor: Vec2,
    mouse_drag_anchor: Option<MouseDragAnchor>,
    redraw_needed: Rc<Cell<bool>>,
    started: Instant,
    width: u32,
    height: u32,
}

impl GuiApp {
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Self {
        let size = window.inner_size();
        let egui_ctx = egui::Context::default();

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        let mut controller = PanelController::new();
        controller.set_canvas_size(SurfaceSize::new(size.width, size.height));

        let redraw_needed = Rc::new(Cell::new(true));
        controller.add_listener(Rc::new(RedrawFlag {
            flag: redraw_needed.clone(),
        }));

        Self {
            controller,
            presenter: PixelsPresenter::new(window),
            egui_ctx,
            egui_state,
            modifiers: ModifiersState::empty(),
            cursor: Vec2::ZERO,
            mouse_drag_anchor: None,
            redraw_needed,
            started: Instant::now(),
            width: size.width,
            height: size.height,
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;
        self.presenter.resize(width, height);
        self.controller
            .set_canvas_size(SurfaceSize::new(width, height));
        self.redraw_needed.set(true);
    }

    fn begin_mouse_drag(&mut self) {
        self.mouse_drag_anchor = Some(MouseDragAnchor {
            cursor: self.cursor,
            drag: self.controller.drag(),
        });
    }

    fn end_mouse_drag(&mut self) {
        self.mouse_drag_anchor = None;
    }

    fn drag_with_mouse(&mut self) {
        if let Some(anchor) = &self.mouse_drag_anchor {
            let delta = self.cursor - anchor.cursor;
            let target = anchor.drag.unwrap_or(Vec2::ZERO) + delta;
            self.controller.set_drag(Some(target));
        }
    }

    fn scale_with_wheel(&mut self, delta: MouseScrollDelta) {
        let rotation = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y / 20.0,
        };

        self.controller.dispatch(PanelCommand::IncreaseScale(
            rotation * SCALE_WHEEL_ROTATION_MULTIPLIER,
        ));
    }

    fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let canvas = SurfaceSize::new(self.width, self.height);
        if canvas.is_empty() {
            return Ok(());
        }

        let mut frame = FrameBuffer::new(canvas, self.controller.style().palette.bg);
        rasterize(&mut frame, self.controller.frame_commands(canvas));
        self.presenter.blit(&frame);

        let raw_input = self.egui_state.take_egui_input(window);
        let mut commands = Vec::new();
        let controller = &self.controller;
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            overlay::draw(ctx, controller, &mut commands);
        });

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_needed.set(true);
        }

        self.presenter.render(egui_output, &self.egui_ctx)?;

        // Apply what the overlay asked for after the frame is out the door.
        for command in commands {
            self.controller.dispatch(command);
        }

        Ok(())
    }
}
