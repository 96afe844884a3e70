use std::error::Error;
use std::path::Path;
use std::time::Instant;

use crate::controllers::panel::PanelController;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::surface::SurfaceSize;
use crate::core::render::raster::rasterize;
use crate::core::render::style::PatternColourMode;
use crate::presenters::file::ppm::write_ppm;

#[derive(Debug, Clone, Copy)]
pub struct SnapshotOptions {
    pub canvas: SurfaceSize,
    pub times_factor: f64,
    pub points_count: u32,
    pub colour_mode: PatternColourMode,
    pub dark_mode: bool,
    pub draw_circle: bool,
    pub draw_points: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            canvas: SurfaceSize::new(800, 600),
            times_factor: 51.0,
            points_count: 200,
            colour_mode: PatternColourMode::Pattern,
            dark_mode: true,
            draw_circle: false,
            draw_points: false,
        }
    }
}

/// Renders one frame of the rose into a fresh buffer.
#[must_use]
pub fn render_frame(options: SnapshotOptions) -> FrameBuffer {
    let mut controller = PanelController::new();
    controller.set_canvas_size(options.canvas);
    controller.set_times_factor(options.times_factor);
    controller.set_points_count(options.points_count);
    controller.set_colour_mode(options.colour_mode);
    controller.set_dark_mode(options.dark_mode);
    controller.set_draw_circle(options.draw_circle);
    controller.set_draw_points(options.draw_points);

    let mut frame = FrameBuffer::new(options.canvas, controller.style().palette.bg);
    rasterize(&mut frame, controller.frame_commands(options.canvas));
    frame
}

/// One-shot controller behind the CLI: render a frame, write it as PPM.
pub fn render_snapshot(
    options: SnapshotOptions,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let filepath = filepath.as_ref();

    tracing::info!(
        width = options.canvas.width,
        height = options.canvas.height,
        factor = options.times_factor,
        points = options.points_count,
        "rendering rose snapshot"
    );

    let start = Instant::now();
    let frame = render_frame(options);
    tracing::info!(duration = ?start.elapsed(), "frame rasterized");

    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_ppm(&frame, filepath)?;
    tracing::info!(path = %filepath.display(), "snapshot saved");

    Ok(())
}
