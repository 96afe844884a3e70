use std::f64::consts::{PI, TAU};

use crate::core::data::surface::SurfaceSize;
use crate::core::data::vec2::Vec2;
use crate::core::render::draw_command::DrawCommand;
use crate::core::render::style::RenderStyle;

pub const CIRCLE_RADIUS_DIVISOR: f64 = 2.8;

/// Marker radius in screen units; deliberately not affected by the scale.
pub const MARKER_RADIUS: f64 = 1.4;

/// Everything the renderer needs for one frame. Plain data; building one is
/// free and carries no obligation to draw.
#[derive(Debug, Clone, Copy)]
pub struct FrameParams<'a> {
    pub canvas: SurfaceSize,
    pub points_count: u32,
    pub times_factor: f64,
    pub scale: f64,
    pub drag: Option<Vec2>,
    pub invert_x: bool,
    pub invert_y: bool,
    pub draw_circle: bool,
    pub draw_points: bool,
    pub style: &'a RenderStyle,
}

#[must_use]
pub fn circle_radius(canvas: SurfaceSize) -> f64 {
    f64::from(canvas.min_dimension()) / CIRCLE_RADIUS_DIVISOR
}

/// Produces the frame's draw commands as a lazy, finite sequence. The
/// function is pure: call it again and an identical fresh sequence comes
/// back.
pub fn frame_commands<'a>(params: FrameParams<'a>) -> impl Iterator<Item = DrawCommand> + 'a {
    let radius = circle_radius(params.canvas);
    let count = params.points_count;
    let factor = params.times_factor;

    let outline = params.draw_circle.then(|| DrawCommand::CircleOutline {
        centre: centre(&params),
        radius: radius * params.scale,
        colour: params.style.circle_colour(factor),
    });

    let per_point = (0..count).flat_map(move |index| {
        let at = point_at(&params, f64::from(index), radius);

        let marker = params.draw_points.then(|| DrawCommand::Marker {
            at,
            radius: MARKER_RADIUS,
            colour: params.style.marker_colour(),
        });

        let target = (f64::from(index) * factor) % f64::from(count);
        let chord = (f64::from(index) != target).then(|| DrawCommand::Chord {
            from: at,
            to: point_at(&params, target, radius),
            colour: params.style.chord_colour(index, count, factor),
        });

        marker.into_iter().chain(chord)
    });

    outline.into_iter().chain(per_point)
}

fn centre(params: &FrameParams<'_>) -> Vec2 {
    let drag = params.drag.unwrap_or(Vec2::ZERO);
    Vec2::new(
        f64::from(params.canvas.width) / 2.0 + drag.x,
        f64::from(params.canvas.height) / 2.0 + drag.y,
    )
}

/// Point `index` (fractional indices are legal chord targets) on the rose
/// circle, in screen space.
fn point_at(params: &FrameParams<'_>, index: f64, radius: f64) -> Vec2 {
    let unit_theta = TAU / f64::from(params.points_count);
    let on_circle = Vec2::from_angle(index * unit_theta + PI).scale(radius);

    let x_scale = if params.invert_x { -1.0 } else { 1.0 } * params.scale;
    let y_scale = if params.invert_y { -1.0 } else { 1.0 } * params.scale;

    centre(params) + Vec2::new(on_circle.x * x_scale, on_circle.y * y_scale)
}
