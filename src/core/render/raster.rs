use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::vec2::Vec2;
use crate::core::render::draw_command::DrawCommand;

/// Paints a command sequence into the buffer. Geometry outside the frame is
/// clipped pixel by pixel.
pub fn rasterize(buffer: &mut FrameBuffer, commands: impl Iterator<Item = DrawCommand>) {
    for command in commands {
        match command {
            DrawCommand::Chord { from, to, colour } => draw_line(buffer, from, to, colour),
            DrawCommand::Marker { at, radius, colour } => draw_disc(buffer, at, radius, colour),
            DrawCommand::CircleOutline {
                centre,
                radius,
                colour,
            } => draw_outline(buffer, centre, radius, colour),
        }
    }
}

/// Bresenham over rounded endpoints.
fn draw_line(buffer: &mut FrameBuffer, from: Vec2, to: Vec2, colour: Colour) {
    let (Some(x0), Some(y0), Some(x1), Some(y1)) = (
        to_pixel(from.x),
        to_pixel(from.y),
        to_pixel(to.x),
        to_pixel(to.y),
    ) else {
        return;
    };

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let mut error = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        buffer.plot(x, y, colour);
        if x == x1 && y == y1 {
            break;
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

fn draw_disc(buffer: &mut FrameBuffer, at: Vec2, radius: f64, colour: Colour) {
    let (Some(cx), Some(cy)) = (to_pixel(at.x), to_pixel(at.y)) else {
        return;
    };

    let reach = radius.ceil() as i32;
    let radius_squared = radius * radius;

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if f64::from(dx * dx + dy * dy) <= radius_squared {
                buffer.plot(cx + dx, cy + dy, colour);
            }
        }
    }
}

/// Segmented outline; enough segments that adjacent samples land on
/// neighbouring pixels.
fn draw_outline(buffer: &mut FrameBuffer, centre: Vec2, radius: f64, colour: Colour) {
    if !radius.is_finite() || radius <= 0.0 {
        return;
    }

    let segments = ((radius * std::f64::consts::TAU).ceil() as usize).max(16);
    let mut previous = centre + Vec2::from_angle(0.0).scale(radius);

    for segment in 1..=segments {
        let angle = segment as f64 / segments as f64 * std::f64::consts::TAU;
        let next = centre + Vec2::from_angle(angle).scale(radius);
        draw_line(buffer, previous, next, colour);
        previous = next;
    }
}

/// Far beyond any real canvas, small enough that the Bresenham error term
/// cannot overflow.
const MAX_PIXEL_COORD: f64 = 16_777_216.0;

/// Rounds to a pixel coordinate; rejects values a Bresenham walk cannot
/// represent.
fn to_pixel(value: f64) -> Option<i32> {
    let rounded = value.round();
    if rounded.is_finite() && rounded.abs() < MAX_PIXEL_COORD {
        Some(rounded as i32)
    } else {
        None
    }
}
