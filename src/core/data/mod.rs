pub mod colour;
pub mod frame_buffer;
pub mod surface;
pub mod vec2;
