use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;
use crate::core::data::surface::SurfaceSize;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub enum FrameBufferError {
    PixelOutOfBounds { x: i32, y: i32, size: SurfaceSize },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutOfBounds { x, y, size } => {
                write!(
                    f,
                    "Pixel ({}, {}) is outside the {}x{} frame",
                    x, y, size.width, size.height
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Row-major RGB byte buffer the rasterizer paints into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    size: SurfaceSize,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(size: SurfaceSize, background: Colour) -> Self {
        let pixels = size.width as usize * size.height as usize;
        let mut buffer = Vec::with_capacity(pixels * BYTES_PER_PIXEL);
        for _ in 0..pixels {
            buffer.extend_from_slice(&[background.r, background.g, background.b]);
        }

        Self { size, buffer }
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    /// Clipped write: coordinates outside the frame are ignored.
    pub fn plot(&mut self, x: i32, y: i32, colour: Colour) {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return;
        }

        let offset = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.buffer[offset] = colour.r;
        self.buffer[offset + 1] = colour.g;
        self.buffer[offset + 2] = colour.b;
    }

    /// Checked write for callers that must not silently clip.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) -> Result<(), FrameBufferError> {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return Err(FrameBufferError::PixelOutOfBounds {
                x,
                y,
                size: self.size,
            });
        }

        self.plot(x, y, colour);
        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }

        let offset = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some(Colour::new(
            self.buffer[offset],
            self.buffer[offset + 1],
            self.buffer[offset + 2],
        ))
    }

    /// Expands RGB into an RGBA destination (alpha forced opaque). The
    /// destination must hold exactly width * height RGBA pixels.
    pub fn copy_into_rgba(&self, dest: &mut [u8]) {
        let expected = self.size.width as usize * self.size.height as usize * 4;
        assert_eq!(
            dest.len(),
            expected,
            "RGBA destination length {} does not match expected {} for {}x{}",
            dest.len(),
            expected,
            self.size.width,
            self.size.height
        );

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dest.chunks_exact_mut(4))
        {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }
}
