use std::io::Write;
use std::path::Path;

use crate::core::data::frame_buffer::FrameBuffer;

/// Writes the frame as a binary PPM image.
pub fn write_ppm(buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let size = buffer.size();
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", size.width, size.height)?;
    writeln!(file, "255")?;
    file.write_all(buffer.buffer())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_ppm;
    use crate::core::data::colour::Colour;
    use crate::core::data::frame_buffer::FrameBuffer;
    use crate::core::data::surface::SurfaceSize;

    #[test]
    fn test_written_file_has_header_and_payload() {
        let buffer = FrameBuffer::new(SurfaceSize::new(4, 3), Colour::new(7, 8, 9));
        let path = std::env::temp_dir().join("rose_explorer_ppm_test.ppm");

        write_ppm(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        let header = b"P6\n4 3\n255\n";
        assert!(written.starts_with(header));
        assert_eq!(written.len(), header.len() + 4 * 3 * 3);
        assert_eq!(&written[header.len()..header.len() + 3], &[7, 8, 9]);

        std::fs::remove_file(&path).unwrap();
    }
}
