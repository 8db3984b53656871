use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    InputSizeMismatch {
        pixel_rect_size: usize,
        input_size: usize,
    },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputSizeMismatch {
                pixel_rect_size,
                input_size,
            } => write!(
                f,
                "pixel rect holds {} pixels but {} values were supplied",
                pixel_rect_size, input_size
            ),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputSizeMismatch { .. } => None,
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps row-major grid values to colours in a fresh white buffer.
///
/// Grid row `v = 0` is the bottom of the picture, so it lands on buffer row
/// `height - 1`. Values the mapper declines stay white.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy,
    CMap: ColourMap<T>,
{
    let pixel_rect_size = pixel_rect.size() as usize;

    if input.len() != pixel_rect_size {
        return Err(GeneratePixelBufferError::InputSizeMismatch {
            pixel_rect_size,
            input_size: input.len(),
        });
    }

    let mut buffer = PixelBuffer::new(pixel_rect);
    let width = pixel_rect.width() as usize;
    let bottom_row = pixel_rect.height() - 1;
    let mut unmapped = 0usize;

    for (v, row) in input.chunks_exact(width).enumerate() {
        let y = bottom_row - v as u32;

        for (u, &value) in row.iter().enumerate() {
            match mapper.map(value) {
                Some(colour) => buffer.set_pixel(Point { x: u as u32, y }, colour)?,
                None => unmapped += 1,
            }
        }
    }

    if unmapped > 0 {
        log::warn!(
            "{}: {} of {} pixels fell outside every block and were left white",
            mapper.display_name(),
            unmapped,
            pixel_rect_size
        );
    }

    Ok(buffer)
}
