use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use image::RgbaImage;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} pixel rect",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// RGBA8 raster, row-major with the origin at the top-left pixel.
///
/// New buffers start fully white and opaque so that any pixel left untouched
/// by a colour map is still deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![255; total_bytes],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_offset(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<[u8; 4], PixelBufferError> {
        let index = self.byte_offset(pixel)?;
        let mut rgba = [0; BYTES_PER_PIXEL];

        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);

        Ok(rgba)
    }

    /// Packed RGB triples, dropping alpha.
    #[must_use]
    pub fn rgb_bytes(&self) -> Vec<u8> {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
            .collect()
    }

    #[must_use]
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(
            self.pixel_rect.width(),
            self.pixel_rect.height(),
            self.buffer.clone(),
        )
    }

    fn byte_offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        self.pixel_rect
            .index_of(pixel)
            .map(|index| index * BYTES_PER_PIXEL)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })
    }
}
