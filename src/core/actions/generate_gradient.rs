use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandart::colour_map::nudge_unit_fraction;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientColourMap {
    left: Colour,
    right: Colour,
    threshold: f64,
}

impl GradientColourMap {
    #[must_use]
    pub fn new(left: Colour, right: Colour, threshold: f64) -> Self {
        Self {
            left,
            right,
            threshold: nudge_unit_fraction(threshold),
        }
    }
}

impl ColourMap<f64> for GradientColourMap {
    fn map(&self, t: f64) -> Option<Colour> {
        if t <= self.threshold {
            return Some(self.left);
        }

        let t = (t - self.threshold) / (1.0 - self.threshold);

        Some(self.left.lerp(self.right, t))
    }

    fn display_name(&self) -> &str {
        "Gradient"
    }
}

/// Left-to-right blend from `left` to `right`, identical on every row.
pub fn generate_gradient(
    left: Colour,
    right: Colour,
    pixel_rect: PixelRect,
    threshold: f64,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let width = pixel_rect.width();
    let last_column = f64::from(width.saturating_sub(1));
    let row: Vec<f64> = (0..width)
        .map(|u| {
            if last_column == 0.0 {
                0.0
            } else {
                f64::from(u) / last_column
            }
        })
        .collect();

    let input: Vec<f64> = row
        .iter()
        .copied()
        .cycle()
        .take(pixel_rect.size() as usize)
        .collect();

    generate_pixel_buffer(&input, &GradientColourMap::new(left, right, threshold), pixel_rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    const GREEN: Colour = Colour::new(0, 255, 0);
    const RED: Colour = Colour::new(255, 0, 0);

    #[test]
    fn test_gradient_endpoints_and_midpoint() {
        let buffer = generate_gradient(GREEN, RED, PixelRect::new(3, 2).unwrap(), 0.0).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), [0, 255, 0, 255]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }).unwrap(), [128, 128, 0, 255]);
        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }).unwrap(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_rows_are_identical() {
        let buffer = generate_gradient(GREEN, RED, PixelRect::new(7, 4).unwrap(), 0.3).unwrap();
        let rows: Vec<&[u8]> = buffer.buffer().chunks_exact(7 * 4).collect();

        assert!(rows.iter().all(|row| *row == rows[0]));
    }

    #[test]
    fn test_threshold_holds_left_colour() {
        let buffer = generate_gradient(GREEN, RED, PixelRect::new(5, 1).unwrap(), 0.5).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }).unwrap(), [0, 255, 0, 255]);
        assert_eq!(buffer.pixel(Point { x: 3, y: 0 }).unwrap(), [128, 128, 0, 255]);
        assert_eq!(buffer.pixel(Point { x: 4, y: 0 }).unwrap(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_single_column_is_left_colour() {
        let buffer = generate_gradient(GREEN, RED, PixelRect::new(1, 3).unwrap(), 0.0).unwrap();

        assert!(
            buffer
                .buffer()
                .chunks_exact(4)
                .all(|pixel| pixel == [0, 255, 0, 255])
        );
    }

    #[test]
    fn test_threshold_of_one_is_solid_left() {
        let buffer = generate_gradient(GREEN, RED, PixelRect::new(4, 1).unwrap(), 1.0).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }).unwrap(), [0, 255, 0, 255]);
    }
}
