use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::fractals::mandart::picture_definition::PictureDefinition;
use crate::core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum NavigationError {
    Size(PixelRectError),
    Pixel(PixelToPlaneError),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(err) => write!(f, "cannot navigate: {}", err),
            Self::Pixel(err) => write!(f, "cannot navigate: {}", err),
        }
    }
}

impl Error for NavigationError {}

/// Moves the centre to whatever `pixel` shows. `pixel` is in image
/// coordinates, row 0 at the top.
pub fn recentre_on_pixel(
    definition: &mut PictureDefinition,
    pixel: Point,
) -> Result<Complex, NavigationError> {
    let pixel_rect = PixelRect::new(definition.image_width, definition.image_height)
        .map_err(NavigationError::Size)?;

    if !pixel_rect.contains_point(pixel) {
        return Err(NavigationError::Pixel(PixelToPlaneError::PointOutsideRect {
            point: pixel,
            pixel_rect,
        }));
    }

    let grid_cell = Point {
        x: pixel.x,
        y: pixel_rect.height() - 1 - pixel.y,
    };
    let centre = pixel_to_plane(grid_cell, pixel_rect, definition.view())
        .map_err(NavigationError::Pixel)?;

    definition.x_center = centre.real;
    definition.y_center = centre.imag;

    Ok(centre)
}

/// Moves the centre so the picture follows a drag from `start` to `end`,
/// both in image coordinates with `y` growing downwards.
pub fn recentre_after_drag(
    definition: &mut PictureDefinition,
    start: (f64, f64),
    end: (f64, f64),
) -> Complex {
    let view = definition.view();
    let moved = Complex::new(
        (start.0 - end.0) / view.scale,
        (end.1 - start.1) / view.scale,
    );
    let centre = view.centre + moved.rotated(view.rotation_radians());

    definition.x_center = centre.real;
    definition.y_center = centre.imag;

    centre
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn definition(theta: f64) -> PictureDefinition {
        PictureDefinition {
            image_width: 200,
            image_height: 100,
            scale: 100.0,
            theta,
            x_center: -0.5,
            y_center: 0.25,
            ..PictureDefinition::default()
        }
    }

    fn assert_close(actual: Complex, real: f64, imag: f64) {
        assert!(
            (actual.real - real).abs() < EPSILON && (actual.imag - imag).abs() < EPSILON,
            "expected ({}, {}), got {:?}",
            real,
            imag,
            actual
        );
    }

    #[test]
    fn test_tap_on_centre_keeps_centre() {
        let mut definition = definition(0.0);

        // grid row 50 is image row 100 - 1 - 50
        let centre = recentre_on_pixel(&mut definition, Point { x: 100, y: 49 }).unwrap();

        assert_close(centre, -0.5, 0.25);
    }

    #[test]
    fn test_tap_above_centre_moves_centre_up() {
        let mut definition = definition(0.0);

        let centre = recentre_on_pixel(&mut definition, Point { x: 150, y: 19 }).unwrap();

        assert_close(centre, 0.0, 0.55);
        assert_eq!((definition.x_center, definition.y_center), (centre.real, centre.imag));
    }

    #[test]
    fn test_tap_outside_image_fails() {
        let mut definition = definition(0.0);

        assert!(matches!(
            recentre_on_pixel(&mut definition, Point { x: 200, y: 0 }),
            Err(NavigationError::Pixel(_))
        ));
        assert_eq!(definition.x_center, -0.5);
    }

    #[test]
    fn test_drag_moves_centre_against_drag() {
        let mut definition = definition(0.0);

        let centre = recentre_after_drag(&mut definition, (100.0, 50.0), (110.0, 70.0));

        assert_close(centre, -0.6, 0.45);
    }

    #[test]
    fn test_drag_respects_rotation() {
        let mut definition = definition(90.0);

        let centre = recentre_after_drag(&mut definition, (100.0, 50.0), (90.0, 50.0));

        // a leftward drag of 0.1 plane units, rotated by -90 degrees
        assert_close(centre, -0.5, 0.15);
    }
}
