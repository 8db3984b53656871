use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::f64::consts::PI;
use std::fmt;

/// Applied to `theta` before rotating a pixel offset into the plane.
pub const ROTATION_SIGN: f64 = -1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel rect",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneError {}

/// Where a `PixelRect` sits on the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneView {
    pub centre: Complex,
    /// Pixels per plane unit.
    pub scale: f64,
    /// Degrees.
    pub theta: f64,
}

impl PlaneView {
    #[must_use]
    pub fn rotation_radians(&self) -> f64 {
        ROTATION_SIGN * self.theta * PI / 180.0
    }
}

/// Unrotated offset of a grid cell from the image centre, in plane units.
/// `v` grows upwards. The centre column and row use integer halving.
#[must_use]
pub fn pixel_offset(pixel: Point, pixel_rect: PixelRect, scale: f64) -> Complex {
    let half_width = f64::from(pixel_rect.width() / 2);
    let half_height = f64::from(pixel_rect.height() / 2);

    Complex::new(
        (f64::from(pixel.x) - half_width) / scale,
        (f64::from(pixel.y) - half_height) / scale,
    )
}

pub fn pixel_to_plane(
    pixel: Point,
    pixel_rect: PixelRect,
    view: PlaneView,
) -> Result<Complex, PixelToPlaneError> {
    if !pixel_rect.contains_point(pixel) {
        return Err(PixelToPlaneError::PointOutsideRect { point: pixel, pixel_rect });
    }

    let offset = pixel_offset(pixel, pixel_rect, view.scale);

    Ok(view.centre + offset.rotated(view.rotation_radians()))
}
