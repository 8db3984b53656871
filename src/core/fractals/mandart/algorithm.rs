use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandart::power::EscapeRecurrence;
use crate::core::fractals::mandart::shape_params::ShapeParams;
use crate::core::util::pixel_to_plane::{PixelToPlaneError, PlaneView, pixel_to_plane};

/// Raw outcome for one pixel before smoothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeSample {
    pub iterations: u32,
    /// `|z|²` when the loop stopped.
    pub r_sq: f64,
}

#[derive(Debug)]
pub struct EscapeTimeAlgorithm<R: EscapeRecurrence> {
    pixel_rect: PixelRect,
    view: PlaneView,
    max_iterations: u32,
    r_sq_limit: f64,
    recurrence: R,
}

impl<R: EscapeRecurrence> EscapeTimeAlgorithm<R> {
    #[must_use]
    pub fn new(shape: &ShapeParams, recurrence: R) -> Self {
        Self {
            pixel_rect: shape.pixel_rect(),
            view: shape.view(),
            max_iterations: shape.max_iterations(),
            r_sq_limit: shape.r_sq_limit(),
            recurrence,
        }
    }
}

impl<R: EscapeRecurrence> FractalAlgorithm for EscapeTimeAlgorithm<R> {
    type Success = EscapeSample;
    type Failure = PixelToPlaneError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_plane(pixel, self.pixel_rect, self.view)?;
        let mut z = c;
        let mut r_sq = z.magnitude_squared();

        if self.recurrence.excluded(c) {
            return Ok(EscapeSample {
                iterations: self.max_iterations,
                r_sq,
            });
        }

        let mut iterations = 0;

        for i in 1..=self.max_iterations {
            if r_sq >= self.r_sq_limit {
                break;
            }

            z = self.recurrence.step(z, c);
            r_sq = z.magnitude_squared();
            iterations = i;
        }

        Ok(EscapeSample { iterations, r_sq })
    }
}
