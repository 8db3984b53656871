use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel evaluator driven by the fractal generators.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
