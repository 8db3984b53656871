use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is computed into its own `Vec` and the rows are concatenated in
/// order, so the output matches [`generate_fractal`] exactly.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = pixel_rect.width();

    let rows: Vec<Vec<Alg::Success>> = (0..pixel_rect.height())
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.x) * 1000 + u64::from(pixel.y))
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};
        let pixel_rect = PixelRect::new(11, 9).unwrap();

        let sequential_results = generate_fractal(pixel_rect, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(pixel_rect, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {};
        let pixel_rect = PixelRect::new(4, 5).unwrap();

        let result = generate_fractal_parallel_rayon(pixel_rect, &algorithm);

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_single_row() {
        let algorithm = StubSuccessAlgorithm {};
        let pixel_rect = PixelRect::new(600, 1).unwrap();

        let sequential_results = generate_fractal(pixel_rect, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(pixel_rect, &algorithm).unwrap();

        assert_eq!(rayon_results.len(), 600);
        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_large_rect() {
        let algorithm = StubSuccessAlgorithm {};
        let pixel_rect = PixelRect::new(101, 101).unwrap();

        let sequential_results = generate_fractal(pixel_rect, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(pixel_rect, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }
}
