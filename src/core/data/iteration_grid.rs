use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum IterationGridError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for IterationGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "iteration grid expects {} values but received {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for IterationGridError {}

/// Continuous iteration values for one full recompute.
///
/// Cells are row-major; row `v = 0` is the lowest row of the plane, which the
/// rasterizer places at the bottom of the image. Every cell is either a
/// smoothed value in `[0, max_iterations)` or exactly `max_iterations` for a
/// point that never escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationGrid {
    pixel_rect: PixelRect,
    max_iterations: u32,
    min_iteration_delta: f64,
    values: Vec<f64>,
}

impl IterationGrid {
    pub(crate) fn from_values(
        pixel_rect: PixelRect,
        max_iterations: u32,
        min_iteration_delta: f64,
        values: Vec<f64>,
    ) -> Result<Self, IterationGridError> {
        let expected = pixel_rect.size() as usize;

        if values.len() != expected {
            return Err(IterationGridError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            pixel_rect,
            max_iterations,
            min_iteration_delta,
            values,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn min_iteration_delta(&self) -> f64 {
        self.min_iteration_delta
    }

    /// Nudges the colouring anchor without re-running the iteration.
    pub fn set_min_iteration_delta(&mut self, min_iteration_delta: f64) {
        self.min_iteration_delta = min_iteration_delta;
    }

    #[must_use]
    pub fn value(&self, point: Point) -> Option<f64> {
        self.pixel_rect
            .index_of(point)
            .map(|index| self.values[index])
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest value on the four outer edges of the grid.
    #[must_use]
    pub fn edge_minimum(&self) -> f64 {
        let width = self.pixel_rect.width();
        let height = self.pixel_rect.height();
        let value_at = |x: u32, y: u32| self.values[(y * width + x) as usize];

        let rows = (0..width).flat_map(|x| [value_at(x, 0), value_at(x, height - 1)]);
        let columns = (0..height).flat_map(|y| [value_at(0, y), value_at(width - 1, y)]);

        rows.chain(columns).fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x2() -> IterationGrid {
        IterationGrid::from_values(
            PixelRect::new(3, 2).unwrap(),
            10,
            0.0,
            vec![1.0, 2.0, 10.0, 4.0, 5.0, 6.0],
        )
        .unwrap()
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let result = IterationGrid::from_values(pixel_rect, 10, 0.0, vec![0.0; 3]);

        assert_eq!(
            result,
            Err(IterationGridError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_value_lookup_is_row_major() {
        let grid = grid_3x2();

        assert_eq!(grid.value(Point { x: 0, y: 0 }), Some(1.0));
        assert_eq!(grid.value(Point { x: 2, y: 1 }), Some(6.0));
        assert_eq!(grid.value(Point { x: 3, y: 0 }), None);
    }

    #[test]
    fn test_edge_minimum_ignores_interior() {
        let values = vec![
            9.0, 9.0, 9.0, //
            9.0, 0.5, 7.0, //
            9.0, 3.0, 9.0,
        ];
        let pixel_rect = PixelRect::new(3, 3).unwrap();
        let grid = IterationGrid::from_values(pixel_rect, 10, 0.0, values).unwrap();

        assert_eq!(grid.edge_minimum(), 3.0);
    }

    #[test]
    fn test_edge_minimum_of_single_cell() {
        let pixel_rect = PixelRect::new(1, 1).unwrap();
        let grid = IterationGrid::from_values(pixel_rect, 10, 0.0, vec![4.0]).unwrap();

        assert_eq!(grid.edge_minimum(), 4.0);
    }

    #[test]
    fn test_set_min_iteration_delta_keeps_values() {
        let mut grid = grid_3x2();
        let values = grid.values().to_vec();

        grid.set_min_iteration_delta(2.5);

        assert_eq!(grid.min_iteration_delta(), 2.5);
        assert_eq!(grid.values(), values.as_slice());
    }
}
