use crate::core::data::iteration_grid::IterationGrid;
use crate::core::fractals::mandart::algorithm::EscapeSample;

/// Turns integer escape counts into continuous values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Smoothing {
    max_iterations: u32,
    ln_ln_limit: f64,
    ln_ln_span: f64,
}

impl Smoothing {
    #[must_use]
    pub fn new(r_sq_limit: f64, power: f64, max_iterations: u32) -> Self {
        let r_sq_max = (r_sq_limit.powf(power / 2.0) + 2.0).powi(2);
        let ln_ln_limit = r_sq_limit.ln().ln();

        Self {
            max_iterations,
            ln_ln_limit,
            ln_ln_span: r_sq_max.ln().ln() - ln_ln_limit,
        }
    }

    /// Result lies in `[0, iterations]` for escaped samples and is exactly
    /// `max_iterations` otherwise.
    #[must_use]
    pub fn continuous_value(&self, sample: EscapeSample) -> f64 {
        let iterations = f64::from(sample.iterations);

        if sample.iterations >= self.max_iterations {
            return f64::from(self.max_iterations);
        }

        let smoothed = iterations - (sample.r_sq.ln().ln() - self.ln_ln_limit) / self.ln_ln_span;

        smoothed.max(0.0).min(iterations)
    }
}

/// Lower anchor for colouring: the edge minimum less the grid's delta.
#[must_use]
pub fn global_min_iteration(grid: &IterationGrid) -> f64 {
    grid.edge_minimum() - grid.min_iteration_delta()
}
