use crate::core::fractals::mandart::colour_params::ColourParams;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum BlockBoundaryError {
    NotMonotonic { index: usize, lower: f64, upper: f64 },
}

impl fmt::Display for BlockBoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMonotonic {
                index,
                lower,
                upper,
            } => write!(
                f,
                "block boundary {} ({}) is below boundary {} ({})",
                index + 1,
                upper,
                index,
                lower
            ),
        }
    }
}

impl Error for BlockBoundaryError {}

/// `n_blocks + 1` edges measured from the colouring anchor.
///
/// `relative(0)` is 0 and `relative(n_blocks)` is `max_iterations - anchor`.
/// Far spacing sets the linear part, near spacing the power-law part that
/// crowds blocks towards the escape boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockBoundaries {
    anchor: f64,
    bounds: Vec<f64>,
}

impl BlockBoundaries {
    #[must_use]
    pub fn new(colour: &ColourParams, max_iterations: u32, anchor: f64) -> Self {
        let n_blocks = colour.n_blocks() as usize;
        let n = f64::from(colour.n_blocks());
        let far = colour.spacing_far();
        let near = colour.spacing_near();
        let span = f64::from(max_iterations) - anchor;
        let spacing_mid = (span - n * far) / n.powf(near);

        let mut bounds: Vec<f64> = (0..=n_blocks)
            .map(|i| {
                let i = i as f64;
                far * i + spacing_mid * i.powf(near)
            })
            .collect();

        bounds[0] = 0.0;
        bounds[n_blocks] = span;

        Self { anchor, bounds }
    }

    #[must_use]
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    #[must_use]
    pub fn n_blocks(&self) -> usize {
        self.bounds.len() - 1
    }

    #[must_use]
    pub fn relative(&self, index: usize) -> f64 {
        self.bounds[index]
    }

    /// Block `b` with `relative(b) <= h < relative(b + 1)`, first match wins.
    #[must_use]
    pub fn find_block(&self, h: f64) -> Option<usize> {
        self.bounds
            .windows(2)
            .position(|pair| h >= pair[0] && h < pair[1])
    }

    pub fn ensure_non_decreasing(&self) -> Result<(), BlockBoundaryError> {
        let descending = |pair: &[f64]| {
            matches!(pair[1].partial_cmp(&pair[0]), None | Some(Ordering::Less))
        };

        match self.bounds.windows(2).position(descending) {
            Some(index) => Err(BlockBoundaryError::NotMonotonic {
                index,
                lower: self.bounds[index],
                upper: self.bounds[index + 1],
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn colour(n_blocks: u32, far: f64, near: f64) -> ColourParams {
        ColourParams::new(n_blocks, far, near, 0.0, Colour::BLACK).unwrap()
    }

    #[test]
    fn test_endpoints_span_anchor_to_max() {
        let boundaries = BlockBoundaries::new(&colour(60, 5.0, 15.0), 10_000, 3.25);

        assert_eq!(boundaries.n_blocks(), 60);
        assert_eq!(boundaries.relative(0), 0.0);
        assert_eq!(boundaries.relative(60), 10_000.0 - 3.25);
        assert_eq!(boundaries.anchor() + boundaries.relative(60), 10_000.0);
    }

    #[test]
    fn test_formula_for_small_table() {
        // span 100, mid = (100 - 2 * 10) / 2^2 = 20
        let boundaries = BlockBoundaries::new(&colour(2, 10.0, 2.0), 100, 0.0);

        let bounds: Vec<f64> = (0..=2).map(|i| boundaries.relative(i)).collect();

        assert_eq!(bounds, vec![0.0, 30.0, 100.0]);
    }

    #[test]
    fn test_valid_inputs_are_non_decreasing() {
        let cases = [(4, 5.0, 15.0), (60, 5.0, 15.0), (10, 0.0, 1.0), (1, 3.0, 2.0)];

        for (n_blocks, far, near) in cases {
            let boundaries = BlockBoundaries::new(&colour(n_blocks, far, near), 200, 5.28);

            assert_eq!(boundaries.ensure_non_decreasing(), Ok(()));
        }
    }

    #[test]
    fn test_far_spacing_beyond_span_is_reported() {
        // far spacing alone reaches 20, past the span of 10
        let boundaries = BlockBoundaries::new(&colour(4, 5.0, 15.0), 10, 0.0);

        assert!(matches!(
            boundaries.ensure_non_decreasing(),
            Err(BlockBoundaryError::NotMonotonic { index: 3, .. })
        ));
    }

    #[test]
    fn test_find_block_uses_half_open_ranges() {
        let boundaries = BlockBoundaries::new(&colour(2, 10.0, 2.0), 100, 0.0);

        assert_eq!(boundaries.find_block(0.0), Some(0));
        assert_eq!(boundaries.find_block(29.999), Some(0));
        assert_eq!(boundaries.find_block(30.0), Some(1));
        assert_eq!(boundaries.find_block(100.0), None);
        assert_eq!(boundaries.find_block(-0.5), None);
        assert_eq!(boundaries.find_block(f64::NAN), None);
    }
}
