use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
use crate::core::data::palette::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandart::algorithm::{EscapeSample, EscapeTimeAlgorithm};
use crate::core::fractals::mandart::block_boundaries::BlockBoundaries;
use crate::core::fractals::mandart::colour_map::BlockColourMap;
use crate::core::fractals::mandart::colour_params::ColourParams;
use crate::core::fractals::mandart::power::{
    CubeRecurrence, EscapeRecurrence, PowerStrategy, RealRecurrence, SquareRecurrence,
};
use crate::core::fractals::mandart::shape_params::ShapeParams;
use crate::core::fractals::mandart::smoothing::{Smoothing, global_min_iteration};
use crate::core::util::pixel_to_plane::PixelToPlaneError;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    Iteration(PixelToPlaneError),
    Grid(IterationGridError),
    Raster(GeneratePixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iteration(err) => write!(f, "iteration failed: {}", err),
            Self::Grid(err) => write!(f, "iteration grid error: {}", err),
            Self::Raster(err) => write!(f, "rasterization failed: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Iteration(err) => Some(err),
            Self::Grid(err) => Some(err),
            Self::Raster(err) => Some(err),
        }
    }
}

impl From<PixelToPlaneError> for RenderError {
    fn from(err: PixelToPlaneError) -> Self {
        Self::Iteration(err)
    }
}

impl From<IterationGridError> for RenderError {
    fn from(err: IterationGridError) -> Self {
        Self::Grid(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Raster(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub image: PixelBuffer,
    pub grid: IterationGrid,
}

/// Iterates every pixel, then colours the result.
pub fn render_full(
    shape: &ShapeParams,
    power: PowerStrategy,
    colour: &ColourParams,
    palette: &Palette,
) -> Result<RenderOutput, RenderError> {
    let grid = compute_iteration_grid(shape, power)?;
    let image = recolour(&grid, colour, palette)?;

    Ok(RenderOutput { image, grid })
}

/// Colours an existing grid without iterating again.
pub fn recolour(
    grid: &IterationGrid,
    colour: &ColourParams,
    palette: &Palette,
) -> Result<PixelBuffer, RenderError> {
    let start = Instant::now();
    let boundaries = colouring_boundaries(grid, colour);

    log::debug!(
        "colouring {} blocks from anchor {:.4}",
        boundaries.n_blocks(),
        boundaries.anchor()
    );

    let colour_map = BlockColourMap::new(colour, boundaries, palette, grid.max_iterations());
    let image = generate_pixel_buffer(grid.values(), &colour_map, grid.pixel_rect())?;

    log::debug!("colouring took {:?}", start.elapsed());

    Ok(image)
}

/// Boundary table a colouring pass over `grid` would use.
#[must_use]
pub fn colouring_boundaries(grid: &IterationGrid, colour: &ColourParams) -> BlockBoundaries {
    BlockBoundaries::new(colour, grid.max_iterations(), global_min_iteration(grid))
}

pub fn compute_iteration_grid(
    shape: &ShapeParams,
    power: PowerStrategy,
) -> Result<IterationGrid, RenderError> {
    let start = Instant::now();

    let samples = match power {
        PowerStrategy::Square => escape_samples(shape, SquareRecurrence)?,
        PowerStrategy::Cube => escape_samples(shape, CubeRecurrence)?,
        PowerStrategy::Real(exponent) => escape_samples(shape, RealRecurrence::new(exponent))?,
    };

    log::debug!(
        "iterated {}x{} pixels with power {} in {:?}",
        shape.pixel_rect().width(),
        shape.pixel_rect().height(),
        power.exponent(),
        start.elapsed()
    );

    let smoothing = Smoothing::new(shape.r_sq_limit(), power.exponent(), shape.max_iterations());
    let values = samples
        .into_iter()
        .map(|sample| smoothing.continuous_value(sample))
        .collect();

    Ok(IterationGrid::from_values(
        shape.pixel_rect(),
        shape.max_iterations(),
        shape.min_iteration_delta(),
        values,
    )?)
}

fn escape_samples<R: EscapeRecurrence>(
    shape: &ShapeParams,
    recurrence: R,
) -> Result<Vec<EscapeSample>, PixelToPlaneError> {
    let algorithm = EscapeTimeAlgorithm::new(shape, recurrence);

    generate_fractal_parallel_rayon(shape.pixel_rect(), &algorithm)
}
