mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::CliController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_gradient::{GradientColourMap, generate_gradient};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_art::{
    RenderError, RenderOutput, colouring_boundaries, compute_iteration_grid, recolour, render_full,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
pub use crate::core::data::palette::{Palette, PaletteError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandart::algorithm::{EscapeSample, EscapeTimeAlgorithm};
pub use crate::core::fractals::mandart::block_boundaries::{BlockBoundaries, BlockBoundaryError};
pub use crate::core::fractals::mandart::colour_map::BlockColourMap;
pub use crate::core::fractals::mandart::colour_params::ColourParams;
pub use crate::core::fractals::mandart::errors::{ColourParamsError, PowerError, ShapeParamsError};
pub use crate::core::fractals::mandart::navigation::{
    NavigationError, recentre_after_drag, recentre_on_pixel,
};
pub use crate::core::fractals::mandart::picture_definition::{
    Hue, PictureDefinition, PictureDefinitionError,
};
pub use crate::core::fractals::mandart::power::{
    CUBE_CARDIOID_AC, CUBE_CARDIOID_OFFSET, CUBE_NEPHROID_AN, CubeRecurrence, EscapeRecurrence,
    PowerStrategy, RealRecurrence, SquareRecurrence,
};
pub use crate::core::fractals::mandart::shape_params::{ShapeParams, ShapeParamsBuilder};
pub use crate::core::fractals::mandart::smoothing::{Smoothing, global_min_iteration};
pub use crate::core::util::pixel_to_plane::{
    PixelToPlaneError, PlaneView, ROTATION_SIGN, pixel_offset, pixel_to_plane,
};
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
