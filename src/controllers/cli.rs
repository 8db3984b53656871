use std::error::Error;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_gradient::generate_gradient;
use crate::core::actions::render_art::{RenderOutput, colouring_boundaries, recolour, render_full};
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandart::colour_params::ColourParams;
use crate::core::fractals::mandart::picture_definition::PictureDefinition;

const GRADIENT_PREVIEW_SIZE: u32 = 500;

/// Renders one picture definition, keeping the iteration grid so later
/// colour changes skip the iteration.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    definition: PictureDefinition,
    grid: Option<IterationGrid>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, definition: PictureDefinition) -> Self {
        Self {
            presenter,
            definition,
            grid: None,
            buffer: None,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &PictureDefinition {
        &self.definition
    }

    #[must_use]
    pub fn grid(&self) -> Option<&IterationGrid> {
        self.grid.as_ref()
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let output = render_definition(&self.definition)?;

        self.grid = Some(output.grid);
        self.buffer = Some(output.image);

        Ok(())
    }

    /// Applies `definition`, recolouring the kept grid when only colour
    /// settings or the anchor delta changed. Any shape or power change
    /// renders from scratch. A rejected definition leaves the controller
    /// untouched.
    pub fn recolour_with(&mut self, definition: PictureDefinition) -> Result<(), Box<dyn Error>> {
        let shape = definition.shape_params()?;
        let power = definition.power()?;
        let colour = definition.colour_params()?;
        let palette = definition.palette()?;

        let grid_reusable = match (self.definition.shape_params(), self.definition.power()) {
            (Ok(kept_shape), Ok(kept_power)) => {
                kept_shape.iterates_same_as(&shape) && kept_power == power
            }
            _ => false,
        };

        let Some(grid) = self.grid.as_mut().filter(|_| grid_reusable) else {
            let output = render_definition(&definition)?;
            colouring_boundaries(&output.grid, &colour).ensure_non_decreasing()?;

            self.definition = definition;
            self.grid = Some(output.grid);
            self.buffer = Some(output.image);

            return Ok(());
        };

        let previous_delta = grid.min_iteration_delta();
        grid.set_min_iteration_delta(shape.min_iteration_delta());

        let start = Instant::now();
        let buffer = match recolour_checked(grid, &colour, &palette) {
            Ok(buffer) => buffer,
            Err(err) => {
                grid.set_min_iteration_delta(previous_delta);
                return Err(err);
            }
        };

        log::info!("Recoloured in {:?}", start.elapsed());

        self.definition = definition;
        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            log::warn!("Nothing rendered yet, skipping write");
            return Ok(());
        };

        create_parent_dirs(filepath.as_ref())?;
        self.presenter.present(buffer, &filepath)?;

        log::info!("Saved to {}", filepath.as_ref().display());

        Ok(())
    }

    /// Writes the gradient between the `leftNumber` hue and its neighbour.
    pub fn write_gradient_preview(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let (left, right) = self
            .definition
            .gradient_colours()
            .ok_or("leftNumber does not name a hue")?;

        let pixel_rect = PixelRect::new(GRADIENT_PREVIEW_SIZE, GRADIENT_PREVIEW_SIZE)?;
        let gradient = generate_gradient(left, right, pixel_rect, 0.0)?;

        create_parent_dirs(filepath.as_ref())?;
        self.presenter.present(&gradient, &filepath)?;

        log::info!("Saved gradient preview to {}", filepath.as_ref().display());

        Ok(())
    }
}

fn render_definition(definition: &PictureDefinition) -> Result<RenderOutput, Box<dyn Error>> {
    let shape = definition.shape_params()?;
    let power = definition.power()?;
    let colour = definition.colour_params()?;
    let palette = definition.palette()?;

    log::info!(
        "Rendering {}x{} at ({}, {}), scale {}, power {}, max iterations {}",
        shape.pixel_rect().width(),
        shape.pixel_rect().height(),
        definition.x_center,
        definition.y_center,
        definition.scale,
        power.exponent(),
        shape.max_iterations()
    );

    let start = Instant::now();
    let output = render_full(&shape, power, &colour, &palette)?;

    log::info!("Duration: {:?}", start.elapsed());

    Ok(output)
}

fn recolour_checked(
    grid: &IterationGrid,
    colour: &ColourParams,
    palette: &Palette,
) -> Result<PixelBuffer, Box<dyn Error>> {
    colouring_boundaries(grid, colour).ensure_non_decreasing()?;

    Ok(recolour(grid, colour, palette)?)
}

fn create_parent_dirs(filepath: &Path) -> std::io::Result<()> {
    match filepath.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
