use crate::core::data::colour::Colour;
use crate::core::fractals::mandart::errors::ColourParamsError;

/// Settings for one colouring pass. Changing these never requires re-iterating.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColourParams {
    n_blocks: u32,
    spacing_far: f64,
    spacing_near: f64,
    hold_fraction: f64,
    escape_colour: Colour,
}

impl ColourParams {
    pub fn new(
        n_blocks: u32,
        spacing_far: f64,
        spacing_near: f64,
        hold_fraction: f64,
        escape_colour: Colour,
    ) -> Result<Self, ColourParamsError> {
        if n_blocks == 0 {
            return Err(ColourParamsError::ZeroBlocks);
        }

        let finite_fields = [
            ("spacing far", spacing_far),
            ("spacing near", spacing_near),
            ("hold fraction", hold_fraction),
        ];

        if let Some(&(field, _)) = finite_fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ColourParamsError::NonFinite { field });
        }

        Ok(Self {
            n_blocks,
            spacing_far,
            spacing_near,
            hold_fraction,
            escape_colour,
        })
    }

    #[must_use]
    pub fn n_blocks(&self) -> u32 {
        self.n_blocks
    }

    #[must_use]
    pub fn spacing_far(&self) -> f64 {
        self.spacing_far
    }

    #[must_use]
    pub fn spacing_near(&self) -> f64 {
        self.spacing_near
    }

    #[must_use]
    pub fn hold_fraction(&self) -> f64 {
        self.hold_fraction
    }

    #[must_use]
    pub fn escape_colour(&self) -> Colour {
        self.escape_colour
    }
}
