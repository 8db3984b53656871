use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::palette::{Palette, PaletteError};
use crate::core::fractals::mandart::colour_params::ColourParams;
use crate::core::fractals::mandart::errors::{ColourParamsError, PowerError, ShapeParamsError};
use crate::core::fractals::mandart::power::PowerStrategy;
use crate::core::fractals::mandart::shape_params::{ShapeParams, ShapeParamsBuilder};
use crate::core::util::pixel_to_plane::PlaneView;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum PictureDefinitionError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidIterationsMax { iterations_max: f64 },
    Shape(ShapeParamsError),
    Colour(ColourParamsError),
    Palette(PaletteError),
    Power(PowerError),
}

impl fmt::Display for PictureDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read picture definition: {}", err),
            Self::Json(err) => write!(f, "invalid picture definition: {}", err),
            Self::InvalidIterationsMax { iterations_max } => write!(
                f,
                "iterationsMax must be a finite number of at least 1, got {}",
                iterations_max
            ),
            Self::Shape(err) => write!(f, "{}", err),
            Self::Colour(err) => write!(f, "{}", err),
            Self::Palette(err) => write!(f, "{}", err),
            Self::Power(err) => write!(f, "{}", err),
        }
    }
}

impl Error for PictureDefinitionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidIterationsMax { .. } => None,
            Self::Shape(err) => Some(err),
            Self::Colour(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Power(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PictureDefinitionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PictureDefinitionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ShapeParamsError> for PictureDefinitionError {
    fn from(err: ShapeParamsError) -> Self {
        Self::Shape(err)
    }
}

impl From<ColourParamsError> for PictureDefinitionError {
    fn from(err: ColourParamsError) -> Self {
        Self::Colour(err)
    }
}

impl From<PaletteError> for PictureDefinitionError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<PowerError> for PictureDefinitionError {
    fn from(err: PowerError) -> Self {
        Self::Power(err)
    }
}

/// One palette entry as stored in a `.mandart` file. Channels are 0-255.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hue {
    #[serde(default)]
    pub num: u32,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Hue {
    #[must_use]
    pub fn new(num: u32, r: f64, g: f64, b: f64) -> Self {
        Self { num, r, g, b }
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        Colour::from_channels(self.r, self.g, self.b)
    }
}

/// Everything needed to reproduce one picture, in `.mandart` JSON form.
///
/// Missing keys fall back to the opening picture and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PictureDefinition {
    pub x_center: f64,
    pub y_center: f64,
    pub scale: f64,
    pub iterations_max: f64,
    pub r_sq_limit: f64,
    pub image_width: u32,
    pub image_height: u32,
    pub n_blocks: u32,
    pub spacing_color_far: f64,
    pub spacing_color_near: f64,
    #[serde(rename = "yY")]
    pub hold_fraction: f64,
    pub theta: f64,
    #[serde(rename = "dFIterMin")]
    pub min_iteration_delta: f64,
    /// 1-based index of the gradient preview's left colour.
    pub left_number: usize,
    pub hues: Vec<Hue>,
    pub mand_color: Hue,
    pub mand_power_real: f64,
}

impl Default for PictureDefinition {
    fn default() -> Self {
        Self {
            x_center: -0.75,
            y_center: 0.0,
            scale: 430.0,
            iterations_max: 10_000.0,
            r_sq_limit: 400.0,
            image_width: 1100,
            image_height: 1000,
            n_blocks: 60,
            spacing_color_far: 5.0,
            spacing_color_near: 15.0,
            hold_fraction: 0.0,
            theta: 0.0,
            min_iteration_delta: 0.0,
            left_number: 1,
            hues: vec![
                Hue::new(1, 0.0, 255.0, 0.0),
                Hue::new(2, 255.0, 255.0, 0.0),
                Hue::new(3, 255.0, 0.0, 0.0),
                Hue::new(4, 255.0, 0.0, 255.0),
                Hue::new(5, 0.0, 0.0, 255.0),
                Hue::new(6, 0.0, 255.0, 255.0),
            ],
            mand_color: Hue::new(0, 0.0, 0.0, 0.0),
            mand_power_real: 2.0,
        }
    }
}

impl PictureDefinition {
    /// Opening view for a given power.
    #[must_use]
    pub fn default_for_power(power: f64) -> Self {
        let base = Self {
            mand_power_real: power,
            ..Self::default()
        };

        if power == 2.0 {
            Self {
                r_sq_limit: 500.0,
                ..base
            }
        } else if power == 3.0 {
            Self {
                x_center: 0.0,
                scale: 360.0,
                r_sq_limit: 64.0,
                ..base
            }
        } else {
            Self {
                x_center: 0.0,
                iterations_max: 50.0,
                r_sq_limit: 25.0,
                ..base
            }
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, PictureDefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PictureDefinitionError> {
        let json = std::fs::read_to_string(path)?;

        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, PictureDefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn max_iterations(&self) -> Result<u32, PictureDefinitionError> {
        if !self.iterations_max.is_finite() || self.iterations_max < 1.0 {
            return Err(PictureDefinitionError::InvalidIterationsMax {
                iterations_max: self.iterations_max,
            });
        }

        Ok(self.iterations_max as u32)
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(self.x_center, self.y_center)
    }

    /// Unvalidated view; see [`Self::shape_params`] for the checked form.
    #[must_use]
    pub fn view(&self) -> PlaneView {
        PlaneView {
            centre: self.centre(),
            scale: self.scale,
            theta: self.theta,
        }
    }

    pub fn shape_params(&self) -> Result<ShapeParams, PictureDefinitionError> {
        let shape = ShapeParamsBuilder {
            width: self.image_width,
            height: self.image_height,
            max_iterations: self.max_iterations()?,
            r_sq_limit: self.r_sq_limit,
            scale: self.scale,
            theta: self.theta,
            centre: self.centre(),
            min_iteration_delta: self.min_iteration_delta,
        }
        .build()?;

        Ok(shape)
    }

    pub fn colour_params(&self) -> Result<ColourParams, PictureDefinitionError> {
        Ok(ColourParams::new(
            self.n_blocks,
            self.spacing_color_far,
            self.spacing_color_near,
            self.hold_fraction,
            self.mand_color.colour(),
        )?)
    }

    pub fn palette(&self) -> Result<Palette, PictureDefinitionError> {
        Ok(Palette::new(self.hues.iter().map(Hue::colour).collect())?)
    }

    pub fn power(&self) -> Result<PowerStrategy, PictureDefinitionError> {
        Ok(PowerStrategy::from_power(self.mand_power_real)?)
    }

    /// The `left_number` hue and the one after it, wrapping to the first.
    #[must_use]
    pub fn gradient_colours(&self) -> Option<(Colour, Colour)> {
        let left_index = self.left_number.checked_sub(1)?;
        let left = self.hues.get(left_index)?;
        let right = self.hues.get(left_index + 1).or_else(|| self.hues.first())?;

        Some((left.colour(), right.colour()))
    }
}
