use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ShapeParamsError {
    ZeroWidth,
    ZeroHeight,
    ZeroMaxIterationsError,
    InvalidRSqLimit { r_sq_limit: f64 },
    InvalidScale { scale: f64 },
    NonFinite { field: &'static str },
}

impl fmt::Display for ShapeParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "Image width must be greater than zero"),
            Self::ZeroHeight => write!(f, "Image height must be greater than zero"),
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidRSqLimit { r_sq_limit } => {
                write!(
                    f,
                    "Escape radius squared limit must be finite and greater than 1, got {}",
                    r_sq_limit
                )
            }
            Self::InvalidScale { scale } => {
                write!(f, "Scale must be finite and greater than zero, got {}", scale)
            }
            Self::NonFinite { field } => write!(f, "{} must be a finite number", field),
        }
    }
}

impl Error for ShapeParamsError {}

#[derive(Debug, PartialEq)]
pub enum ColourParamsError {
    ZeroBlocks,
    NonFinite { field: &'static str },
}

impl fmt::Display for ColourParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBlocks => write!(f, "Number of colour blocks must be at least one"),
            Self::NonFinite { field } => write!(f, "{} must be a finite number", field),
        }
    }
}

impl Error for ColourParamsError {}

#[derive(Debug, PartialEq)]
pub enum PowerError {
    NonFinite { power: f64 },
}

impl fmt::Display for PowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { power } => write!(f, "Power must be a finite number, got {}", power),
        }
    }
}

impl Error for PowerError {}
