use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Image extent anchored at the origin; every valid pixel satisfies
/// `x < width` and `y < height`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Row-major offset of `point`, or `None` when it lies outside the rect.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }
}
