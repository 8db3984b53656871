use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandart::errors::ShapeParamsError;
use crate::core::util::pixel_to_plane::PlaneView;

/// Everything that decides which points are iterated and how far.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeParams {
    pixel_rect: PixelRect,
    max_iterations: u32,
    r_sq_limit: f64,
    view: PlaneView,
    min_iteration_delta: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeParamsBuilder {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub r_sq_limit: f64,
    pub scale: f64,
    pub theta: f64,
    pub centre: Complex,
    pub min_iteration_delta: f64,
}

impl ShapeParamsBuilder {
    pub fn build(self) -> Result<ShapeParams, ShapeParamsError> {
        ShapeParams::new(self)
    }
}

impl ShapeParams {
    pub fn new(raw: ShapeParamsBuilder) -> Result<Self, ShapeParamsError> {
        let pixel_rect = PixelRect::new(raw.width, raw.height).map_err(|_| {
            if raw.width == 0 {
                ShapeParamsError::ZeroWidth
            } else {
                ShapeParamsError::ZeroHeight
            }
        })?;

        if raw.max_iterations == 0 {
            return Err(ShapeParamsError::ZeroMaxIterationsError);
        }

        if !raw.r_sq_limit.is_finite() || raw.r_sq_limit <= 1.0 {
            return Err(ShapeParamsError::InvalidRSqLimit {
                r_sq_limit: raw.r_sq_limit,
            });
        }

        if !raw.scale.is_finite() || raw.scale <= 0.0 {
            return Err(ShapeParamsError::InvalidScale { scale: raw.scale });
        }

        let finite_fields = [
            ("theta", raw.theta),
            ("x centre", raw.centre.real),
            ("y centre", raw.centre.imag),
            ("minimum iteration delta", raw.min_iteration_delta),
        ];

        if let Some(&(field, _)) = finite_fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ShapeParamsError::NonFinite { field });
        }

        Ok(Self {
            pixel_rect,
            max_iterations: raw.max_iterations,
            r_sq_limit: raw.r_sq_limit,
            view: PlaneView {
                centre: raw.centre,
                scale: raw.scale,
                theta: raw.theta,
            },
            min_iteration_delta: raw.min_iteration_delta,
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
    pub fn r_sq_limit(&self) -> f64 {
        self.r_sq_limit
    }

    #[must_use]
    pub fn view(&self) -> PlaneView {
        self.view
    }

    #[must_use]
    pub fn min_iteration_delta(&self) -> f64 {
        self.min_iteration_delta
    }

    /// True when `other` iterates to the same grid. The anchor delta only
    /// affects colouring and is ignored.
    #[must_use]
    pub fn iterates_same_as(&self, other: &ShapeParams) -> bool {
        let aligned = Self {
            min_iteration_delta: other.min_iteration_delta,
            ..*self
        };

        aligned == *other
    }
}
