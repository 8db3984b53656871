use crate::core::data::complex::Complex;
use crate::core::fractals::mandart::errors::PowerError;

/// Sizes of the power-3 nephroid and its two attached cardioids.
pub const CUBE_NEPHROID_AN: f64 = 0.192450148;
pub const CUBE_CARDIOID_AC: f64 = 0.079717468;
/// Vertical offset of the cardioid centres from the real axis.
pub const CUBE_CARDIOID_OFFSET: f64 = 4.0 * CUBE_NEPHROID_AN + 4.0 * CUBE_CARDIOID_AC;

/// Which recurrence a render uses. Chosen once from the configured exponent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PowerStrategy {
    Square,
    Cube,
    Real(f64),
}

impl PowerStrategy {
    pub fn from_power(power: f64) -> Result<Self, PowerError> {
        if !power.is_finite() {
            return Err(PowerError::NonFinite { power });
        }

        Ok(if power == 2.0 {
            Self::Square
        } else if power == 3.0 {
            Self::Cube
        } else {
            Self::Real(power)
        })
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        match self {
            Self::Square => 2.0,
            Self::Cube => 3.0,
            Self::Real(power) => *power,
        }
    }
}

pub trait EscapeRecurrence: Sync {
    fn exponent(&self) -> f64;

    /// True when `c` is known to be inside the set without iterating.
    fn excluded(&self, _c: Complex) -> bool {
        false
    }

    fn step(&self, z: Complex, c: Complex) -> Complex;
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SquareRecurrence;

impl EscapeRecurrence for SquareRecurrence {
    fn exponent(&self) -> f64 {
        2.0
    }

    /// Main cardioid or period-2 bulb.
    fn excluded(&self, c: Complex) -> bool {
        let Complex { real: x, imag: y } = c;
        let y_sq = y * y;
        let p = ((x - 0.25) * (x - 0.25) + y_sq).sqrt();

        x < p - 2.0 * p * p + 0.25 || (x + 1.0) * (x + 1.0) + y_sq < 0.0625
    }

    fn step(&self, z: Complex, c: Complex) -> Complex {
        z.square() + c
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CubeRecurrence;

impl EscapeRecurrence for CubeRecurrence {
    fn exponent(&self) -> f64 {
        3.0
    }

    /// Nephroid or either of the cardioids above and below it.
    fn excluded(&self, c: Complex) -> bool {
        let Complex { real: x, imag: y } = c;
        let an = CUBE_NEPHROID_AN;
        let ac = CUBE_CARDIOID_AC;
        let cup = CUBE_CARDIOID_OFFSET;
        let x_sq = x * x;
        let y_sq = y * y;

        let t1 = 108.0 * an.powi(4) * y_sq - (x_sq + y_sq - 4.0 * an * an).powi(3);
        if t1 > 0.0 {
            return true;
        }

        let r_sq_up = x_sq + (y - cup) * (y - cup);
        let t2 = (r_sq_up + 2.0 * ac * (y - cup)).powi(2) - 4.0 * ac * ac * r_sq_up;
        if t2 < 0.0 {
            return true;
        }

        let r_sq_down = x_sq + (y + cup) * (y + cup);
        let t3 = (r_sq_down - 2.0 * ac * (y + cup)).powi(2) - 4.0 * ac * ac * r_sq_down;

        t3 < 0.0
    }

    fn step(&self, z: Complex, c: Complex) -> Complex {
        z.cube() + c
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RealRecurrence {
    power: f64,
}

impl RealRecurrence {
    #[must_use]
    pub fn new(power: f64) -> Self {
        Self { power }
    }
}

impl EscapeRecurrence for RealRecurrence {
    fn exponent(&self) -> f64 {
        self.power
    }

    fn step(&self, z: Complex, c: Complex) -> Complex {
        z.powf(self.power) + c
    }
}
