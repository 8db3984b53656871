use std::ops::Add;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
    }

    #[must_use]
    pub fn cube(self) -> Self {
        let real_sq = self.real * self.real;
        let imag_sq = self.imag * self.imag;

        Self {
            real: self.real * real_sq - 3.0 * self.real * imag_sq,
            imag: 3.0 * real_sq * self.imag - self.imag * imag_sq,
        }
    }

    /// Real power through polar form: `r^p (cos pθ, sin pθ)`.
    #[must_use]
    pub fn powf(self, power: f64) -> Self {
        let radius = self.magnitude_squared().sqrt();
        let angle = self.imag.atan2(self.real);
        let new_radius = radius.powf(power);
        let new_angle = power * angle;

        Self {
            real: new_radius * new_angle.cos(),
            imag: new_radius * new_angle.sin(),
        }
    }

    /// Rotates counter-clockwise by `radians` about the origin.
    #[must_use]
    pub fn rotated(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();

        Self {
            real: self.real * cos - self.imag * sin,
            imag: self.real * sin + self.imag * cos,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < 1e-12 && (a.imag - b.imag).abs() < 1e-12,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_magnitude_squared() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        assert_eq!(Complex::new(2.0, 3.0).square(), Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_cube() {
        // (1 + 2i)³ = (1 + 2i)(-3 + 4i) = -11 - 2i
        assert_eq!(Complex::new(1.0, 2.0).cube(), Complex::new(-11.0, -2.0));
    }

    #[test]
    fn test_powf_integer_exponents_match_mul() {
        let c = Complex::new(0.3, 0.7);

        assert_close(c.powf(2.0), c.square());
        assert_close(c.powf(3.0), c.cube());
        assert_close(c.powf(4.0), c.square().square());
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let rotated = Complex::new(1.0, 0.0).rotated(std::f64::consts::FRAC_PI_2);

        assert_close(rotated, Complex::new(0.0, 1.0));
    }
}
