#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from real-valued channels, clamping each to `[0, 255]`
    /// and rounding to the nearest byte. NaN channels become 0.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_to_byte(r),
            g: channel_to_byte(g),
            b: channel_to_byte(b),
        }
    }

    /// Linear blend towards `other`; `t` is not clamped, the result channels are.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |from: u8, to: u8| {
            let from = f64::from(from);
            from + t * (f64::from(to) - from)
        };

        Self::from_channels(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

fn channel_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_rounds_to_nearest() {
        let colour = Colour::from_channels(10.4, 10.5, 254.6);

        assert_eq!(colour, Colour::new(10, 11, 255));
    }

    #[test]
    fn test_from_channels_clamps_out_of_range() {
        let colour = Colour::from_channels(-20.0, 300.0, f64::NAN);

        assert_eq!(colour, Colour::new(0, 255, 0));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let red = Colour::new(255, 0, 0);
        let blue = Colour::new(0, 0, 255);

        assert_eq!(red.lerp(blue, 0.0), red);
        assert_eq!(red.lerp(blue, 1.0), blue);
        assert_eq!(red.lerp(blue, 0.5), Colour::new(128, 0, 128));
    }

    #[test]
    fn test_to_rgba_is_opaque() {
        assert_eq!(Colour::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
    }
}
