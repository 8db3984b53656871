use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::fractals::mandart::block_boundaries::BlockBoundaries;
use crate::core::fractals::mandart::colour_params::ColourParams;

const HOLD_FRACTION_CEILING: f64 = 1.0 - 1e-10;

/// Nudges a fraction of exactly 1 below 1 so that `1 - fraction` never divides by zero.
#[must_use]
pub fn nudge_unit_fraction(fraction: f64) -> f64 {
    if fraction == 1.0 {
        HOLD_FRACTION_CEILING
    } else {
        fraction
    }
}

/// Colours continuous iteration values by block, blending between
/// neighbouring palette entries after the hold fraction.
#[derive(Debug, Clone)]
pub struct BlockColourMap<'a> {
    max_iterations: f64,
    hold_fraction: f64,
    escape_colour: Colour,
    boundaries: BlockBoundaries,
    palette: &'a Palette,
}

impl<'a> BlockColourMap<'a> {
    #[must_use]
    pub fn new(
        colour: &ColourParams,
        boundaries: BlockBoundaries,
        palette: &'a Palette,
        max_iterations: u32,
    ) -> Self {
        Self {
            max_iterations: f64::from(max_iterations),
            hold_fraction: nudge_unit_fraction(colour.hold_fraction()),
            escape_colour: colour.escape_colour(),
            boundaries,
            palette,
        }
    }

    /// Position inside `block` after the hold fraction, in `[0, 1)`.
    fn blend_fraction(&self, block: usize, h0: f64) -> f64 {
        let lower = self.boundaries.relative(block);
        let width = self.boundaries.relative(block + 1) - lower;

        if !width.is_finite() || width <= 0.0 {
            return 0.0;
        }

        let into_block = h0 - lower;
        let hold = self.hold_fraction;

        let h = if into_block / width <= hold {
            lower
        } else {
            lower + (into_block - hold * width) / (1.0 - hold)
        };

        (h - lower) / width
    }
}

impl ColourMap<f64> for BlockColourMap<'_> {
    fn map(&self, value: f64) -> Option<Colour> {
        if value >= self.max_iterations {
            return Some(self.escape_colour);
        }

        let h0 = value - self.boundaries.anchor();
        let block = self.boundaries.find_block(h0)?;
        let (from, to) = self.palette.adjacent_pair(block);

        Some(from.lerp(to, self.blend_fraction(block, h0)))
    }

    fn display_name(&self) -> &str {
        "MandArt Blocks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::new(255, 0, 0);
    const GREEN: Colour = Colour::new(0, 255, 0);
    const BLUE: Colour = Colour::new(0, 0, 255);
    const YELLOW: Colour = Colour::new(255, 255, 0);

    fn rgby() -> Palette {
        Palette::new(vec![RED, GREEN, BLUE, YELLOW]).unwrap()
    }

    // Two blocks over [0, 100): [0, 30) and [30, 100).
    fn two_block_map(palette: &Palette, hold_fraction: f64) -> BlockColourMap<'_> {
        let colour = ColourParams::new(2, 10.0, 2.0, hold_fraction, Colour::BLACK).unwrap();
        let boundaries = BlockBoundaries::new(&colour, 100, 0.0);

        BlockColourMap::new(&colour, boundaries, palette, 100)
    }

    #[test]
    fn test_non_escaping_value_gets_escape_colour() {
        let palette = rgby();
        let map = two_block_map(&palette, 0.0);

        assert_eq!(map.map(100.0), Some(Colour::BLACK));
    }

    #[test]
    fn test_block_start_is_first_colour() {
        let palette = rgby();
        let map = two_block_map(&palette, 0.0);

        assert_eq!(map.map(0.0), Some(RED));
        assert_eq!(map.map(30.0), Some(GREEN));
    }

    #[test]
    fn test_blend_halfway_through_block() {
        let palette = rgby();
        let map = two_block_map(&palette, 0.0);

        // halfway through [30, 100) blends green into blue
        assert_eq!(map.map(65.0), Some(Colour::new(0, 128, 128)));
    }

    #[test]
    fn test_hold_fraction_keeps_solid_colour_then_blends() {
        let palette = rgby();
        let map = two_block_map(&palette, 0.5);

        assert_eq!(map.map(7.5), Some(RED));
        assert_eq!(map.map(15.0), Some(RED));
        // three quarters of the way: (0.75 - 0.5) / 0.5 = 0.5
        assert_eq!(map.map(22.5), Some(Colour::new(128, 128, 0)));
    }

    #[test]
    fn test_hold_fraction_of_one_stays_solid() {
        let palette = rgby();
        let map = two_block_map(&palette, 1.0);

        assert_eq!(map.map(29.0), Some(RED));
        assert_eq!(map.map(99.0), Some(GREEN));
    }

    #[test]
    fn test_value_below_anchor_is_unmapped() {
        let palette = rgby();
        let map = two_block_map(&palette, 0.0);

        assert_eq!(map.map(-1.0), None);
        assert_eq!(map.map(f64::NAN), None);
    }

    #[test]
    fn test_colours_wrap_past_palette_end() {
        let palette = Palette::new(vec![RED, BLUE]).unwrap();
        let colour = ColourParams::new(6, 0.0, 1.0, 0.0, Colour::BLACK).unwrap();
        let boundaries = BlockBoundaries::new(&colour, 60, 0.0);
        let map = BlockColourMap::new(&colour, boundaries, &palette, 60);

        // blocks of width 10; block 4 starts on entry 0, block 5 on entry 1
        assert_eq!(map.map(40.0), Some(RED));
        assert_eq!(map.map(50.0), Some(BLUE));
        assert_eq!(map.map(55.0), Some(Colour::new(128, 0, 128)));
    }
}
