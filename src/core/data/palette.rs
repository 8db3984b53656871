use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one colour"),
        }
    }
}

impl Error for PaletteError {}

/// Ordered, index-stable list of block colours. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Reduces any block number onto a palette slot, cycling every `len()` blocks.
    #[must_use]
    pub fn wrap_index(&self, block: usize) -> usize {
        let index = block % self.colours.len();
        debug_assert!(index < self.colours.len());
        index
    }

    #[must_use]
    pub fn colour_at(&self, block: usize) -> Colour {
        self.colours[self.wrap_index(block)]
    }

    /// The colour a block starts from and the one it blends towards.
    #[must_use]
    pub fn adjacent_pair(&self, block: usize) -> (Colour, Colour) {
        let first = self.wrap_index(block);
        let second = self.wrap_index(first + 1);

        (self.colours[first], self.colours[second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgby() -> Palette {
        Palette::new(vec![
            Colour::new(255, 0, 0),
            Colour::new(0, 255, 0),
            Colour::new(0, 0, 255),
            Colour::new(255, 255, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert_eq!(Palette::new(vec![]), Err(PaletteError::Empty));
    }

    #[test]
    fn test_colours_cycle_every_palette_length() {
        let palette = rgby();

        for block in 0..40 {
            assert_eq!(palette.colour_at(block), palette.colour_at(block + palette.len()));
            assert!(palette.wrap_index(block) < palette.len());
        }
    }

    #[test]
    fn test_adjacent_pair_wraps_to_first() {
        let palette = rgby();

        assert_eq!(
            palette.adjacent_pair(3),
            (Colour::new(255, 255, 0), Colour::new(255, 0, 0))
        );
        assert_eq!(
            palette.adjacent_pair(5),
            (Colour::new(0, 255, 0), Colour::new(0, 0, 255))
        );
    }

    #[test]
    fn test_single_colour_pairs_with_itself() {
        let palette = Palette::new(vec![Colour::new(7, 7, 7)]).unwrap();

        assert_eq!(palette.adjacent_pair(12), (Colour::new(7, 7, 7), Colour::new(7, 7, 7)));
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let palette = Palette::new(vec![Colour::BLACK, Colour::BLACK]).unwrap();

        assert_eq!(palette.len(), 2);
    }
}
