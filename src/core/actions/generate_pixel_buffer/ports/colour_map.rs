use crate::core::data::colour::Colour;

pub trait ColourMap<T> {
    /// `None` leaves the pixel at the buffer's fill colour.
    fn map(&self, value: T) -> Option<Colour>;

    fn display_name(&self) -> &str;
}
