pub mod colour;
pub mod complex;
pub mod iteration_grid;
pub mod palette;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
