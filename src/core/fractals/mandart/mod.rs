pub mod algorithm;
pub mod block_boundaries;
pub mod colour_map;
pub mod colour_params;
pub mod errors;
pub mod navigation;
pub mod picture_definition;
pub mod power;
pub mod shape_params;
pub mod smoothing;
