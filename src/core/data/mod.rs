pub mod colour;
pub mod complex;
pub mod iteration_cap;
pub mod logical_region;
pub mod pixel_buffer;
pub mod point;
pub mod screen_extent;
pub mod screen_rect;
