//! Rasterization primitives shared by the built-in raster surface.

mod primitives;

pub use primitives::{draw_line_aa, draw_thick_segment, fill_segments};
