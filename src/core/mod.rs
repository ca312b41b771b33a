//! Domain types and pure escape-time math.

pub mod colour_map;
pub mod data;
pub mod mandelbrot;
pub mod util;
