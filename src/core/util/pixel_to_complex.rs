use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps a raster pixel to its complex-plane coordinate by linear
/// interpolation over the viewport:
/// `x = x_min + (col / raster_width) * viewport_width`, likewise for `y`.
#[must_use]
pub fn pixel_to_complex(
    col: u32,
    row: u32,
    viewport: &Viewport,
    raster_width: u32,
    raster_height: u32,
) -> Complex {
    Complex {
        real: viewport.x_min() + (f64::from(col) / f64::from(raster_width)) * viewport.width(),
        imag: viewport.y_min() + (f64::from(row) / f64::from(raster_height)) * viewport.height(),
    }
}
