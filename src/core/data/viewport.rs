use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular region of the complex plane currently mapped onto the
/// output raster.
///
/// Invariant: both spans are strictly positive. The constructor rejects
/// degenerate bounds and every mutation goes through [`Viewport::recentred`],
/// which preserves the invariant for any positive zoom factor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns the viewport scaled by `zoom` and recentred on `target`.
    ///
    /// `zoom` below 1.0 zooms in, above 1.0 zooms out; it must be positive,
    /// which keeps the size invariant intact.
    #[must_use]
    pub fn recentred(&self, target: Complex, zoom: f64) -> Self {
        let half_width = self.width() * zoom / 2.0;
        let half_height = self.height() * zoom / 2.0;

        Self {
            x_min: target.real - half_width,
            x_max: target.real + half_width,
            y_min: target.imag - half_height,
            y_max: target.imag + half_height,
        }
    }
}

impl Default for Viewport {
    /// The classic full Mandelbrot view.
    fn default() -> Self {
        Self {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}
