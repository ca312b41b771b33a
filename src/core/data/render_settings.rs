use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderSettingsError {
    ZeroRasterSize { width: u32, height: u32 },
    ZeroMaxIterations,
}

impl fmt::Display for RenderSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRasterSize { width, height } => {
                write!(f, "raster size must be non-zero: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for RenderSettingsError {}

/// Immutable per-frame render configuration, passed by value into every task.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderSettings {
    width: u32,
    height: u32,
    max_iterations: u32,
    escape_radius: f64,
}

impl RenderSettings {
    pub fn new(
        width: u32,
        height: u32,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, RenderSettingsError> {
        if width == 0 || height == 0 {
            return Err(RenderSettingsError::ZeroRasterSize { width, height });
        }

        if max_iterations == 0 {
            return Err(RenderSettingsError::ZeroMaxIterations);
        }

        Ok(Self {
            width,
            height,
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}
