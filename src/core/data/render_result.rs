use crate::core::data::colour::Colour;
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::viewport::Viewport;

/// Dense table of iteration counts, one inner vector per raster row.
pub type PixelMatrix = Vec<Vec<u32>>;

/// Dense table of colours, parallel to a [`PixelMatrix`].
pub type ColourMatrix = Vec<Vec<Colour>>;

/// Aggregate result of one frame computation.
///
/// Constructed empty when no recompute was needed, or fully populated by the
/// fan-in combinator; consumed by the presentation stage either way.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub viewport: Viewport,
    pub settings: RenderSettings,
    pub iterations: PixelMatrix,
    pub colours: ColourMatrix,
}

impl RenderResult {
    /// The short-circuit result: carries the viewport and settings in effect
    /// but no pixel data.
    #[must_use]
    pub fn empty(viewport: Viewport, settings: RenderSettings) -> Self {
        Self {
            viewport,
            settings,
            iterations: Vec::new(),
            colours: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_carries_viewport_and_settings_only() {
        let viewport = Viewport::default();
        let settings = RenderSettings::new(64, 48, 64, 2.0).unwrap();

        let result = RenderResult::empty(viewport, settings);

        assert!(result.is_empty());
        assert_eq!(result.viewport, viewport);
        assert_eq!(result.settings, settings);
        assert!(result.iterations.is_empty());
    }
}
