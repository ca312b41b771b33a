use crate::core::data::pixel_region::PixelRegion;
use crate::core::data::render_result::PixelMatrix;
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::viewport::Viewport;
use crate::core::mandelbrot::iterations_for_point;
use crate::core::util::pixel_to_complex::pixel_to_complex;
use crate::task::{Receiver, Task};

/// Computes the iteration matrix for one rectangular sub-region of the
/// raster.
///
/// Pure and deterministic over its inputs, so any number of region tasks can
/// run concurrently on the pool without coordination.
#[must_use]
pub fn compute_region_matrix(
    viewport: &Viewport,
    settings: RenderSettings,
    region: PixelRegion,
) -> PixelMatrix {
    // Clamp to the raster in case an upstream truncation overran it.
    let start_row = region.start_row.min(settings.height());
    let end_row = region.end_row.min(settings.height());
    let start_col = region.start_col.min(settings.width());
    let end_col = region.end_col.min(settings.width());

    let mut rows = Vec::with_capacity((end_row - start_row) as usize);

    for row in start_row..end_row {
        let mut counts = Vec::with_capacity((end_col - start_col) as usize);

        for col in start_col..end_col {
            let point = pixel_to_complex(col, row, viewport, settings.width(), settings.height());
            counts.push(iterations_for_point(
                point,
                settings.max_iterations(),
                settings.escape_radius(),
            ));
        }

        rows.push(counts);
    }

    rows
}

/// Task wrapper around [`compute_region_matrix`], schedulable on the worker
/// pool.
pub struct RegionTask {
    viewport: Viewport,
    settings: RenderSettings,
    region: PixelRegion,
}

impl RegionTask {
    #[must_use]
    pub fn new(viewport: Viewport, settings: RenderSettings, region: PixelRegion) -> Self {
        Self {
            viewport,
            settings,
            region,
        }
    }
}

impl Task for RegionTask {
    type Output = PixelMatrix;

    fn start<R>(self, receiver: R)
    where
        R: Receiver<PixelMatrix> + Send + 'static,
    {
        receiver.value(compute_region_matrix(
            &self.viewport,
            self.settings,
            self.region,
        ));
    }
}
