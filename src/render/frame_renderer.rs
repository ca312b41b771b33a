use crate::core::colour_map::iterations_to_colour;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_region::PixelRegion;
use crate::core::data::render_result::{PixelMatrix, RenderResult};
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::viewport::Viewport;
use crate::core::util::split_rows_into_bands::split_rows_into_bands;
use crate::pipeline::ports::FrameSource;
use crate::render::region_task::RegionTask;
use crate::task::{Task, TaskError, WorkerPool, sync_wait, when_all};
use std::num::NonZeroUsize;
use std::thread;

/// Owns the worker pool and turns one frame request into a fan-out of region
/// tasks joined back into a single [`RenderResult`].
pub struct FrameRenderer {
    pool: WorkerPool,
    bands: usize,
}

impl FrameRenderer {
    /// One band per worker keeps every thread busy without oversplitting.
    #[must_use]
    pub fn new(workers: NonZeroUsize) -> Self {
        Self {
            pool: WorkerPool::new(workers),
            bands: workers.get(),
        }
    }

    #[must_use]
    pub fn with_available_parallelism() -> Self {
        Self::new(thread::available_parallelism().unwrap_or(NonZeroUsize::MIN))
    }

    #[must_use]
    pub fn band_count(&self) -> usize {
        self.bands
    }

    /// Returns the cold frame task: `bands` region tasks scheduled
    /// concurrently onto the pool, joined once all complete, then reassembled
    /// into the full-raster matrices.
    ///
    /// Reassembly positions each band by the same region list used for the
    /// split, so the result is independent of completion order.
    pub fn render_task(
        &self,
        viewport: Viewport,
        settings: RenderSettings,
    ) -> impl Task<Output = RenderResult> + use<> {
        let regions = split_rows_into_bands(settings.width(), settings.height(), self.bands);
        let scheduler = self.pool.scheduler();

        let region_tasks: Vec<_> = regions
            .iter()
            .map(|&region| RegionTask::new(viewport, settings, region).on(scheduler.clone()))
            .collect();

        when_all(region_tasks)
            .then(move |matrices| assemble_frame(viewport, settings, &regions, matrices))
    }
}

impl FrameSource for FrameRenderer {
    /// Blocking fan-in barrier: suspends the calling thread until every
    /// region task has completed. Worker threads are never blocked here.
    fn compute_frame(
        &self,
        viewport: Viewport,
        settings: RenderSettings,
    ) -> Result<Option<RenderResult>, TaskError> {
        sync_wait(self.render_task(viewport, settings))
    }
}

fn assemble_frame(
    viewport: Viewport,
    settings: RenderSettings,
    regions: &[PixelRegion],
    matrices: Vec<PixelMatrix>,
) -> RenderResult {
    let width = settings.width() as usize;
    let height = settings.height() as usize;

    let mut iterations = vec![vec![0u32; width]; height];
    let mut colours = vec![vec![Colour::BLACK; width]; height];

    for (region, matrix) in regions.iter().zip(matrices) {
        for (row_offset, row) in matrix.into_iter().enumerate() {
            let raster_row = region.start_row as usize + row_offset;

            for (col_offset, count) in row.into_iter().enumerate() {
                let raster_col = region.start_col as usize + col_offset;

                iterations[raster_row][raster_col] = count;
                colours[raster_row][raster_col] =
                    iterations_to_colour(count, settings.max_iterations());
            }
        }
    }

    RenderResult {
        viewport,
        settings,
        iterations,
        colours,
    }
}
