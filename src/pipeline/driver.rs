use crate::core::data::render_settings::RenderSettings;
use crate::pipeline::input_stage::InputStage;
use crate::pipeline::ports::{EventSource, FrameSink, FrameSource};
use crate::pipeline::present_stage::PresentStage;
use crate::pipeline::render_stage::ComputeIfNeeded;
use crate::pipeline::state::AppState;
use crate::task::{Task, TaskError, sync_wait};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Measures how long the current frame has been in flight.
pub struct FrameClock {
    frame_start: Instant,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
        }
    }

    pub fn reset(&mut self) {
        self.frame_start = Instant::now();
    }

    #[must_use]
    pub fn frame_time(&self) -> Duration {
        self.frame_start.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleeps away the remainder of each frame's time budget.
pub struct FpsLimiter {
    clock: FrameClock,
    target_frame_time: Duration,
}

impl FpsLimiter {
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            clock: FrameClock::new(),
            target_frame_time: Duration::from_millis(1000 / u64::from(target_fps.max(1))),
        }
    }

    pub fn wait(&mut self) {
        let elapsed = self.clock.frame_time();

        if elapsed < self.target_frame_time {
            thread::sleep(self.target_frame_time - elapsed);
        }

        self.clock.reset();
    }
}

/// Drives the frame pipeline until the exit flag is observed.
///
/// Each iteration builds the task DAG
/// `input -> compute-if-needed -> present -> throttle` and blocks on its
/// single completion. A `Stopped` completion is the normal shutdown path and
/// returns `Ok(())`; a task error is fatal for the run and handed back to
/// the caller, which decides how to report it.
pub fn run_pipeline<E, F, S>(
    events: Arc<Mutex<E>>,
    source: Arc<F>,
    sink: Arc<Mutex<S>>,
    state: Arc<Mutex<AppState>>,
    settings: RenderSettings,
    target_fps: u32,
) -> Result<(), TaskError>
where
    E: EventSource,
    F: FrameSource + Send + Sync + 'static,
    S: FrameSink + Send + 'static,
{
    let limiter = Arc::new(Mutex::new(FpsLimiter::new(target_fps)));

    loop {
        let frame = InputStage::new(Arc::clone(&events), Arc::clone(&state), settings)
            .let_value({
                let state = Arc::clone(&state);
                let source = Arc::clone(&source);
                move |()| ComputeIfNeeded::new(state, source, settings)
            })
            .let_value({
                let sink = Arc::clone(&sink);
                move |result| PresentStage::new(result, sink)
            })
            .then({
                let limiter = Arc::clone(&limiter);
                move |()| limiter.lock().unwrap().wait()
            });

        match sync_wait(frame)? {
            Some(()) => continue,
            None => return Ok(()),
        }
    }
}
