use crate::core::data::render_result::RenderResult;
use crate::core::data::render_settings::RenderSettings;
use crate::pipeline::ports::FrameSource;
use crate::pipeline::state::AppState;
use crate::task::{Receiver, Task};
use std::sync::{Arc, Mutex};

/// Render-decision stage: gates whether a frame is recomputed at all.
///
/// When the recompute flag is clear this short-circuits to an empty
/// [`RenderResult`] without touching the worker pool. Otherwise it waits on
/// the frame source's fan-in barrier and clears the flag only after the
/// computation succeeded, so a failed frame is retried by the next press of
/// the pipeline, not silently skipped.
pub struct ComputeIfNeeded<F> {
    state: Arc<Mutex<AppState>>,
    source: Arc<F>,
    settings: RenderSettings,
}

impl<F: FrameSource> ComputeIfNeeded<F> {
    #[must_use]
    pub fn new(state: Arc<Mutex<AppState>>, source: Arc<F>, settings: RenderSettings) -> Self {
        Self {
            state,
            source,
            settings,
        }
    }
}

impl<F: FrameSource> Task for ComputeIfNeeded<F> {
    type Output = RenderResult;

    fn start<R>(self, receiver: R)
    where
        R: Receiver<RenderResult> + Send + 'static,
    {
        let (needs_recompute, viewport) = {
            let state = self.state.lock().unwrap();
            (state.needs_recompute, state.viewport)
        };

        if !needs_recompute {
            receiver.value(RenderResult::empty(viewport, self.settings));
            return;
        }

        match self.source.compute_frame(viewport, self.settings) {
            Ok(Some(result)) => {
                self.state.lock().unwrap().needs_recompute = false;
                receiver.value(result);
            }
            Ok(None) => receiver.stopped(),
            Err(error) => receiver.error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::viewport::Viewport;
    use crate::task::test_support::StubError;
    use crate::task::{TaskError, sync_wait};
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum FakeOutcome {
        Frame,
        Stopped,
        Fails,
    }

    struct FakeSource {
        outcome: FakeOutcome,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(outcome: FakeOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FrameSource for FakeSource {
        fn compute_frame(
            &self,
            viewport: Viewport,
            settings: RenderSettings,
        ) -> Result<Option<RenderResult>, TaskError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match self.outcome {
                FakeOutcome::Frame => {
                    let width = settings.width() as usize;
                    let height = settings.height() as usize;
                    Ok(Some(RenderResult {
                        viewport,
                        settings,
                        iterations: vec![vec![1; width]; height],
                        colours: vec![vec![Colour::BLACK; width]; height],
                    }))
                }
                FakeOutcome::Stopped => Ok(None),
                FakeOutcome::Fails => Err(Box::new(StubError("region failed"))),
            }
        }
    }

    fn settings() -> RenderSettings {
        RenderSettings::new(40, 30, 40, 2.0).unwrap()
    }

    #[test]
    fn test_no_recompute_short_circuits_without_scheduling() {
        let source = FakeSource::new(FakeOutcome::Frame);
        let state = Arc::new(Mutex::new(AppState::default()));
        state.lock().unwrap().needs_recompute = false;

        let result = sync_wait(ComputeIfNeeded::new(state, Arc::clone(&source), settings()))
            .unwrap()
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(source.call_count(), 0);
    }

    #[test]
    fn test_empty_result_carries_the_current_viewport() {
        let source = FakeSource::new(FakeOutcome::Frame);
        let state = Arc::new(Mutex::new(AppState::new(
            Viewport::new(-1.0, 1.0, -0.5, 0.5).unwrap(),
        )));
        state.lock().unwrap().needs_recompute = false;

        let result = sync_wait(ComputeIfNeeded::new(
            Arc::clone(&state),
            source,
            settings(),
        ))
        .unwrap()
        .unwrap();

        assert_eq!(result.viewport, state.lock().unwrap().viewport);
    }

    #[test]
    fn test_recompute_produces_full_frame_and_clears_the_flag() {
        let source = FakeSource::new(FakeOutcome::Frame);
        let state = Arc::new(Mutex::new(AppState::default()));

        let result = sync_wait(ComputeIfNeeded::new(
            Arc::clone(&state),
            Arc::clone(&source),
            settings(),
        ))
        .unwrap()
        .unwrap();

        assert_eq!(result.iterations.len(), 30);
        assert_eq!(result.iterations[0].len(), 40);
        assert_eq!(source.call_count(), 1);
        assert!(!state.lock().unwrap().needs_recompute);
    }

    #[test]
    fn test_failed_computation_keeps_the_recompute_flag_set() {
        let source = FakeSource::new(FakeOutcome::Fails);
        let state = Arc::new(Mutex::new(AppState::default()));

        let outcome = sync_wait(ComputeIfNeeded::new(
            Arc::clone(&state),
            source,
            settings(),
        ));

        match outcome {
            Err(error) => assert_eq!(error.to_string(), "region failed"),
            other => panic!("expected error, got {:?}", other),
        }
        assert!(state.lock().unwrap().needs_recompute);
    }

    #[test]
    fn test_stopped_computation_propagates_and_keeps_the_flag() {
        let source = FakeSource::new(FakeOutcome::Stopped);
        let state = Arc::new(Mutex::new(AppState::default()));

        let outcome = sync_wait(ComputeIfNeeded::new(
            Arc::clone(&state),
            source,
            settings(),
        ));

        assert!(matches!(outcome, Ok(None)));
        assert!(state.lock().unwrap().needs_recompute);
    }
}
