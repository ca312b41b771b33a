use crate::core::data::render_settings::RenderSettings;
use crate::core::util::pixel_to_complex::pixel_to_complex;
use crate::pipeline::ports::{EventSource, InputEvent, PointerButton};
use crate::pipeline::state::AppState;
use crate::task::{Receiver, Task};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Minimum delay between two continuous-zoom steps while a button is held.
pub const ZOOM_INTERVAL: Duration = Duration::from_millis(100);

/// Per-step zoom factor: applied directly on a left hold (zoom in), inverted
/// on a right hold (zoom out).
pub const ZOOM_FACTOR: f64 = 0.8;

/// Pipeline stage that drains pending input and applies zoom-while-held to
/// the shared viewport.
///
/// Completes `Stopped` once the exit flag is set, which propagates through
/// the rest of the frame's stages and ends the driver loop.
pub struct InputStage<E> {
    events: Arc<Mutex<E>>,
    state: Arc<Mutex<AppState>>,
    settings: RenderSettings,
}

impl<E: EventSource> InputStage<E> {
    #[must_use]
    pub fn new(
        events: Arc<Mutex<E>>,
        state: Arc<Mutex<AppState>>,
        settings: RenderSettings,
    ) -> Self {
        Self {
            events,
            state,
            settings,
        }
    }
}

impl<E: EventSource> Task for InputStage<E> {
    type Output = ();

    fn start<R>(self, receiver: R)
    where
        R: Receiver<()> + Send + 'static,
    {
        let mut events = self.events.lock().unwrap();
        let mut state = self.state.lock().unwrap();

        drain_events(&mut *events, &mut state);
        apply_continuous_zoom(&*events, &mut state, self.settings);

        if state.should_exit {
            drop(state);
            receiver.stopped();
        } else {
            drop(state);
            receiver.value(());
        }
    }
}

fn drain_events<E: EventSource>(events: &mut E, state: &mut AppState) {
    while let Some(event) = events.poll_event() {
        match event {
            InputEvent::Closed => state.should_exit = true,
            InputEvent::ButtonPressed(PointerButton::Left) => {
                state.left_pressed = true;
                state.needs_recompute = true;
            }
            InputEvent::ButtonPressed(PointerButton::Right) => {
                state.right_pressed = true;
                state.needs_recompute = true;
            }
            InputEvent::ButtonReleased(PointerButton::Left) => state.left_pressed = false,
            InputEvent::ButtonReleased(PointerButton::Right) => state.right_pressed = false,
            InputEvent::Other => {}
        }
    }
}

fn apply_continuous_zoom<E: EventSource>(
    events: &E,
    state: &mut AppState,
    settings: RenderSettings,
) {
    if !state.left_pressed && !state.right_pressed {
        return;
    }

    if state.zoom_timer.elapsed() < ZOOM_INTERVAL {
        return;
    }

    let Some((x, y)) = events.pointer_position() else {
        return;
    };

    let inside_raster =
        x >= 0 && y >= 0 && (x as u32) < settings.width() && (y as u32) < settings.height();
    if !inside_raster {
        return;
    }

    let target = pixel_to_complex(
        x as u32,
        y as u32,
        &state.viewport,
        settings.width(),
        settings.height(),
    );

    // Left wins when both buttons are held.
    let zoom = if state.left_pressed {
        ZOOM_FACTOR
    } else {
        1.0 / ZOOM_FACTOR
    };

    state.viewport = state.viewport.recentred(target, zoom);
    state.needs_recompute = true;
    state.zoom_timer = Instant::now();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;
    use crate::task::sync_wait;
    use std::collections::VecDeque;

    struct FakeEvents {
        queue: VecDeque<InputEvent>,
        pointer: Option<(i32, i32)>,
    }

    impl FakeEvents {
        fn new(events: &[InputEvent], pointer: Option<(i32, i32)>) -> Arc<Mutex<Self>> {
            Arc::new(Mutex::new(Self {
                queue: events.iter().copied().collect(),
                pointer,
            }))
        }
    }

    impl EventSource for FakeEvents {
        fn poll_event(&mut self) -> Option<InputEvent> {
            self.queue.pop_front()
        }

        fn pointer_position(&self) -> Option<(i32, i32)> {
            self.pointer
        }
    }

    fn settings() -> RenderSettings {
        RenderSettings::new(100, 80, 64, 2.0).unwrap()
    }

    fn elapsed_zoom_state() -> Arc<Mutex<AppState>> {
        let mut state = AppState::default();
        state.zoom_timer = Instant::now() - ZOOM_INTERVAL;
        Arc::new(Mutex::new(state))
    }

    #[test]
    fn test_close_event_stops_the_stage() {
        let events = FakeEvents::new(&[InputEvent::Closed], None);
        let state = Arc::new(Mutex::new(AppState::default()));

        let outcome = sync_wait(InputStage::new(events, Arc::clone(&state), settings()));

        assert!(matches!(outcome, Ok(None)));
        assert!(state.lock().unwrap().should_exit);
    }

    #[test]
    fn test_button_press_sets_pressed_and_recompute_flags() {
        let events = FakeEvents::new(&[InputEvent::ButtonPressed(PointerButton::Left)], None);
        let state = Arc::new(Mutex::new(AppState::default()));
        state.lock().unwrap().needs_recompute = false;

        let outcome = sync_wait(InputStage::new(events, Arc::clone(&state), settings()));

        assert!(matches!(outcome, Ok(Some(()))));
        let state = state.lock().unwrap();
        assert!(state.left_pressed);
        assert!(state.needs_recompute);
    }

    #[test]
    fn test_button_release_clears_pressed_flag_without_recompute() {
        let events = FakeEvents::new(&[InputEvent::ButtonReleased(PointerButton::Right)], None);
        let state = Arc::new(Mutex::new(AppState::default()));
        {
            let mut state = state.lock().unwrap();
            state.right_pressed = true;
            state.needs_recompute = false;
        }

        sync_wait(InputStage::new(events, Arc::clone(&state), settings())).unwrap();

        let state = state.lock().unwrap();
        assert!(!state.right_pressed);
        assert!(!state.needs_recompute);
    }

    #[test]
    fn test_ignored_events_change_nothing() {
        let events = FakeEvents::new(&[InputEvent::Other, InputEvent::Other], None);
        let state = Arc::new(Mutex::new(AppState::default()));
        state.lock().unwrap().needs_recompute = false;

        let outcome = sync_wait(InputStage::new(events, Arc::clone(&state), settings()));

        assert!(matches!(outcome, Ok(Some(()))));
        let state = state.lock().unwrap();
        assert!(!state.needs_recompute);
        assert!(!state.left_pressed);
        assert!(!state.right_pressed);
    }

    #[test]
    fn test_held_left_button_zooms_in_after_interval() {
        let events = FakeEvents::new(&[], Some((50, 40)));
        let state = elapsed_zoom_state();
        state.lock().unwrap().left_pressed = true;
        let viewport_before = state.lock().unwrap().viewport;

        sync_wait(InputStage::new(events, Arc::clone(&state), settings())).unwrap();

        let state = state.lock().unwrap();
        assert!(state.viewport.width() < viewport_before.width());
        assert!(state.viewport.height() < viewport_before.height());
        assert!(state.needs_recompute);
    }

    #[test]
    fn test_zoom_keeps_the_target_point_on_the_same_pixel() {
        let settings = settings();
        let events = FakeEvents::new(&[], Some((30, 20)));
        let state = elapsed_zoom_state();
        state.lock().unwrap().left_pressed = true;

        let viewport_before = state.lock().unwrap().viewport;
        let target_before =
            pixel_to_complex(30, 20, &viewport_before, settings.width(), settings.height());

        sync_wait(InputStage::new(events, Arc::clone(&state), settings)).unwrap();

        let viewport_after = state.lock().unwrap().viewport;
        // Map the original complex target back to pixel coordinates in the
        // new viewport; it must land on the same pixel.
        let col = (target_before.real - viewport_after.x_min()) / viewport_after.width()
            * f64::from(settings.width());
        let row = (target_before.imag - viewport_after.y_min()) / viewport_after.height()
            * f64::from(settings.height());

        assert!((col - 30.0).abs() < 1e-6, "pixel column drifted to {}", col);
        assert!((row - 20.0).abs() < 1e-6, "pixel row drifted to {}", row);
    }

    #[test]
    fn test_held_right_button_zooms_out() {
        let events = FakeEvents::new(&[], Some((50, 40)));
        let state = elapsed_zoom_state();
        state.lock().unwrap().right_pressed = true;
        let viewport_before = state.lock().unwrap().viewport;

        sync_wait(InputStage::new(events, Arc::clone(&state), settings())).unwrap();

        let state = state.lock().unwrap();
        assert!(state.viewport.width() > viewport_before.width());
        assert!(state.viewport.height() > viewport_before.height());
    }

    #[test]
    fn test_no_zoom_before_the_interval_elapses() {
        let events = FakeEvents::new(&[], Some((50, 40)));
        let state = Arc::new(Mutex::new(AppState::default()));
        state.lock().unwrap().left_pressed = true;
        let viewport_before = state.lock().unwrap().viewport;

        sync_wait(InputStage::new(events, Arc::clone(&state), settings())).unwrap();

        assert_eq!(state.lock().unwrap().viewport, viewport_before);
    }

    #[test]
    fn test_no_zoom_when_pointer_is_outside_the_raster() {
        for pointer in [Some((-1, 10)), Some((10, -1)), Some((100, 10)), Some((10, 80)), None] {
            let events = FakeEvents::new(&[], pointer);
            let state = elapsed_zoom_state();
            state.lock().unwrap().left_pressed = true;
            let viewport_before = state.lock().unwrap().viewport;

            sync_wait(InputStage::new(events, Arc::clone(&state), settings())).unwrap();

            assert_eq!(state.lock().unwrap().viewport, viewport_before);
        }
    }

    #[test]
    fn test_no_zoom_without_a_held_button() {
        let events = FakeEvents::new(&[], Some((50, 40)));
        let state = elapsed_zoom_state();
        let viewport_before = state.lock().unwrap().viewport;

        sync_wait(InputStage::new(events, Arc::clone(&state), settings())).unwrap();

        assert_eq!(state.lock().unwrap().viewport, viewport_before);
    }

    #[test]
    fn test_viewport_mutation_is_confined_to_this_stage() {
        // A drained queue with no held button leaves every field untouched.
        let events = FakeEvents::new(&[], None);
        let state = Arc::new(Mutex::new(AppState::new(
            Viewport::new(-1.0, 1.0, -0.5, 0.5).unwrap(),
        )));
        let viewport_before = state.lock().unwrap().viewport;

        sync_wait(InputStage::new(events, Arc::clone(&state), settings())).unwrap();

        assert_eq!(state.lock().unwrap().viewport, viewport_before);
    }
}
