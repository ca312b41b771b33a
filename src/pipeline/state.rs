use crate::core::data::viewport::Viewport;
use std::time::Instant;

/// Process-wide mutable state shared by the pipeline stages.
///
/// Only the orchestrating thread touches it, and only between pipeline
/// synchronization points: the input stage mutates it, the render-decision
/// stage reads and clears the recompute flag, and nothing else writes it.
/// Worker threads never see this type.
#[derive(Debug)]
pub struct AppState {
    pub should_exit: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub needs_recompute: bool,
    pub viewport: Viewport,
    /// Start of the current continuous-zoom interval.
    pub zoom_timer: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            should_exit: false,
            left_pressed: false,
            right_pressed: false,
            // The first frame always needs computing.
            needs_recompute: true,
            viewport,
            zoom_timer: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_requests_the_first_frame() {
        let state = AppState::default();

        assert!(state.needs_recompute);
        assert!(!state.should_exit);
        assert!(!state.left_pressed);
        assert!(!state.right_pressed);
    }
}
