//! The frame pipeline: input, render decision, presentation and throttling,
//! each expressed as a stage over the task abstraction and driven in a loop
//! by a single orchestrating thread.
//!
//! Stages share [`state::AppState`] strictly between synchronization points;
//! the only real parallelism lives behind the render-decision stage's
//! [`ports::FrameSource`], where region tasks fan out across the worker
//! pool.

pub mod driver;
pub mod input_stage;
pub mod ports;
pub mod present_stage;
pub mod render_stage;
pub mod state;

pub use driver::{FpsLimiter, FrameClock, run_pipeline};
pub use input_stage::InputStage;
pub use ports::{EventSource, FrameSink, FrameSource, InputEvent, PointerButton};
pub use present_stage::PresentStage;
pub use render_stage::ComputeIfNeeded;
pub use state::AppState;
