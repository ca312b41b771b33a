pub mod core;
pub mod pipeline;
pub mod render;
pub mod task;

#[cfg(feature = "gui")]
pub mod adapters;

pub use pipeline::run_pipeline;
pub use render::FrameRenderer;

#[cfg(feature = "gui")]
pub use adapters::{PixelsSink, WinitEventSource};
