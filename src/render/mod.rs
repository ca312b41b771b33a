//! Parallel frame computation: a frame is split into horizontal row bands,
//! each computed by a region task on the worker pool and joined back into a
//! single full-raster result.

pub mod frame_renderer;
pub mod region_task;

pub use frame_renderer::FrameRenderer;
pub use region_task::RegionTask;
