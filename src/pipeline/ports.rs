//! Interface boundaries to the external collaborators: the input backend,
//! the frame computation and the presentation backend.

use crate::core::data::colour::Colour;
use crate::core::data::render_result::RenderResult;
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::viewport::Viewport;
use crate::task::TaskError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Discrete input event as delivered by the windowing backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Closed,
    ButtonPressed(PointerButton),
    ButtonReleased(PointerButton),
    /// Recognised by the backend but irrelevant to the pipeline.
    Other,
}

/// Pollable, non-blocking input backend.
pub trait EventSource {
    /// Next pending event, or `None` when the queue is drained.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Pointer position relative to the window, when known.
    fn pointer_position(&self) -> Option<(i32, i32)>;
}

/// Produces one frame's worth of pixel data, blocking until it is complete.
pub trait FrameSource {
    /// `Ok(None)` means the computation observed a stop request.
    fn compute_frame(
        &self,
        viewport: Viewport,
        settings: RenderSettings,
    ) -> Result<Option<RenderResult>, TaskError>;
}

/// Presentation backend accepting a 2D colour buffer.
///
/// Coordinates are raster coordinates matching the frame's
/// [`RenderSettings`] dimensions.
pub trait FrameSink {
    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour);

    /// Makes all pixels written so far part of the next presented frame.
    fn commit(&mut self) -> Result<(), TaskError>;

    /// Displays the committed buffer.
    fn present(&mut self) -> Result<(), TaskError>;
}
