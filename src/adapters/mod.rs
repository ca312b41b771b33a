//! Backend adapters binding the pipeline's ports to winit and pixels.
//!
//! Everything in here is gated behind the `gui` feature; the pipeline and
//! renderer are fully testable without a window.

pub mod pixels_sink;
pub mod winit_events;

pub use pixels_sink::PixelsSink;
pub use winit_events::WinitEventSource;
