use crate::core::data::colour::Colour;
use crate::pipeline::ports::FrameSink;
use crate::task::TaskError;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use std::fmt;
use winit::window::Window;

/// Error from the pixels surface, flattened to a message so it can travel
/// through the pipeline as a task error.
#[derive(Debug)]
pub struct SinkError {
    message: String,
}

impl SinkError {
    fn new(context: &str, source: &pixels::Error) -> Self {
        Self {
            message: format!("{context}: {source}"),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SinkError {}

/// [`FrameSink`] backed by a pixels framebuffer.
///
/// Pixels are staged in an RGBA buffer the size of the raster; `commit`
/// copies the staging buffer into the framebuffer and `present` renders it,
/// scaled to the window surface.
pub struct PixelsSink {
    pixels: Pixels<'static>,
    staging: Vec<u8>,
    width: u32,
}

impl PixelsSink {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, SinkError> {
        let surface_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, window);

        let pixels = Pixels::new(width, height, surface_texture)
            .map_err(|error| SinkError::new("failed to create pixels surface", &error))?;

        // Opaque black until the first frame is committed.
        let mut staging = vec![0u8; (width * height * 4) as usize];
        for pixel in staging.chunks_exact_mut(4) {
            pixel[3] = 255;
        }

        Ok(Self {
            pixels,
            staging,
            width,
        })
    }
}

impl FrameSink for PixelsSink {
    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        let offset = ((y * self.width + x) * 4) as usize;
        let Some(pixel) = self.staging.get_mut(offset..offset + 4) else {
            return;
        };

        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
        pixel[3] = 255;
    }

    fn commit(&mut self) -> Result<(), TaskError> {
        self.pixels.frame_mut().copy_from_slice(&self.staging);
        Ok(())
    }

    fn present(&mut self) -> Result<(), TaskError> {
        self.pixels
            .render()
            .map_err(|error| Box::new(SinkError::new("failed to present frame", &error)) as TaskError)
    }
}
