use mandelbrot_explorer::core::data::render_settings::RenderSettings;
use mandelbrot_explorer::pipeline::state::AppState;
use mandelbrot_explorer::{FrameRenderer, PixelsSink, WinitEventSource, run_pipeline};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const MAX_ITERATIONS: u32 = 256;
const ESCAPE_RADIUS: f64 = 2.0;
const TARGET_FPS: u32 = 60;

fn main() -> ExitCode {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(f64::from(WIDTH), f64::from(HEIGHT)))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let settings = match RenderSettings::new(WIDTH, HEIGHT, MAX_ITERATIONS, ESCAPE_RADIUS) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Invalid render settings: {error}");
            return ExitCode::FAILURE;
        }
    };

    let sink = match PixelsSink::new(window, WIDTH, HEIGHT) {
        Ok(sink) => Arc::new(Mutex::new(sink)),
        Err(error) => {
            eprintln!("Failed to set up presentation: {error}");
            return ExitCode::FAILURE;
        }
    };

    let events = Arc::new(Mutex::new(WinitEventSource::new(event_loop)));
    let renderer = Arc::new(FrameRenderer::with_available_parallelism());
    let state = Arc::new(Mutex::new(AppState::default()));

    println!("Mandelbrot Explorer");
    println!("  hold left mouse button to zoom in, right to zoom out");
    println!("  rendering {WIDTH}x{HEIGHT} on {} workers", renderer.band_count());

    match run_pipeline(events, renderer, sink, state, settings, TARGET_FPS) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Render error: {error}");
            ExitCode::FAILURE
        }
    }
}
