use crate::pipeline::ports::{EventSource, InputEvent, PointerButton};
use std::collections::VecDeque;
use std::time::Duration;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::EventLoopExtPumpEvents;

/// [`EventSource`] backed by a winit event loop in pump mode.
///
/// The event loop is polled with a zero timeout on demand, translating
/// window events into pipeline events as they arrive. Owning the loop ties
/// this source to the thread that created it, which is also the thread the
/// pipeline driver runs on.
pub struct WinitEventSource {
    event_loop: EventLoop<()>,
    queue: VecDeque<InputEvent>,
    cursor: Option<(i32, i32)>,
}

impl WinitEventSource {
    #[must_use]
    pub fn new(event_loop: EventLoop<()>) -> Self {
        Self {
            event_loop,
            queue: VecDeque::new(),
            cursor: None,
        }
    }

    fn pump(&mut self) {
        let Self {
            event_loop,
            queue,
            cursor,
        } = self;

        let _ = event_loop.pump_events(Some(Duration::ZERO), |event, _target| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => queue.push_back(InputEvent::Closed),
                WindowEvent::CursorMoved { position, .. } => {
                    *cursor = Some((position.x as i32, position.y as i32));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let button = match button {
                        MouseButton::Left => Some(PointerButton::Left),
                        MouseButton::Right => Some(PointerButton::Right),
                        _ => None,
                    };

                    if let Some(button) = button {
                        queue.push_back(match state {
                            ElementState::Pressed => InputEvent::ButtonPressed(button),
                            ElementState::Released => InputEvent::ButtonReleased(button),
                        });
                    }
                }
                _ => {}
            }
        });
    }
}

impl EventSource for WinitEventSource {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if self.queue.is_empty() {
            self.pump();
        }

        self.queue.pop_front()
    }

    fn pointer_position(&self) -> Option<(i32, i32)> {
        self.cursor
    }
}
