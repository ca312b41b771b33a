use crate::core::data::render_result::RenderResult;
use crate::pipeline::ports::FrameSink;
use crate::task::{Receiver, Task};
use std::sync::{Arc, Mutex};

/// Presentation stage: hands the frame's colour matrix to the backend.
///
/// An empty result (the short-circuit case) draws nothing and completes
/// normally, leaving the previously presented frame on screen.
pub struct PresentStage<S> {
    result: RenderResult,
    sink: Arc<Mutex<S>>,
}

impl<S: FrameSink> PresentStage<S> {
    #[must_use]
    pub fn new(result: RenderResult, sink: Arc<Mutex<S>>) -> Self {
        Self { result, sink }
    }
}

impl<S: FrameSink> Task for PresentStage<S> {
    type Output = ();

    fn start<R>(self, receiver: R)
    where
        R: Receiver<()> + Send + 'static,
    {
        if self.result.is_empty() {
            receiver.value(());
            return;
        }

        let mut sink = self.sink.lock().unwrap();

        for (y, row) in self.result.colours.iter().enumerate() {
            for (x, &colour) in row.iter().enumerate() {
                sink.set_pixel(x as u32, y as u32, colour);
            }
        }

        let outcome = sink.commit().and_then(|()| sink.present());
        drop(sink);

        match outcome {
            Ok(()) => receiver.value(()),
            Err(error) => receiver.error(error),
        }
    }
}
