use crate::task::{Receiver, Task, TaskError};

/// Task adaptor that applies a transformation to the upstream value.
///
/// Errors and stop signals bypass the transformation entirely.
pub struct Then<T, F> {
    task: T,
    transform: F,
}

impl<T, F> Then<T, F> {
    pub(crate) fn new(task: T, transform: F) -> Self {
        Self { task, transform }
    }
}

impl<T, F, U> Task for Then<T, F>
where
    T: Task,
    F: FnOnce(T::Output) -> U + Send + 'static,
{
    type Output = U;

    fn start<R>(self, receiver: R)
    where
        R: Receiver<U> + Send + 'static,
    {
        self.task.start(ThenReceiver {
            downstream: receiver,
            transform: self.transform,
        });
    }
}

struct ThenReceiver<R, F> {
    downstream: R,
    transform: F,
}

impl<In, U, R, F> Receiver<In> for ThenReceiver<R, F>
where
    F: FnOnce(In) -> U,
    R: Receiver<U>,
{
    fn value(self, value: In) {
        self.downstream.value((self.transform)(value));
    }

    fn error(self, error: TaskError) {
        self.downstream.error(error);
    }

    fn stopped(self) {
        self.downstream.stopped();
    }
}
