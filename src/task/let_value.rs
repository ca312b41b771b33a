use crate::task::{Receiver, Task, TaskError};

/// Task adaptor that sequences a dependent task after the upstream value.
///
/// On success the upstream value is fed to the bind function and the task it
/// returns is started with the original downstream continuation, so the
/// composed unit still completes exactly once. Errors and stop signals skip
/// the bind function.
pub struct LetValue<T, F> {
    task: T,
    bind: F,
}

impl<T, F> LetValue<T, F> {
    pub(crate) fn new(task: T, bind: F) -> Self {
        Self { task, bind }
    }
}

impl<T, F, Next> Task for LetValue<T, F>
where
    T: Task,
    F: FnOnce(T::Output) -> Next + Send + 'static,
    Next: Task,
{
    type Output = Next::Output;

    fn start<R>(self, receiver: R)
    where
        R: Receiver<Next::Output> + Send + 'static,
    {
        self.task.start(LetValueReceiver {
            downstream: receiver,
            bind: self.bind,
        });
    }
}

struct LetValueReceiver<R, F> {
    downstream: R,
    bind: F,
}

impl<In, Next, R, F> Receiver<In> for LetValueReceiver<R, F>
where
    F: FnOnce(In) -> Next,
    Next: Task,
    R: Receiver<Next::Output> + Send + 'static,
{
    fn value(self, value: In) {
        (self.bind)(value).start(self.downstream);
    }

    fn error(self, error: TaskError) {
        self.downstream.error(error);
    }

    fn stopped(self) {
        self.downstream.stopped();
    }
}
