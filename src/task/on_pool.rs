use crate::task::worker_pool::PoolScheduler;
use crate::task::{Receiver, Task};

/// Task adaptor that starts the inner task on a worker-pool thread.
///
/// `start` only places the work and returns immediately; the continuation is
/// invoked from whichever worker picks the job up. No thread affinity is
/// guaranteed.
pub struct OnPool<T> {
    task: T,
    scheduler: PoolScheduler,
}

impl<T> OnPool<T> {
    pub(crate) fn new(task: T, scheduler: PoolScheduler) -> Self {
        Self { task, scheduler }
    }
}

impl<T> Task for OnPool<T>
where
    T: Task + Send + 'static,
{
    type Output = T::Output;

    fn start<R>(self, receiver: R)
    where
        R: Receiver<T::Output> + Send + 'static,
    {
        let Self { task, scheduler } = self;
        scheduler.execute(Box::new(move || task.start(receiver)));
    }
}
