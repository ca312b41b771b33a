use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver as JobReceiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size pool of worker threads onto which tasks can be placed.
///
/// The pool owns no computation logic; its single operation is placement.
/// Submission order is FIFO, but execution order across workers is
/// unordered: a placed job is only guaranteed to eventually run on some
/// worker thread. Workers are created at construction and joined when the
/// pool is dropped.
pub struct WorkerPool {
    workers: Vec<JoinHandle<()>>,
    sender: Option<Sender<Job>>,
}

/// Cheap cloneable handle used to place jobs on a [`WorkerPool`].
#[derive(Clone)]
pub struct PoolScheduler {
    sender: Sender<Job>,
}

impl WorkerPool {
    #[must_use]
    pub fn new(size: NonZeroUsize) -> Self {
        let (sender, receiver) = channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..size.get())
            .map(|_| {
                let receiver = Arc::clone(&receiver);
                thread::spawn(move || Self::worker_loop(&receiver))
            })
            .collect();

        Self {
            workers,
            sender: Some(sender),
        }
    }

    /// Creates a pool with one worker per available hardware thread.
    #[must_use]
    pub fn with_available_parallelism() -> Self {
        Self::new(thread::available_parallelism().unwrap_or(NonZeroUsize::MIN))
    }

    #[must_use]
    pub fn scheduler(&self) -> PoolScheduler {
        PoolScheduler {
            sender: self
                .sender
                .as_ref()
                .expect("sender is present until drop")
                .clone(),
        }
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    fn worker_loop(receiver: &Mutex<JobReceiver<Job>>) {
        loop {
            let job = match receiver.lock().unwrap().recv() {
                Ok(job) => job,
                Err(_) => break, // pool dropped its sender, shut down
            };

            // A panicking job must not take its worker down with it. The
            // panic surfaces to the waiter through the dropped continuation.
            let _ = panic::catch_unwind(AssertUnwindSafe(job));
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        drop(self.sender.take());

        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

impl PoolScheduler {
    /// Places a job for execution on one of the pool's workers.
    ///
    /// If the pool has already shut down the job is dropped; any continuation
    /// it carried is dropped with it, which waiters observe as an abandoned
    /// task.
    pub fn execute(&self, job: Job) {
        let _ = self.sender.send(job);
    }
}
