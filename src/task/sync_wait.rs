use crate::task::{Completion, Receiver, Task, TaskError};
use std::error::Error;
use std::fmt;
use std::sync::mpsc::{Sender, channel};

/// A started task dropped its continuation without signalling.
///
/// This happens when a pooled job panics or when a job is placed on a pool
/// that has already shut down. Surfacing it as an error keeps the blocking
/// wait from hanging forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncWaitError;

impl fmt::Display for SyncWaitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task abandoned its continuation without completing")
    }
}

impl Error for SyncWaitError {}

struct ChannelReceiver<T> {
    sender: Sender<Completion<T>>,
}

impl<T: Send> Receiver<T> for ChannelReceiver<T> {
    fn value(self, value: T) {
        let _ = self.sender.send(Completion::Value(value));
    }

    fn error(self, error: TaskError) {
        let _ = self.sender.send(Completion::Error(error));
    }

    fn stopped(self) {
        let _ = self.sender.send(Completion::Stopped);
    }
}

/// Starts the task and blocks the calling thread until its single completion
/// arrives.
///
/// `Ok(Some(value))` on success, `Ok(None)` on a stop signal, `Err` on
/// failure. This is the synchronization point of the pipeline: only the
/// caller blocks, never a worker thread.
pub fn sync_wait<T>(task: T) -> Result<Option<T::Output>, TaskError>
where
    T: Task,
    T::Output: Send + 'static,
{
    let (sender, receiver) = channel();

    task.start(ChannelReceiver { sender });

    match receiver.recv() {
        Ok(Completion::Value(value)) => Ok(Some(value)),
        Ok(Completion::Error(error)) => Err(error),
        Ok(Completion::Stopped) => Ok(None),
        Err(_) => Err(Box::new(SyncWaitError)),
    }
}
