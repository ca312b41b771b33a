use crate::task::{Receiver, Task, TaskError};
use std::mem;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fan-out/fan-in combinator over a batch of homogeneous tasks.
///
/// Starting the combinator starts every child task; the aggregate completes
/// only once all of them have signalled. Results keep their submission index
/// regardless of completion order. The first error observed wins (which of
/// several concurrent failures is "first" is non-deterministic); a stop
/// signal wins over plain values when no error was seen.
pub struct WhenAll<T> {
    tasks: Vec<T>,
}

/// Builds a [`WhenAll`] over `tasks`. An empty batch completes immediately
/// with an empty result vector.
pub fn when_all<T: Task>(tasks: Vec<T>) -> WhenAll<T> {
    WhenAll { tasks }
}

struct JoinState<V, R> {
    slots: Mutex<Vec<Option<V>>>,
    first_error: Mutex<Option<TaskError>>,
    stopped: AtomicBool,
    pending: AtomicUsize,
    downstream: Mutex<Option<R>>,
}

impl<V, R> JoinState<V, R>
where
    R: Receiver<Vec<V>>,
{
    /// Called after every child signal; the last child to arrive delivers the
    /// aggregate completion.
    fn arrive(&self) {
        if self.pending.fetch_sub(1, Ordering::AcqRel) != 1 {
            return;
        }

        let downstream = self
            .downstream
            .lock()
            .unwrap()
            .take()
            .expect("aggregate completion delivered twice");

        if let Some(error) = self.first_error.lock().unwrap().take() {
            downstream.error(error);
        } else if self.stopped.load(Ordering::Acquire) {
            downstream.stopped();
        } else {
            let slots = mem::take(&mut *self.slots.lock().unwrap());
            let values = slots
                .into_iter()
                .map(|slot| slot.expect("child completed without a value"))
                .collect();
            downstream.value(values);
        }
    }
}

struct JoinReceiver<V, R> {
    index: usize,
    state: Arc<JoinState<V, R>>,
}

impl<V, R> Receiver<V> for JoinReceiver<V, R>
where
    R: Receiver<Vec<V>>,
{
    fn value(self, value: V) {
        self.state.slots.lock().unwrap()[self.index] = Some(value);
        self.state.arrive();
    }

    fn error(self, error: TaskError) {
        self.state.first_error.lock().unwrap().get_or_insert(error);
        self.state.arrive();
    }

    fn stopped(self) {
        self.state.stopped.store(true, Ordering::Release);
        self.state.arrive();
    }
}

impl<T> Task for WhenAll<T>
where
    T: Task,
    T::Output: Send + 'static,
{
    type Output = Vec<T::Output>;

    fn start<R>(self, receiver: R)
    where
        R: Receiver<Vec<T::Output>> + Send + 'static,
    {
        let pending = self.tasks.len();

        if pending == 0 {
            receiver.value(Vec::new());
            return;
        }

        let state = Arc::new(JoinState {
            slots: Mutex::new((0..pending).map(|_| None).collect()),
            first_error: Mutex::new(None),
            stopped: AtomicBool::new(false),
            pending: AtomicUsize::new(pending),
            downstream: Mutex::new(Some(receiver)),
        });

        for (index, task) in self.tasks.into_iter().enumerate() {
            task.start(JoinReceiver {
                index,
                state: Arc::clone(&state),
            });
        }
    }
}
