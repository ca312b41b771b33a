//! Minimal composable async-work unit with exactly-once completion semantics.
//!
//! A [`Task`] is a cold, deferred computation: nothing runs until [`Task::start`]
//! is called with a continuation. The continuation is a [`Receiver`] with one
//! handler per outcome (value, error, stopped), and a started task invokes
//! exactly one of them exactly once. Both traits consume `self`, so "never
//! touch the continuation again" is enforced by the compiler rather than by
//! convention.
//!
//! Composition preserves the single-completion contract:
//! - [`Task::then`] transforms the success value,
//! - [`Task::let_value`] sequences a dependent task after the value,
//! - [`Task::on`] moves execution onto a [`worker_pool::WorkerPool`] thread,
//! - [`when_all`] fans out a batch of tasks and joins their results,
//! - [`sync_wait`] blocks the calling thread until the single completion
//!   arrives.

mod let_value;
mod on_pool;
mod sync_wait;
mod then;
mod when_all;
pub mod worker_pool;

pub use let_value::LetValue;
pub use on_pool::OnPool;
pub use sync_wait::{SyncWaitError, sync_wait};
pub use then::Then;
pub use when_all::{WhenAll, when_all};
pub use worker_pool::{PoolScheduler, WorkerPool};

use std::error::Error;

/// Opaque failure cause carried by a task.
///
/// Intermediate stages forward it untouched; only the ultimate caller
/// interprets it.
pub type TaskError = Box<dyn Error + Send>;

/// The single outcome signal of a task.
#[derive(Debug)]
pub enum Completion<T> {
    /// The task produced its value.
    Value(T),
    /// The task failed with an opaque cause.
    Error(TaskError),
    /// The task observed a stop request; this is the normal shutdown path,
    /// not an error.
    Stopped,
}

/// Continuation passed to [`Task::start`].
///
/// Exactly one of the three handlers is invoked, exactly once. Every handler
/// consumes the receiver.
pub trait Receiver<T>: Sized {
    fn value(self, value: T);
    fn error(self, error: TaskError);
    fn stopped(self);
}

/// A cold unit of deferred work.
///
/// Starting is the only operation that triggers execution; a task that is
/// never started never runs. Receivers must be `Send + 'static` because a
/// task may hand its continuation to a worker thread (see [`OnPool`]); tasks
/// themselves carry no such bound and may own thread-local resources when
/// they are started inline.
pub trait Task: Sized {
    type Output;

    fn start<R>(self, receiver: R)
    where
        R: Receiver<Self::Output> + Send + 'static;

    /// Transforms the success value, forwarding errors and stops unchanged.
    fn then<F, U>(self, transform: F) -> Then<Self, F>
    where
        F: FnOnce(Self::Output) -> U,
    {
        Then::new(self, transform)
    }

    /// Sequences a dependent task built from this task's value.
    fn let_value<F, Next>(self, bind: F) -> LetValue<Self, F>
    where
        F: FnOnce(Self::Output) -> Next,
        Next: Task,
    {
        LetValue::new(self, bind)
    }

    /// Starts this task on one of the scheduler's worker threads.
    fn on(self, scheduler: PoolScheduler) -> OnPool<Self> {
        OnPool::new(self, scheduler)
    }
}
