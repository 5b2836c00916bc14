/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Provides a [`Spawn`] trait that runs a future to completion in the background,
//! and implementations of `Spawn` for different async runtimes.

use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Executor abstraction: accepts a task and drives it to completion independently of the caller.
pub trait Spawn: Debug + Send + Sync {
    /// Submits `task` for execution. Returns immediately.
    fn spawn(&self, task: Task);
}

impl<T> Spawn for Box<T>
where
    T: Spawn,
    T: ?Sized,
{
    fn spawn(&self, task: Task) {
        T::spawn(self, task)
    }
}

impl<T> Spawn for Arc<T>
where
    T: Spawn,
    T: ?Sized,
{
    fn spawn(&self, task: Task) {
        T::spawn(self, task)
    }
}

/// Wrapper type for sharable `Spawn`
#[derive(Clone, Debug)]
pub struct SharedSpawn(Arc<dyn Spawn>);

impl SharedSpawn {
    /// Create a new `SharedSpawn` from `Spawn`
    pub fn new(spawn: impl Spawn + 'static) -> Self {
        Self(Arc::new(spawn))
    }
}

impl From<Arc<dyn Spawn>> for SharedSpawn {
    fn from(spawn: Arc<dyn Spawn>) -> Self {
        SharedSpawn(spawn)
    }
}

impl Spawn for SharedSpawn {
    fn spawn(&self, task: Task) {
        self.0.spawn(task)
    }
}

/// A unit of background work handed to a [`Spawn`] implementation.
#[must_use]
pub struct Task(Pin<Box<dyn Future<Output = ()> + Send + 'static>>);

impl Debug for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task")
    }
}

impl Task {
    /// Create a new [`Task`]
    ///
    /// The provided future will be Boxed.
    pub fn new(future: impl Future<Output = ()> + Send + 'static) -> Task {
        Task(Box::pin(future))
    }
}

impl Future for Task {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0.as_mut().poll(cx)
    }
}

/// Implementation of [`Spawn`] backed by a Tokio runtime handle.
#[cfg(feature = "rt-tokio")]
#[derive(Debug, Clone)]
pub struct TokioSpawn {
    handle: tokio::runtime::Handle,
}

#[cfg(feature = "rt-tokio")]
impl TokioSpawn {
    /// Spawn onto the runtime that owns `handle`
    pub fn from_handle(handle: tokio::runtime::Handle) -> Self {
        TokioSpawn { handle }
    }

    /// Spawn onto the runtime the caller is currently running inside of, if any
    pub fn current() -> Option<Self> {
        tokio::runtime::Handle::try_current()
            .ok()
            .map(Self::from_handle)
    }
}

#[cfg(feature = "rt-tokio")]
impl Spawn for TokioSpawn {
    fn spawn(&self, task: Task) {
        // the JoinHandle is dropped; the task detaches and runs to completion
        let _ = self.handle.spawn(task);
    }
}

#[cfg(feature = "rt-tokio")]
/// Returns a default spawn implementation based on the features enabled and the calling context
///
/// With `rt-tokio`, this is the Tokio runtime the caller is running inside of. Outside of a
/// runtime there is no default and `None` is returned.
pub fn default_spawn() -> Option<SharedSpawn> {
    TokioSpawn::current().map(SharedSpawn::new)
}

#[cfg(not(feature = "rt-tokio"))]
/// Returns a default spawn implementation based on the features enabled
pub fn default_spawn() -> Option<SharedSpawn> {
    None
}

#[cfg(all(test, feature = "rt-tokio"))]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[test]
    fn no_default_outside_runtime() {
        assert!(default_spawn().is_none());
    }

    #[tokio::test]
    async fn default_inside_runtime() {
        assert!(default_spawn().is_some());
    }

    #[tokio::test]
    async fn tasks_run_to_completion() {
        let spawn = SharedSpawn::new(TokioSpawn::current().unwrap());
        let (tx, rx) = oneshot::channel();
        spawn.spawn(Task::new(async move {
            tx.send(42).unwrap();
        }));
        assert_eq!(rx.await.unwrap(), 42);
    }

    #[test]
    fn handle_from_another_thread() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .build()
            .unwrap();
        let spawn = TokioSpawn::from_handle(rt.handle().clone());
        let (tx, rx) = std::sync::mpsc::channel();
        spawn.spawn(Task::new(async move {
            tx.send("done").unwrap();
        }));
        assert_eq!(rx.recv().unwrap(), "done");
    }
}
