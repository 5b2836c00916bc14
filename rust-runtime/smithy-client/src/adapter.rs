/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Calling conventions built on top of a single operation future.
//!
//! [`Client::call`](crate::Client::call) produces one future per operation. The functions in this
//! module drive that future in three different ways:
//! - [`spawn_callable`] hands it to an executor and returns a [`Callable`] that resolves to the outcome
//! - [`spawn_with_handler`] hands it to an executor and invokes a handler with the outcome
//! - [`block_on`] waits for the outcome on the calling thread
//!
//! All three produce exactly one outcome per request and never retry.

use crate::SdkError;
use smithy_async::rt::spawn::{SharedSpawn, Spawn, Task};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// No executor was available to run the request
#[derive(Debug)]
#[non_exhaustive]
pub struct NoExecutor;

impl fmt::Display for NoExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no executor is configured to run this request in the background"
        )
    }
}

impl std::error::Error for NoExecutor {}

/// The background task driving a request was dropped before it produced an outcome
///
/// This happens when the executor shuts down while the request is in flight.
#[derive(Debug)]
#[non_exhaustive]
pub struct TaskDropped;

impl fmt::Display for TaskDropped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the task running this request was dropped before completing")
    }
}

impl std::error::Error for TaskDropped {}

/// Handle to a request running on an executor.
///
/// Awaiting a `Callable` yields the outcome of the request. Dropping it does not cancel the
/// request; the executor still runs it to completion and the outcome is discarded.
#[must_use]
pub struct Callable<T, E> {
    rx: oneshot::Receiver<Result<T, SdkError<E>>>,
}

impl<T, E> fmt::Debug for Callable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").finish()
    }
}

impl<T, E> Callable<T, E> {
    /// A `Callable` whose outcome is already known
    pub fn ready(outcome: Result<T, SdkError<E>>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(outcome);
        Callable { rx }
    }
}

impl<T, E> Future for Callable<T, E> {
    type Output = Result<T, SdkError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => Poll::Ready(Err(task_dropped())),
            Poll::Pending => Poll::Pending,
        }
    }
}

fn no_executor<E>() -> SdkError<E> {
    tracing::debug!("no executor available; failing the request without sending it");
    SdkError::ConstructionFailure(Box::new(NoExecutor))
}

fn task_dropped<E>() -> SdkError<E> {
    tracing::debug!("request task dropped before producing an outcome");
    SdkError::DispatchFailure(Box::new(TaskDropped))
}

/// Run `request` on `executor` and return a handle to its outcome.
///
/// Without an executor, the returned `Callable` immediately resolves to a
/// [`ConstructionFailure`](SdkError::ConstructionFailure) wrapping [`NoExecutor`]. The request
/// future is dropped without being polled.
pub fn spawn_callable<F, T, E>(executor: Option<&SharedSpawn>, request: F) -> Callable<T, E>
where
    F: Future<Output = Result<T, SdkError<E>>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let executor = match executor {
        Some(executor) => executor,
        None => return Callable::ready(Err(no_executor())),
    };
    let (tx, rx) = oneshot::channel();
    executor.spawn(Task::new(async move {
        // the receiver may have been dropped; the outcome is discarded in that case
        let _ = tx.send(request.await);
    }));
    Callable { rx }
}

/// Run `request` on `executor` and invoke `handler` with its outcome.
///
/// `handler` runs exactly once: on the executor once the request completes, or on the calling
/// thread before this function returns when no executor is available.
pub fn spawn_with_handler<F, T, E, H>(executor: Option<&SharedSpawn>, request: F, handler: H)
where
    F: Future<Output = Result<T, SdkError<E>>> + Send + 'static,
    H: FnOnce(Result<T, SdkError<E>>) + Send + 'static,
{
    match executor {
        Some(executor) => executor.spawn(Task::new(async move { handler(request.await) })),
        None => handler(Err(no_executor())),
    }
}

/// Wait for the outcome of `request` on the calling thread.
///
/// With an executor, the request runs there while this thread waits. Without one, the request is
/// driven by a current-thread runtime created for this call. In both cases this function must not
/// be called from within an async context.
pub fn block_on<F, T, E>(executor: Option<&SharedSpawn>, request: F) -> Result<T, SdkError<E>>
where
    F: Future<Output = Result<T, SdkError<E>>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    match executor {
        Some(executor) => {
            let (tx, rx) = std::sync::mpsc::sync_channel(1);
            executor.spawn(Task::new(async move {
                let _ = tx.send(request.await);
            }));
            rx.recv().unwrap_or_else(|_| Err(task_dropped()))
        }
        None => local_block_on(request),
    }
}

#[cfg(feature = "rt-tokio")]
fn local_block_on<F, T, E>(request: F) -> Result<T, SdkError<E>>
where
    F: Future<Output = Result<T, SdkError<E>>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| SdkError::ConstructionFailure(Box::new(err)))?;
    runtime.block_on(request)
}

#[cfg(not(feature = "rt-tokio"))]
fn local_block_on<F, T, E>(_request: F) -> Result<T, SdkError<E>>
where
    F: Future<Output = Result<T, SdkError<E>>>,
{
    Err(no_executor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smithy_async::rt::spawn::TokioSpawn;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct TestError;

    fn executor() -> SharedSpawn {
        SharedSpawn::new(TokioSpawn::current().expect("running inside a runtime"))
    }

    #[tokio::test]
    async fn callable_resolves_to_outcome() {
        let executor = executor();
        let callable = spawn_callable(Some(&executor), async {
            Ok::<_, SdkError<TestError>>(5)
        });
        assert_eq!(callable.await.unwrap(), 5);
    }

    #[tokio::test]
    async fn callable_without_executor_fails_immediately() {
        let polled = Arc::new(AtomicUsize::new(0));
        let counter = polled.clone();
        let callable = spawn_callable(None, async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, SdkError<TestError>>(5)
        });
        match callable.await {
            Err(SdkError::ConstructionFailure(err)) => assert!(err.is::<NoExecutor>()),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(polled.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn handler_runs_exactly_once() {
        let executor = executor();
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();
        let counter = calls.clone();
        spawn_with_handler(
            Some(&executor),
            async { Err::<(), _>(SdkError::<TestError>::DispatchFailure("boom".into())) },
            move |outcome| {
                counter.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(outcome.is_err());
            },
        );
        assert!(rx.await.unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_without_executor_runs_inline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        spawn_with_handler(
            None,
            async { Ok::<_, SdkError<TestError>>(()) },
            move |outcome| {
                assert!(matches!(outcome, Err(SdkError::ConstructionFailure(_))));
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn block_on_without_executor() {
        let outcome = block_on(None, async { Ok::<_, SdkError<TestError>>("done") });
        assert_eq!(outcome.unwrap(), "done");
    }

    #[test]
    fn block_on_with_executor() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .build()
            .unwrap();
        let executor = SharedSpawn::new(TokioSpawn::from_handle(rt.handle().clone()));
        let outcome = block_on(Some(&executor), async {
            Err::<(), _>(SdkError::<TestError>::ServiceError {
                raw: http::Response::new(smithy_http::result::ResponseBody::from("")),
                err: TestError,
            })
        });
        assert_eq!(outcome.unwrap_err().service_error(), Some(&TestError));
    }

    #[test]
    fn dropped_task_reports_dispatch_failure() {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let executor = SharedSpawn::new(TokioSpawn::from_handle(rt.handle().clone()));
        let callable = spawn_callable(Some(&executor), async {
            std::future::pending::<()>().await;
            Ok::<(), SdkError<TestError>>(())
        });
        // shutting the runtime down drops the pending task along with its sender
        drop(rt);
        let outcome = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(callable);
        match outcome {
            Err(SdkError::DispatchFailure(err)) => assert!(err.is::<TaskDropped>()),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
