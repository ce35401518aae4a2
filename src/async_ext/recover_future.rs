//! Future wrapper that normalizes fallible futures into [`Outcome`]s.
//!
//! [`RecoverFuture`] is the async half of the normalizing adapter: where a
//! promise-based runtime distinguishes resolution from rejection, a Rust
//! future surfaces failure as the `Err` arm of its output. This wrapper
//! converts that arm into a [`Fault`] under a `failed to <description>`
//! message, passes already-uniform faults through untouched, and converts a
//! panicking poll into a failure as well.
//!
//! [`Outcome`]: crate::Outcome
//! [`Fault`]: crate::Fault

use core::future::Future;
use core::panic::Location;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::error::Error;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::adapter::{fault_from_panic, wrap_failure};
use crate::types::Outcome;

pin_project! {
    /// Wraps a `Future<Output = Result<T, E>>` into a
    /// `Future<Output = Outcome<T>>`.
    ///
    /// Created via [`TryFutureSafeExt::recover`](crate::async_ext::TryFutureSafeExt::recover).
    ///
    /// # Cancel Safety
    ///
    /// Cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct RecoverFuture<Fut> {
        #[pin]
        future: Fut,
        what: String,
        location: &'static Location<'static>,
        completed: bool,
    }
}

impl<Fut> RecoverFuture<Fut> {
    pub(crate) fn new(future: Fut, what: String, location: &'static Location<'static>) -> Self {
        Self { future, what, location, completed: false }
    }
}

impl<Fut, T, E> Future for RecoverFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match catch_unwind(AssertUnwindSafe(|| this.future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(Ok(value))) => {
                *this.completed = true;
                Poll::Ready(Ok(value))
            }
            Ok(Poll::Ready(Err(error))) => {
                *this.completed = true;
                Poll::Ready(Err(wrap_failure(*this.location, this.what, error.into())))
            }
            Err(payload) => {
                *this.completed = true;
                Poll::Ready(Err(fault_from_panic(*this.location, this.what, payload)))
            }
        }
    }
}

impl<Fut, T, E> FusedFuture for RecoverFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn is_terminated(&self) -> bool {
        self.completed
    }
}
