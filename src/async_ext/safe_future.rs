//! Future wrapper that converts panics into failures.
//!
//! [`SafeFuture`] polls its inner future inside `catch_unwind`: a completed
//! poll wraps the output in `Ok`, a panicking poll resolves the future with
//! an `Err` fault instead of propagating the unwind to the executor.

use core::future::Future;
use core::panic::Location;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::adapter::fault_from_panic;
use crate::types::Outcome;

pin_project! {
    /// Wraps a `Future<Output = T>` into a `Future<Output = Outcome<T>>`
    /// that never unwinds.
    ///
    /// Created via [`FutureSafeExt::safe_guard`](crate::async_ext::FutureSafeExt::safe_guard).
    ///
    /// # Cancel Safety
    ///
    /// `SafeFuture` is cancel-safe if the inner future is cancel-safe; it
    /// adds no state beyond the completion fuse.
    #[must_use = "futures do nothing unless polled"]
    pub struct SafeFuture<Fut> {
        #[pin]
        future: Fut,
        what: String,
        location: &'static Location<'static>,
        completed: bool,
    }
}

impl<Fut> SafeFuture<Fut> {
    pub(crate) fn new(future: Fut, what: String, location: &'static Location<'static>) -> Self {
        Self { future, what, location, completed: false }
    }
}

impl<Fut: Future> Future for SafeFuture<Fut> {
    type Output = Outcome<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match catch_unwind(AssertUnwindSafe(|| this.future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => {
                *this.completed = true;
                Poll::Ready(Ok(value))
            }
            Err(payload) => {
                *this.completed = true;
                Poll::Ready(Err(fault_from_panic(*this.location, this.what, payload)))
            }
        }
    }
}

impl<Fut: Future> FusedFuture for SafeFuture<Fut> {
    fn is_terminated(&self) -> bool {
        self.completed
    }
}
