//! Extension traits attaching the normalizing adapter to futures.
//!
//! Mirrors the sync entry points: [`safe`](crate::safe) becomes
//! [`FutureSafeExt::safe_guard`] and [`recover`](crate::recover) becomes
//! [`TryFutureSafeExt::recover`].
//!
//! # Examples
//!
//! ```
//! use outcome_kit::async_ext::{FutureSafeExt, TryFutureSafeExt};
//!
//! # async fn demo() {
//! let five = async { 5 }.safe_guard("fetch value").await;
//! assert_eq!(five.unwrap(), 5);
//!
//! let failed = async { Err::<i32, _>("connection reset") }
//!     .recover("fetch record")
//!     .await;
//! let fault = failed.unwrap_err();
//! assert!(fault.chain().contains("failed to fetch record"));
//! assert!(fault.chain().contains("connection reset"));
//! # }
//! ```

use core::fmt::Display;
use core::future::Future;
use core::panic::Location;
use std::error::Error;

use super::recover_future::RecoverFuture;
use super::safe_future::SafeFuture;

/// Guards any future so a panic during polling resolves as a failure
/// instead of unwinding into the executor.
pub trait FutureSafeExt: Future + Sized {
    /// Wraps the future's output in an [`Outcome`](crate::Outcome),
    /// converting panics to faults described by `what`.
    #[track_caller]
    fn safe_guard<W: Display>(self, what: W) -> SafeFuture<Self>;
}

impl<Fut: Future> FutureSafeExt for Fut {
    #[track_caller]
    #[inline]
    fn safe_guard<W: Display>(self, what: W) -> SafeFuture<Self> {
        SafeFuture::new(self, what.to_string(), Location::caller())
    }
}

/// Normalizes a fallible future into an [`Outcome`](crate::Outcome) future.
pub trait TryFutureSafeExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Converts the `Err` arm into a fault under `failed to <what>`; a fault
    /// already in the error position passes through unchanged.
    #[track_caller]
    fn recover<W: Display>(self, what: W) -> RecoverFuture<Self>;
}

impl<Fut, T, E> TryFutureSafeExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    #[track_caller]
    #[inline]
    fn recover<W: Display>(self, what: W) -> RecoverFuture<Self> {
        RecoverFuture::new(self, what.to_string(), Location::caller())
    }
}
