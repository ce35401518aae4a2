//! The normalizing adapter: turns computations of unknown shape — panicking,
//! fallible, or already [`Outcome`]-shaped — into one uniform result.
//!
//! This is the central contract of the crate: every panic inside the wrapped
//! computation and every error of a recovered result surfaces as the `Err`
//! variant of an [`Outcome`]. Nothing escapes to the caller as a panic.
//! Callers commit to matching on the outcome instead of unwinding.
//!
//! Failure messages are always prefixed with `failed to <description>` so
//! downstream logs can attribute which named operation failed; the original
//! error (or panic payload) is retained for root-cause inspection.
//!
//! The async counterparts live in [`async_ext`](crate::async_ext).
//!
//! # Examples
//!
//! ```
//! use outcome_kit::safe;
//!
//! let ok = safe("compute answer", || 42);
//! assert_eq!(ok.unwrap(), 42);
//!
//! let err = safe("compute answer", || -> i32 { panic!("boom") });
//! let fault = err.unwrap_err();
//! assert!(fault.message().contains("compute answer"));
//! assert!(fault.message().contains("boom"));
//! ```

use core::any::Any;
use core::fmt::Display;
use core::panic::Location;
use std::error::Error;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::types::{Fault, Outcome};

/// Runs a plain computation, converting a panic into a failure.
///
/// A completed call yields `Ok` with whatever the computation returned —
/// presence is structural, so zero, empty strings, and `false` are all
/// perfectly good successes.
#[track_caller]
pub fn safe<T, F>(what: impl Display, f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    let location = Location::caller();
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => Err(fault_from_panic(location, &what.to_string(), payload)),
    }
}

/// Runs a computation that already produces an [`Outcome`].
///
/// The returned outcome passes through unchanged — success or failure — so
/// nothing is ever double-wrapped. Only a panic produces a new fault.
#[track_caller]
pub fn try_safe<T, F>(what: impl Display, f: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    let location = Location::caller();
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => Err(fault_from_panic(location, &what.to_string(), payload)),
    }
}

/// Converts a plain `Result` into an [`Outcome`], wrapping the error under
/// `failed to <description>`.
///
/// An error that is already a [`Fault`] passes through unchanged.
#[track_caller]
pub fn recover<T, E>(what: impl Display, result: Result<T, E>) -> Outcome<T>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let location = Location::caller();
    result.map_err(|error| wrap_failure(location, &what.to_string(), error.into()))
}

/// Wraps a foreign error under a described fault, unless it already is one.
///
/// The downcast is the typed rendition of "do not re-wrap an existing
/// result": a `Fault` travelling through a `Box<dyn Error>` seam comes back
/// out exactly as it went in.
pub(crate) fn wrap_failure(
    location: &'static Location<'static>,
    what: &str,
    error: Box<dyn Error + Send + Sync>,
) -> Fault {
    match error.downcast::<Fault>() {
        Ok(fault) => *fault,
        Err(error) => Fault::wrap_at(location, format!("failed to {what}"), error),
    }
}

/// Builds a fault from a caught panic payload.
pub(crate) fn fault_from_panic(
    location: &'static Location<'static>,
    what: &str,
    payload: Box<dyn Any + Send>,
) -> Fault {
    let reason = panic_reason(payload);
    Fault::new_at(location, format!("failed to {what}: {reason}"))
}

/// Extracts the conventional string payloads; anything else is opaque.
fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<&'static str>() {
        Ok(message) => (*message).to_string(),
        Err(payload) => match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(_) => String::from("non-string panic payload"),
        },
    }
}
