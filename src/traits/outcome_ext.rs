//! Extension traits for moving between plain `Result`s and [`Outcome`]s and
//! for enriching a failing outcome in flight.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::{AnnotateExt, Outcome, RecoverExt};
//!
//! fn load(path: &str) -> Outcome<String> {
//!     std::fs::read_to_string(path)
//!         .recover("read config")
//!         .annotate_with(|| format!("path: {path}"))
//! }
//!
//! let fault = load("/definitely/missing").unwrap_err();
//! assert!(fault.chain().contains("failed to read config"));
//! assert!(fault.chain().contains("path: /definitely/missing"));
//! ```

use core::fmt::Display;
use core::panic::Location;
use std::error::Error;

use crate::adapter::wrap_failure;
use crate::traits::IntoAnnotation;
use crate::types::Outcome;

/// Converts a `Result<T, E>` into an [`Outcome<T>`], prefixing the failure
/// with `failed to <description>` and chaining the original error.
///
/// An error that is already a [`Fault`](crate::Fault) passes through
/// unchanged — no double-wrapping.
pub trait RecoverExt<T, E> {
    /// Recovers the error under a static description.
    #[track_caller]
    fn recover<W: Display>(self, what: W) -> Outcome<T>;

    /// Recovers the error under a lazily-built description; the closure only
    /// runs on the error path.
    #[track_caller]
    fn recover_with<W, F>(self, f: F) -> Outcome<T>
    where
        W: Display,
        F: FnOnce() -> W;
}

impl<T, E> RecoverExt<T, E> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    #[track_caller]
    #[inline]
    fn recover<W: Display>(self, what: W) -> Outcome<T> {
        let location = Location::caller();
        self.map_err(|error| wrap_failure(location, &what.to_string(), error.into()))
    }

    #[track_caller]
    #[inline]
    fn recover_with<W, F>(self, f: F) -> Outcome<T>
    where
        W: Display,
        F: FnOnce() -> W,
    {
        let location = Location::caller();
        self.map_err(|error| wrap_failure(location, &f().to_string(), error.into()))
    }
}

/// Appends info annotations to the fault of a failing [`Outcome`].
///
/// Successful outcomes are returned untouched and, in the lazy variant, the
/// closure never runs.
pub trait AnnotateExt<T> {
    /// Appends an annotation to the fault, if any.
    #[track_caller]
    fn annotate<A: IntoAnnotation>(self, annotation: A) -> Self;

    /// Appends a lazily-built annotation to the fault, if any.
    #[track_caller]
    fn annotate_with<A, F>(self, f: F) -> Self
    where
        A: IntoAnnotation,
        F: FnOnce() -> A;
}

impl<T> AnnotateExt<T> for Outcome<T> {
    #[track_caller]
    #[inline]
    fn annotate<A: IntoAnnotation>(self, annotation: A) -> Self {
        self.map_err(|fault| fault.annotate(annotation))
    }

    #[track_caller]
    #[inline]
    fn annotate_with<A, F>(self, f: F) -> Self
    where
        A: IntoAnnotation,
        F: FnOnce() -> A,
    {
        self.map_err(|fault| fault.annotate(f()))
    }
}
