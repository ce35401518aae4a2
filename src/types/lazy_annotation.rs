//! Deferred annotation generation for hot paths.
//!
//! [`LazyAnnotation`] delays building an annotation message until a failure
//! actually needs it, so the success path pays for neither the formatting nor
//! the allocation. The [`annotation!`](crate::annotation) macro is the usual
//! way to construct one.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::{AnnotateExt, Outcome, annotation};
//!
//! fn lookup(user_id: u64) -> Outcome<()> {
//!     let result: Outcome<()> = Err(outcome_kit::Fault::new("row missing"));
//!     result.annotate(annotation!("user_id: {}", user_id))
//! }
//!
//! assert!(lookup(7).is_err());
//! ```

use core::panic::Location;

use crate::traits::IntoAnnotation;
use crate::types::Annotation;

/// An annotation whose message is generated only when the error path runs.
///
/// The source location is captured eagerly at construction so that the
/// eventual [`Annotation`] still points at the attaching call site rather
/// than at the deferred evaluation.
pub struct LazyAnnotation<F> {
    generator: F,
    at: &'static Location<'static>,
}

impl<F> LazyAnnotation<F> {
    /// Wraps a closure that produces the annotation message on demand.
    #[track_caller]
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator, at: Location::caller() }
    }
}

impl<F> IntoAnnotation for LazyAnnotation<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::located(self.at, Some((self.generator)()))
    }
}
