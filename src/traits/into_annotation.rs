//! Trait for converting flexible inputs into an [`Annotation`].
//!
//! Implemented for plain strings (message-only annotations), for
//! [`Annotation`] itself (identity), and for
//! [`LazyAnnotation`](crate::types::LazyAnnotation) (deferred formatting).
//!
//! # Examples
//!
//! ```
//! use outcome_kit::traits::IntoAnnotation;
//!
//! let a = "short note".into_annotation();
//! assert_eq!(a.message(), Some("short note"));
//! ```

use std::borrow::Cow;

use crate::types::Annotation;

/// Converts a value into an [`Annotation`] for fault enrichment.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be attached as a fault annotation",
    label = "this type does not implement `IntoAnnotation`",
    note = "implement `IntoAnnotation` manually or pass a string / `Annotation`"
)]
pub trait IntoAnnotation {
    /// Converts `self` into an [`Annotation`].
    #[track_caller]
    fn into_annotation(self) -> Annotation;
}

impl IntoAnnotation for String {
    #[track_caller]
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::new(self)
    }
}

impl IntoAnnotation for &'static str {
    #[track_caller]
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::new(self)
    }
}

impl IntoAnnotation for Cow<'static, str> {
    #[track_caller]
    #[inline]
    fn into_annotation(self) -> Annotation {
        Annotation::new(self)
    }
}

impl IntoAnnotation for Annotation {
    /// Identity conversion (no-op).
    #[inline]
    fn into_annotation(self) -> Annotation {
        self
    }
}
