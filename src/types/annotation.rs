//! Structured annotations attached to a [`Fault`](crate::Fault) as it
//! propagates through layers.
//!
//! An annotation carries an optional human-readable message, a small list of
//! `key=value` data pairs, and the source location at which it was created.
//! Locations are captured automatically via `#[track_caller]`, so an
//! annotation always records where in *caller* code it was attached.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::Annotation;
//!
//! let ann = Annotation::new("retrying upstream call")
//!     .with("attempt", "3")
//!     .with("host", "db-1");
//!
//! assert_eq!(ann.message(), Some("retrying upstream call"));
//! assert!(ann.to_string().contains("attempt=3"));
//! ```

use core::fmt::Display;
use core::panic::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::AnnotationVec;

/// One info entry appended to a fault while it propagates upward.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    message: Option<String>,
    data: AnnotationVec<(String, String)>,
    at: String,
}

impl Annotation {
    /// Creates an annotation carrying a message, stamped with the caller's
    /// source location.
    #[track_caller]
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::located(Location::caller(), Some(message.into()))
    }

    /// Creates an annotation with no message, typically filled with data
    /// pairs via [`with`](Annotation::with).
    #[track_caller]
    #[inline]
    pub fn empty() -> Self {
        Self::located(Location::caller(), None)
    }

    pub(crate) fn located(location: &'static Location<'static>, message: Option<String>) -> Self {
        Self { message, data: AnnotationVec::new(), at: location.to_string() }
    }

    /// Appends one `key=value` data pair.
    #[inline]
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    /// Returns the annotation message, if one was supplied.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the data pairs in insertion order.
    #[inline]
    pub fn data(&self) -> &[(String, String)] {
        &self.data
    }

    /// Returns the `file:line:column` string recorded at construction.
    #[inline]
    pub fn at(&self) -> &str {
        &self.at
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut wrote = false;
        if let Some(message) = &self.message {
            write!(f, "{message}")?;
            wrote = true;
        }
        for (key, value) in &self.data {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "{key}={value}")?;
            wrote = true;
        }
        if wrote {
            write!(f, " ")?;
        }
        write!(f, "(at {})", self.at)
    }
}
