//! The single failure type carried by every [`Outcome`](crate::Outcome).
//!
//! A [`Fault`] records four things about a failure:
//!
//! - a human-readable message (the normalizing adapter prefixes it with
//!   `failed to <description>` so logs can attribute the named operation),
//! - an optional chained source error, preserved for root-cause inspection
//!   via [`std::error::Error::source`],
//! - provenance: the caller's exact source location (via `#[track_caller]`)
//!   plus, when backtrace capture is enabled, a textual backtrace trimmed of
//!   the frames belonging to this crate's own machinery,
//! - zero or more [`Annotation`]s appended as the fault is re-wrapped while
//!   propagating through higher layers.
//!
//! A fault is never mutated in place: [`annotate`](Fault::annotate) consumes
//! and returns, and once the producing call stack unwinds the value is
//! effectively frozen.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::{Annotation, Fault};
//!
//! let fault = Fault::new("config missing")
//!     .annotate(Annotation::new("loading defaults").with("path", "/etc/app"));
//!
//! assert!(fault.chain().contains("loading defaults"));
//! assert!(fault.chain().contains("config missing"));
//! assert!(fault.location().file().ends_with("fault.rs"));
//! ```

use core::fmt::Display;
use core::panic::Location;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

#[cfg(feature = "serde")]
use serde::ser::SerializeStruct;
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::traits::IntoAnnotation;
use crate::types::{Annotation, AnnotationVec};

/// A failure record: message, chained source, provenance, annotations.
#[must_use]
#[derive(Debug)]
pub struct Fault {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
    trace: Option<String>,
    location: &'static Location<'static>,
    annotations: AnnotationVec<Annotation>,
}

impl Fault {
    /// Creates a fresh fault from a message, capturing the caller's location
    /// and (if enabled) a trimmed backtrace.
    #[track_caller]
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::new_at(Location::caller(), message.into())
    }

    /// Wraps a foreign error under a higher-level message, preserving the
    /// original as the chained source.
    #[track_caller]
    #[inline]
    pub fn wrap<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self::wrap_at(Location::caller(), message.into(), source.into())
    }

    pub(crate) fn new_at(location: &'static Location<'static>, message: String) -> Self {
        Self {
            message,
            source: None,
            trace: capture_trace(),
            location,
            annotations: AnnotationVec::new(),
        }
    }

    pub(crate) fn wrap_at(
        location: &'static Location<'static>,
        message: String,
        source: Box<dyn Error + Send + Sync>,
    ) -> Self {
        Self { source: Some(source), ..Self::new_at(location, message) }
    }

    /// Appends one info annotation. Entries accumulate; existing ones are
    /// never altered.
    #[track_caller]
    #[inline]
    pub fn annotate<A: IntoAnnotation>(mut self, annotation: A) -> Self {
        self.annotations.push(annotation.into_annotation());
        self
    }

    /// Returns the fault message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the trimmed textual backtrace, or `None` when capture was
    /// disabled in the environment.
    #[inline]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// Returns the source location of the constructing call.
    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Iterates over annotations, most recent first.
    #[inline]
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().rev()
    }

    /// Renders the full chain: annotations (most recent first), then the
    /// message, then the chained source.
    #[must_use]
    pub fn chain(&self) -> String {
        self.to_string()
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for annotation in self.annotations.iter().rev() {
            write!(f, "{annotation} -> ")?;
        }
        write!(f, "{}", self.message)?;
        if let Some(source) = &self.source {
            let rendered = source.to_string();
            // skip the source when the message is just its rendering
            if rendered != self.message {
                write!(f, ": {rendered}")?;
            }
        }
        Ok(())
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|source| &**source as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Fault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Fault", 5)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("source", &self.source.as_ref().map(|s| s.to_string()))?;
        state.serialize_field("trace", &self.trace)?;
        state.serialize_field("location", &self.location.to_string())?;
        state.serialize_field("annotations", &self.annotations)?;
        state.end()
    }
}

fn capture_trace() -> Option<String> {
    let backtrace = Backtrace::capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return None;
    }
    Some(trim_internal_frames(&backtrace.to_string()))
}

/// Drops frames belonging to the fault machinery itself so the first frame
/// of the trace points at the caller.
fn trim_internal_frames(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut skipping = false;
    for line in rendered.lines() {
        if is_frame_header(line) {
            skipping = line.contains("outcome_kit::")
                || line.contains("std::backtrace")
                || line.contains("backtrace::");
        }
        if !skipping {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Frame headers in the std backtrace rendering look like `  12: symbol`.
fn is_frame_header(line: &str) -> bool {
    let trimmed = line.trim_start();
    match trimmed.split_once(':') {
        Some((index, _)) => !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
