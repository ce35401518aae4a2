//! Ergonomic macros for annotating faults and wrapping computations.
//!
//! - [`macro@crate::annotation`] - builds a lazily-formatted
//!   [`Annotation`](crate::Annotation); the format runs only on the error
//!   path.
//! - [`macro@crate::data`] - builds a structured-data annotation from
//!   `key => value` pairs.
//! - [`macro@crate::safe`] - wraps an expression or block through the
//!   normalizing adapter.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::{annotation, data, safe, AnnotateExt};
//!
//! let user_id = 42;
//! let outcome = safe!("load profile", {
//!     let base: u64 = 100;
//!     base + user_id
//! })
//! .annotate(annotation!("user_id: {}", user_id))
//! .annotate(data!("shard" => "eu-1"));
//!
//! assert_eq!(outcome.unwrap(), 142);
//! ```

/// Builds a lazily-evaluated [`Annotation`](crate::Annotation) from format
/// arguments.
///
/// The formatting closure only runs when a failure actually consumes the
/// annotation; the success path pays nothing.
///
/// ```
/// use outcome_kit::{annotation, Fault};
///
/// let fault = Fault::new("lookup missed").annotate(annotation!("key: {}", 7));
/// assert!(fault.chain().contains("key: 7"));
/// ```
#[macro_export]
macro_rules! annotation {
    ($($arg:tt)*) => {
        $crate::types::LazyAnnotation::new(move || format!($($arg)*))
    };
}

/// Builds a structured-data [`Annotation`](crate::Annotation) from
/// `key => value` pairs.
///
/// ```
/// use outcome_kit::{data, Fault};
///
/// let fault = Fault::new("write rejected")
///     .annotate(data!("table" => "events", "rows" => "512"));
/// assert!(fault.chain().contains("table=events"));
/// ```
#[macro_export]
macro_rules! data {
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut annotation = $crate::types::Annotation::empty();
        $( annotation = annotation.with($key, $value); )+
        annotation
    }};
}

/// Runs an expression or block through [`safe`](crate::adapter::safe).
///
/// ```
/// use outcome_kit::safe;
///
/// let outcome = safe!("halve", 84 / 2);
/// assert_eq!(outcome.unwrap(), 42);
/// ```
#[macro_export]
macro_rules! safe {
    ($what:expr, $body:block $(,)?) => {
        $crate::adapter::safe($what, move || $body)
    };
    ($what:expr, $expr:expr $(,)?) => {
        $crate::adapter::safe($what, move || $expr)
    };
}
