//! Core types: the uniform [`Outcome`] shape, the [`Fault`] failure record,
//! and the annotation machinery attached to it.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::{Annotation, Fault, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse().map_err(|e| {
//!         Fault::wrap("failed to parse port", e)
//!             .annotate(Annotation::empty().with("raw", raw))
//!     })
//! }
//!
//! assert!(parse_port("8080").is_ok());
//! assert!(parse_port("eighty").unwrap_err().chain().contains("raw=eighty"));
//! ```

use smallvec::SmallVec;

pub mod annotation;
pub mod fault;
pub mod lazy_annotation;

pub use annotation::*;
pub use fault::*;
pub use lazy_annotation::*;

/// SmallVec-backed collection used for annotation storage.
///
/// Inline storage for one element keeps the common single-annotation fault
/// off the heap.
pub type AnnotationVec<A> = SmallVec<[A; 1]>;

/// The uniform result shape: success carries the value, failure carries a
/// [`Fault`]. Being a real sum type, the enum tag is the discriminant — no
/// structural type-testing is needed or possible.
pub type Outcome<T> = Result<T, Fault>;
