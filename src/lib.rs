//! Uniform success/failure outcomes for computations of unknown shape.
//!
//! `outcome-kit` normalizes plain closures, fallible results, and futures —
//! panicking or not — into one result shape: [`Outcome<T>`], whose failure
//! variant is a [`Fault`] carrying a message, a chained source error,
//! captured provenance, and structured [`Annotation`]s. Around that core sit
//! a multi-key sort comparator factory, non-empty refinement types, an
//! explicit optional wrapper, and a timer delay helper.
//!
//! # Examples
//!
//! ## Normalizing a computation
//!
//! ```
//! use outcome_kit::safe;
//!
//! let outcome = safe("compute checksum", || 0xdead_beef_u32 ^ 0x1234_5678);
//! assert!(outcome.is_ok());
//!
//! let failed = safe("compute checksum", || -> u32 { panic!("bad block") });
//! let fault = failed.unwrap_err();
//! assert!(fault.message().contains("compute checksum"));
//! assert!(fault.message().contains("bad block"));
//! ```
//!
//! ## Recovering and annotating a `Result`
//!
//! ```
//! use outcome_kit::{annotation, AnnotateExt, Outcome, RecoverExt};
//!
//! fn parse(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>()
//!         .recover("parse port")
//!         .annotate(annotation!("raw input: {raw}"))
//! }
//!
//! let fault = parse("no").unwrap_err();
//! assert!(fault.chain().contains("failed to parse port"));
//! assert!(fault.chain().contains("raw input: no"));
//! ```
//!
//! ## Sorting records by several keys
//!
//! ```
//! use outcome_kit::sort::{Direction, SortPlan};
//!
//! #[derive(Debug)]
//! struct Row { age: u32, name: &'static str }
//!
//! let plan = SortPlan::by(|r: &Row| r.age, Direction::Ascending)
//!     .then_by(|r: &Row| r.name, Direction::Ascending);
//!
//! let mut rows = vec![
//!     Row { age: 30, name: "zoe" },
//!     Row { age: 30, name: "amy" },
//! ];
//! rows.sort_by(plan.into_fn());
//! assert_eq!(rows[0].name, "amy");
//! ```

/// The normalizing adapter: `safe`, `try_safe`, `recover`
pub mod adapter;
/// Async adapter surface and the `until` delay helper
pub mod async_ext;
/// Interop with conventional boxed errors
pub mod convert;
/// Annotation and wrapping macros
pub mod macros;
/// Explicit optional wrapper with std interop
pub mod maybe;
/// Non-empty refinement types and predicates
pub mod nonempty;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Multi-key sort comparator factory
pub mod sort;
/// Annotation conversion and outcome extension traits
pub mod traits;
/// Fault, Annotation, and the Outcome alias
pub mod types;

pub use adapter::{recover, safe, try_safe};
pub use async_ext::{until, FutureSafeExt, RecoverFuture, SafeFuture, TryFutureSafeExt};
pub use convert::*;
pub use maybe::Maybe;
pub use nonempty::{is_non_empty_string, NonEmptyString, NonEmptyVec};
pub use sort::{ordering, Direction, SortPlan};
pub use traits::*;
pub use types::{Annotation, AnnotationVec, Fault, LazyAnnotation, Outcome};
