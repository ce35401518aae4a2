//! Extension traits: annotation conversion and `Result` → [`Outcome`]
//! ergonomics.
//!
//! [`Outcome`]: crate::Outcome

pub mod into_annotation;
pub mod outcome_ext;

pub use into_annotation::*;
pub use outcome_ext::*;
