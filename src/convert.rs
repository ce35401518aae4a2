//! Interop conversions between [`Fault`]/[`Outcome`] and conventional error
//! types.
//!
//! These adapters sit at the boundary with code that speaks
//! `Box<dyn Error>`: hand a fault out as a plain boxed error, pull a foreign
//! error in as a fault, or lift a whole `Result` into an [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_kit::convert::{error_to_fault, fault_to_error};
//! use outcome_kit::Fault;
//!
//! let fault = Fault::new("disk full");
//! let boxed = fault_to_error(fault);
//! assert_eq!(boxed.to_string(), "disk full");
//!
//! let back = error_to_fault(boxed);
//! assert_eq!(back.message(), "disk full");
//! ```

use core::panic::Location;
use std::error::Error;

use crate::types::{Fault, Outcome};

/// Hands a fault to surrounding code as a conventional boxed error.
///
/// Message, source chain, and provenance all survive: `Fault` implements
/// [`std::error::Error`], so this is purely a boxing conversion.
#[inline]
#[must_use]
pub fn fault_to_error(fault: Fault) -> Box<dyn Error + Send + Sync> {
    Box::new(fault)
}

/// Adopts a foreign error as a fault, without a description prefix.
///
/// A boxed error that actually is a `Fault` is unboxed and returned as-is;
/// anything else becomes a fault whose message is the error's rendering and
/// whose source is the error itself.
#[track_caller]
pub fn error_to_fault<E>(error: E) -> Fault
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let location = Location::caller();
    match error.into().downcast::<Fault>() {
        Ok(fault) => *fault,
        Err(error) => Fault::wrap_at(location, error.to_string(), error),
    }
}

/// Lifts a plain `Result` into an [`Outcome`], adopting the error via
/// [`error_to_fault`].
#[track_caller]
pub fn outcome_from_result<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    let location = Location::caller();
    result.map_err(|error| match error.into().downcast::<Fault>() {
        Ok(fault) => *fault,
        Err(error) => Fault::wrap_at(location, error.to_string(), error),
    })
}
