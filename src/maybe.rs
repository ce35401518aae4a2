//! An explicit two-variant optional wrapper with std interop.
//!
//! [`Maybe`] mirrors the `Some`/`None` tagged union of the original
//! utilities package. Presence is structural, never truthiness-based:
//! `Maybe::some(0)` and `Maybe::some("")` are present values. Lossless
//! conversions to and from [`core::option::Option`] keep it compatible with
//! the rest of the ecosystem.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::Maybe;
//!
//! let present = Maybe::some(0);
//! assert!(present.is_some());
//! assert!(!present.is_none());
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.unwrap_or(7), 7);
//!
//! let std_option: Option<i32> = Maybe::some(3).into();
//! assert_eq!(std_option, Some(3));
//! ```

use crate::types::{Fault, Outcome};

/// A value that may or may not be present.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// The present variant.
    Some(T),
    /// The absent variant.
    None,
}

impl<T> Maybe<T> {
    /// Constructs the present variant. Any value qualifies.
    #[inline]
    #[must_use]
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Constructs the absent variant.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    /// `true` iff the value is present. Total, pure.
    #[inline]
    #[must_use]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// `true` iff the value is absent. Total, pure.
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the contained value, preserving the variant.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Maps the contained value, preserving absence.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Returns the contained value or the supplied default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Converts absence into a described failure.
    #[track_caller]
    pub fn ok_or<W: core::fmt::Display>(self, what: W) -> Outcome<T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Fault::new(format!("failed to {what}: value absent"))),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::Some(inner),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(inner) => Some(inner),
            Maybe::None => None,
        }
    }
}
