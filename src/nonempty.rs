//! Non-empty refinement types and the matching runtime predicates.
//!
//! [`NonEmptyString`] and [`NonEmptyVec`] make "has at least one element" a
//! property of the type instead of a comment. Construction is the only
//! validation point; every other operation preserves the invariant.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::nonempty::{is_non_empty_string, NonEmptyString, NonEmptyVec};
//!
//! assert!(is_non_empty_string("a"));
//! assert!(!is_non_empty_string(""));
//!
//! let name = NonEmptyString::new("renderer").unwrap();
//! assert_eq!(name.as_str(), "renderer");
//!
//! let mut keys = NonEmptyVec::new("primary");
//! keys.push("secondary");
//! assert_eq!(keys.len(), 2);
//! assert_eq!(*keys.first(), "primary");
//! ```

use core::fmt::Display;
use core::ops::Deref;

use crate::types::Fault;

/// Returns `true` iff the string has at least one byte.
#[inline]
#[must_use]
pub fn is_non_empty_string(value: &str) -> bool {
    !value.is_empty()
}

/// A string validated to be non-empty at construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Validates and wraps; returns `None` for the empty string.
    #[must_use]
    pub fn new<S: Into<String>>(value: S) -> Option<Self> {
        let value = value.into();
        is_non_empty_string(&value).then_some(Self(value))
    }

    /// Borrows the inner string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = Fault;

    fn try_from(value: String) -> Result<Self, Fault> {
        Self::new(value).ok_or_else(|| Fault::new("failed to refine string: it is empty"))
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = Fault;

    fn try_from(value: &str) -> Result<Self, Fault> {
        Self::new(value).ok_or_else(|| Fault::new("failed to refine string: it is empty"))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NonEmptyString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NonEmptyString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| serde::de::Error::custom("expected a non-empty string"))
    }
}

/// A sequence holding at least one element, as head plus tail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Creates a one-element sequence.
    #[inline]
    pub fn new(head: T) -> Self {
        Self { head, tail: Vec::new() }
    }

    /// Appends an element at the end.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Number of elements; never zero.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present so the type keeps the usual collection shape.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first (head) element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> &T {
        &self.head
    }

    /// The last element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Iterates head first, then the tail in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        core::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(value: NonEmptyVec<T>) -> Self {
        let mut out = Vec::with_capacity(value.len());
        out.push(value.head);
        out.extend(value.tail);
        out
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = Fault;

    fn try_from(value: Vec<T>) -> Result<Self, Fault> {
        let mut iter = value.into_iter();
        match iter.next() {
            Some(head) => Ok(Self { head, tail: iter.collect() }),
            None => Err(Fault::new("failed to refine sequence: it is empty")),
        }
    }
}
