//! Stable multi-key comparator factory.
//!
//! Two forms, matching the two shapes of ordered presentation:
//!
//! - [`ordering`] builds a comparator over primitives from a bare
//!   [`Direction`],
//! - [`SortPlan`] builds a priority-ordered multi-key comparator over
//!   records from `(key extractor, direction)` pairs.
//!
//! Both are pure functions of their inputs: no hidden state, the same
//! arguments always compare the same way, and as long as every key type is
//! `Ord` the result is a strict weak ordering.
//!
//! # Examples
//!
//! ```
//! use outcome_kit::sort::{ordering, Direction, SortPlan};
//!
//! let mut numbers = vec![3, 1, 2];
//! numbers.sort_by(ordering(Direction::Ascending));
//! assert_eq!(numbers, [1, 2, 3]);
//!
//! struct Person { name: &'static str, age: u32 }
//! let plan = SortPlan::by(|p: &Person| p.age, Direction::Ascending)
//!     .then_by(|p: &Person| p.name, Direction::Ascending);
//!
//! let mut people = vec![
//!     Person { name: "bea", age: 30 },
//!     Person { name: "abe", age: 30 },
//!     Person { name: "cal", age: 20 },
//! ];
//! people.sort_by(|a, b| plan.compare(a, b));
//! assert_eq!(people[0].name, "cal");
//! assert_eq!(people[1].name, "abe");
//! ```

use core::cmp::Ordering;

use crate::nonempty::NonEmptyVec;

/// Sort direction for one key.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Adjusts a natural ordering for this direction.
    #[inline]
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Builds a comparator over primitive (or any `Ord`) values.
///
/// Ascending puts lower values first; descending reverses that.
pub fn ordering<T: Ord>(direction: Direction) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| direction.apply(a.cmp(b))
}

type KeyCompare<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A priority-ordered multi-key comparator over records of type `T`.
///
/// Keys are consulted in the order they were added: the first key on which
/// two records differ decides, ties fall through to the next key, and
/// records equal on every key compare as equal. A plan always holds at
/// least one key — [`by`](SortPlan::by) is the only way to start one.
#[must_use]
pub struct SortPlan<T> {
    keys: NonEmptyVec<KeyCompare<T>>,
}

impl<T> SortPlan<T> {
    /// Starts a plan with its highest-priority key.
    pub fn by<K, F>(extract: F, direction: Direction) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self { keys: NonEmptyVec::new(Self::key(extract, direction)) }
    }

    /// Appends a lower-priority tie-breaking key.
    pub fn then_by<K, F>(mut self, extract: F, direction: Direction) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.keys.push(Self::key(extract, direction));
        self
    }

    fn key<K, F>(extract: F, direction: Direction) -> KeyCompare<T>
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Box::new(move |a, b| direction.apply(extract(a).cmp(&extract(b))))
    }

    /// Compares two records under the plan.
    #[must_use]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for key in self.keys.iter() {
            let ordering = key(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Consumes the plan into a closure usable directly with
    /// [`slice::sort_by`].
    pub fn into_fn(self) -> impl Fn(&T, &T) -> Ordering {
        move |a, b| self.compare(a, b)
    }
}
