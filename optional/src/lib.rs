//! A value-semantic container that holds either one value of a type or
//! nothing, with chaining operations that short-circuit on absence.
//!
//! [`OptionalValue`] wraps the standard [`Option`] rather than replacing
//! it: presence testing and storage are delegated to the inner optional,
//! while the chaining operations let a caller compose a pipeline over a
//! possibly-absent value without writing a presence check at each step.
//! Absence flows silently through [`OptionalValue::transform`] and
//! [`OptionalValue::and_then`]; [`OptionalValue::or_else`] is the single
//! recovery point.
//!
//! ```rust
//! use optional_value::OptionalValue;
//!
//! fn half(x: i32) -> OptionalValue<i32> {
//!     if x % 2 == 0 {
//!         OptionalValue::some(x / 2)
//!     } else {
//!         OptionalValue::none()
//!     }
//! }
//!
//! let result = OptionalValue::some(8)
//!     .and_then(half)
//!     .transform(|x| x + 1)
//!     .or_else(|| 0);
//! assert_eq!(result, OptionalValue::some(5));
//!
//! // an odd number fails the `half` step, so the fallback wins
//! let result = OptionalValue::some(7)
//!     .and_then(half)
//!     .transform(|x| x + 1)
//!     .or_else(|| 0);
//! assert_eq!(result, OptionalValue::some(0));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    option,
};

/// A container holding either exactly one value of type `T` or nothing.
///
/// This is a value type: cloning an [`OptionalValue`] clones the contained
/// value, moving it transfers ownership, and dropping it drops the value.
/// `Copy` is available whenever `T: Copy`. Nothing is shared.
///
/// There is no `Deref` to the contained value: the ways to reach it are
/// the chaining operations, the borrowing adapters
/// ([`OptionalValue::as_ref`], [`OptionalValue::as_option`]), and the
/// extraction methods, each of which states what happens on absence.
#[derive(Clone, Copy)]
pub struct OptionalValue<T>(Option<T>);

impl<T> OptionalValue<T> {
    /// Creates an absent container.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let o = OptionalValue::<i32>::none();
    /// assert!(o.is_absent());
    /// ```
    pub const fn none() -> Self {
        Self(None)
    }

    /// Creates a container holding `value`.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let o = OptionalValue::some(5);
    /// assert!(o.is_present());
    /// ```
    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    /// Returns `true` if the container holds a value.
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if the container holds nothing.
    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Applies `f` to the contained value, if there is one.
    ///
    /// Returns a present container holding `f`'s result, or an absent
    /// container of the result type without invoking `f`. `f` runs at
    /// most once.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let doubled = OptionalValue::some(5).transform(|x| x * 2);
    /// assert_eq!(doubled, OptionalValue::some(10));
    ///
    /// let doubled = OptionalValue::<i32>::none().transform(|x| x * 2);
    /// assert!(doubled.is_absent());
    /// ```
    ///
    /// The result type may differ from the element type:
    /// ```
    /// # use optional_value::OptionalValue;
    /// let text = OptionalValue::some(5).transform(|x| x.to_string());
    /// assert_eq!(text, OptionalValue::some(String::from("5")));
    /// ```
    pub fn transform<U, F>(self, f: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        OptionalValue(self.0.map(f))
    }

    /// Applies `f` to the contained value and flattens the result.
    ///
    /// `f` must itself produce an optional-shaped result — anything that
    /// implements [`IntoOptionalValue`], i.e. an [`OptionalValue`] or a
    /// plain [`Option`]. If the container is present, the result is
    /// `f(value)` itself, not wrapped again; if absent, the result is
    /// absent and `f` is not invoked.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let checked = OptionalValue::some(5).and_then(|x| {
    ///     if x > 0 {
    ///         OptionalValue::some(x)
    ///     } else {
    ///         OptionalValue::none()
    ///     }
    /// });
    /// assert_eq!(checked, OptionalValue::some(5));
    /// ```
    ///
    /// A function returning a plain [`Option`] chains the same way:
    /// ```
    /// # use optional_value::OptionalValue;
    /// let first = OptionalValue::some(vec![1, 2, 3])
    ///     .and_then(|v| v.first().copied());
    /// assert_eq!(first, OptionalValue::some(1));
    /// ```
    pub fn and_then<U, R, F>(self, f: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> R,
        R: IntoOptionalValue<U>,
    {
        match self.0 {
            Some(value) => f(value).into_optional_value(),
            None => OptionalValue::none(),
        }
    }

    /// Recovers from absence by computing a fallback value.
    ///
    /// If the container is present it is returned unchanged and `f` is not
    /// invoked. If absent, `f` runs once and its result (of `T`, or
    /// anything convertible into `T`) is wrapped into a present container.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let o = OptionalValue::<i32>::none().or_else(|| 42);
    /// assert_eq!(o, OptionalValue::some(42));
    ///
    /// let o = OptionalValue::some(5).or_else(|| 42);
    /// assert_eq!(o, OptionalValue::some(5));
    /// ```
    pub fn or_else<R, F>(self, f: F) -> Self
    where
        F: FnOnce() -> R,
        R: Into<T>,
    {
        match self.0 {
            Some(value) => Self(Some(value)),
            None => Self(Some(f().into())),
        }
    }

    /// Runs `f` for its side effect if the container is absent.
    ///
    /// The container passes through unchanged either way: absent stays
    /// absent after `f` runs once, present skips `f` entirely. This is the
    /// recovery hook for callers that want to observe absence (say, to
    /// report it) without substituting a value.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let mut missing = false;
    /// let o = OptionalValue::<i32>::none().inspect_absent(|| missing = true);
    /// assert!(missing);
    /// assert!(o.is_absent());
    /// ```
    pub fn inspect_absent<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.0.is_none() {
            f();
        }
        self
    }

    /// Runs `f` with a reference to the contained value, if there is one.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let mut seen = None;
    /// let o = OptionalValue::some(5).inspect_present(|x| seen = Some(*x));
    /// assert_eq!(seen, Some(5));
    /// assert!(o.is_present());
    /// ```
    pub fn inspect_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            f(value);
        }
        self
    }

    /// Borrows the contents, producing a container of references.
    ///
    /// Lets a caller run a chain without consuming the original:
    /// ```
    /// # use optional_value::OptionalValue;
    /// let o = OptionalValue::some(String::from("hi"));
    /// let len = o.as_ref().transform(|s| s.len());
    /// assert_eq!(len, OptionalValue::some(2));
    /// assert!(o.is_present());
    /// ```
    pub const fn as_ref(&self) -> OptionalValue<&T> {
        OptionalValue(self.0.as_ref())
    }

    /// Mutably borrows the contents, producing a container of mutable
    /// references.
    pub fn as_mut(&mut self) -> OptionalValue<&mut T> {
        OptionalValue(self.0.as_mut())
    }

    /// Returns a view of the contents as a plain [`Option`] of a
    /// reference.
    pub const fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Unwraps the container into the plain [`Option`] it is built on.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// assert_eq!(OptionalValue::some(5).into_option(), Some(5));
    /// assert_eq!(OptionalValue::<i32>::none().into_option(), None);
    /// ```
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Moves the value out, leaving the container absent.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::OptionalValue;
    /// let mut o = OptionalValue::some(5);
    /// let taken = o.take();
    /// assert_eq!(taken, OptionalValue::some(5));
    /// assert!(o.is_absent());
    /// ```
    pub fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// Returns the contained value.
    ///
    /// ## Panics
    ///
    /// Panics if the container is absent, with the underlying
    /// [`Option::unwrap`] message.
    pub fn unwrap(self) -> T {
        self.0.unwrap()
    }

    /// Returns the contained value.
    ///
    /// ## Panics
    ///
    /// Panics with `msg` if the container is absent.
    pub fn expect(self, msg: &str) -> T {
        self.0.expect(msg)
    }

    /// Returns the contained value, or an error if there is none.
    ///
    /// # Examples
    /// ```
    /// # use optional_value::{MissingValueError, OptionalValue};
    /// assert_eq!(OptionalValue::some(5).try_unwrap(), Ok(5));
    /// assert_eq!(
    ///     OptionalValue::<i32>::none().try_unwrap(),
    ///     Err(MissingValueError)
    /// );
    /// ```
    pub fn try_unwrap(self) -> Result<T, MissingValueError> {
        self.0.ok_or(MissingValueError)
    }

    /// Returns the contained value, or `default` if absent.
    pub fn unwrap_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Returns the contained value, or computes one from `f` if absent.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(f)
    }

    /// Returns the contained value, or `T::default()` if absent.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.0.unwrap_or_default()
    }

    /// Iterates over the contained value (zero or one items).
    pub fn iter(&self) -> option::Iter<'_, T> {
        self.0.iter()
    }
}

/// Conversion into an [`OptionalValue`].
///
/// This is the constraint [`OptionalValue::and_then`] places on its
/// callable's result: anything optional-shaped. The crate implements it
/// for [`OptionalValue`] itself and for the plain [`Option`]; downstream
/// optional-like types can implement it to participate in chains.
pub trait IntoOptionalValue<T> {
    /// Converts `self` into an [`OptionalValue`].
    fn into_optional_value(self) -> OptionalValue<T>;
}

impl<T> IntoOptionalValue<T> for OptionalValue<T> {
    fn into_optional_value(self) -> OptionalValue<T> {
        self
    }
}

impl<T> IntoOptionalValue<T> for Option<T> {
    fn into_optional_value(self) -> OptionalValue<T> {
        OptionalValue(self)
    }
}

/// Error returned from [`OptionalValue::try_unwrap`] on an absent
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no value present")]
pub struct MissingValueError;

impl<T> Default for OptionalValue<T> {
    /// Returns an absent container.
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for OptionalValue<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        value.0
    }
}

impl<A, B> PartialEq<OptionalValue<B>> for OptionalValue<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &OptionalValue<B>) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A, B> PartialEq<Option<B>> for OptionalValue<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &Option<B>) -> bool {
        match (&self.0, other) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for OptionalValue<T> {}

impl<T: PartialOrd> PartialOrd for OptionalValue<T> {
    /// Absent sorts before any present value, as with the plain
    /// [`Option`].
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord> Ord for OptionalValue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: Hash> Hash for OptionalValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> IntoIterator for OptionalValue<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OptionalValue<T> {
    type Item = &'a T;
    type IntoIter = option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Serialize for OptionalValue<T>
where
    T: Serialize,
{
    /// Serializes exactly as the plain [`Option`] would: the value, or
    /// null.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for OptionalValue<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(x: i32) -> OptionalValue<i32> {
        if x > 0 {
            OptionalValue::some(x)
        } else {
            OptionalValue::none()
        }
    }

    #[test]
    fn transform_on_present_applies_the_function() {
        let o = OptionalValue::some(5).transform(|x| x * 2);
        assert_eq!(o, OptionalValue::some(10));
    }

    #[test]
    fn transform_on_absent_skips_the_function() {
        let mut calls = 0;
        let o = OptionalValue::<i32>::none().transform(|x| {
            calls += 1;
            x * 2
        });
        assert!(o.is_absent());
        assert_eq!(calls, 0);
    }

    #[test]
    fn transform_can_change_the_element_type() {
        let o = OptionalValue::some(5).transform(|x| x.to_string());
        assert_eq!(o, OptionalValue::some(String::from("5")));
    }

    #[test]
    fn and_then_on_present_returns_the_result_without_extra_nesting() {
        let chained = OptionalValue::some(5).and_then(positive);
        assert_eq!(chained, positive(5));

        let filtered = OptionalValue::some(-5).and_then(positive);
        assert_eq!(filtered, positive(-5));
        assert!(filtered.is_absent());
    }

    #[test]
    fn and_then_on_absent_skips_the_function() {
        let mut calls = 0;
        let o = OptionalValue::<i32>::none().and_then(|x| {
            calls += 1;
            OptionalValue::some(x)
        });
        assert!(o.is_absent());
        assert_eq!(calls, 0);
    }

    #[test]
    fn and_then_accepts_a_plain_option_returning_function() {
        let o = OptionalValue::some(5).and_then(|x| (x > 0).then_some(x));
        assert_eq!(o, OptionalValue::some(5));
    }

    #[test]
    fn or_else_on_present_keeps_the_value_and_skips_the_function() {
        let mut calls = 0;
        let o = OptionalValue::some(5).or_else(|| {
            calls += 1;
            0
        });
        assert_eq!(o, OptionalValue::some(5));
        assert_eq!(calls, 0);
    }

    #[test]
    fn or_else_on_absent_wraps_the_fallback_value() {
        let o = OptionalValue::<i32>::none().or_else(|| 42);
        assert_eq!(o, OptionalValue::some(42));
    }

    #[test]
    fn or_else_accepts_a_convertible_fallback() {
        let o = OptionalValue::<i64>::none().or_else(|| 42i32);
        assert_eq!(o, OptionalValue::some(42i64));
    }

    #[test]
    fn inspect_absent_on_absent_runs_the_side_effect_once() {
        let mut calls = 0;
        let o = OptionalValue::<i32>::none().inspect_absent(|| calls += 1);
        assert!(o.is_absent());
        assert_eq!(calls, 1);
    }

    #[test]
    fn inspect_absent_on_present_skips_the_side_effect() {
        let mut calls = 0;
        let o = OptionalValue::some(5).inspect_absent(|| calls += 1);
        assert_eq!(o, OptionalValue::some(5));
        assert_eq!(calls, 0);
    }

    #[test]
    fn inspect_present_observes_the_value_without_consuming_it() {
        let mut seen = None;
        let o = OptionalValue::some(5).inspect_present(|x| seen = Some(*x));
        assert_eq!(seen, Some(5));
        assert_eq!(o, OptionalValue::some(5));

        let mut calls = 0;
        OptionalValue::<i32>::none().inspect_present(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn a_chain_recovers_only_when_a_step_produces_absent() {
        let o = OptionalValue::some(5)
            .and_then(positive)
            .transform(|x| x * 2)
            .or_else(|| 0);
        assert_eq!(o, OptionalValue::some(10));

        let o = OptionalValue::some(-5)
            .and_then(positive)
            .transform(|x| x * 2)
            .or_else(|| 0);
        assert_eq!(o, OptionalValue::some(0));
    }

    #[test]
    fn conversions_preserve_presence_and_value() {
        assert_eq!(OptionalValue::from(5), OptionalValue::some(5));
        assert_eq!(OptionalValue::<i32>::from(Some(5)), OptionalValue::some(5));
        assert!(OptionalValue::<i32>::from(None).is_absent());
        assert_eq!(Option::from(OptionalValue::some(5)), Some(5));
        assert_eq!(OptionalValue::some(5).into_option(), Some(5));
    }

    #[test]
    fn default_is_absent() {
        let o: OptionalValue<i32> = Default::default();
        assert!(o.is_absent());
    }

    #[test]
    fn take_moves_the_value_and_leaves_the_source_absent() {
        let mut o = OptionalValue::some(String::from("hi"));
        let taken = o.take();
        assert_eq!(taken, OptionalValue::some(String::from("hi")));
        assert!(o.is_absent());
    }

    #[test]
    fn try_unwrap_reports_absence_as_an_error() {
        assert_eq!(OptionalValue::some(5).try_unwrap(), Ok(5));
        let err = OptionalValue::<i32>::none().try_unwrap().unwrap_err();
        assert_eq!(err.to_string(), "no value present");
    }

    #[test]
    #[should_panic]
    fn unwrap_on_absent_fails_fast() {
        OptionalValue::<i32>::none().unwrap();
    }

    #[test]
    fn unwrap_with_fallbacks_never_panics() {
        assert_eq!(OptionalValue::<i32>::none().unwrap_or(7), 7);
        assert_eq!(OptionalValue::some(5).unwrap_or(7), 5);
        assert_eq!(OptionalValue::<i32>::none().unwrap_or_else(|| 7), 7);
        assert_eq!(OptionalValue::<i32>::none().unwrap_or_default(), 0);
    }

    #[test]
    fn equality_compares_against_the_plain_optional() {
        assert_eq!(OptionalValue::some(5), Some(5));
        assert_eq!(OptionalValue::<i32>::none(), None::<i32>);
        assert_ne!(OptionalValue::some(5), Some(6));
        assert_ne!(OptionalValue::some(5), None::<i32>);
    }

    #[test]
    fn ordering_places_absent_before_present() {
        assert!(OptionalValue::<i32>::none() < OptionalValue::some(i32::MIN));
        assert!(OptionalValue::some(1) < OptionalValue::some(2));
    }

    #[test]
    fn iteration_yields_at_most_one_item() {
        let o = OptionalValue::some(5);
        assert_eq!(o.iter().copied().collect::<Vec<_>>(), vec![5]);
        assert_eq!(o.into_iter().collect::<Vec<_>>(), vec![5]);
        let o = OptionalValue::<i32>::none();
        assert_eq!(o.iter().count(), 0);
    }

    #[test]
    fn serialization_matches_the_plain_optional() {
        let s = serde_json::to_string(&OptionalValue::some(5))
            .expect("should serialize value");
        assert_eq!(s, "5");
        let s = serde_json::to_string(&OptionalValue::<i32>::none())
            .expect("should serialize absence");
        assert_eq!(s, "null");
    }

    #[test]
    fn deserialization_works() {
        let o: OptionalValue<i32> = serde_json::from_str("7")
            .expect("should deserialize from value");
        assert_eq!(o, OptionalValue::some(7));
        let o: OptionalValue<i32> = serde_json::from_str("null")
            .expect("should deserialize from null");
        assert!(o.is_absent());
    }

    #[test]
    fn debug_output_matches_the_plain_optional() {
        assert_eq!(format!("{:?}", OptionalValue::some(5)), "Some(5)");
        assert_eq!(format!("{:?}", OptionalValue::<i32>::none()), "None");
    }
}
