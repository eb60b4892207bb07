//! Zero-or-one-value container with fluent combinators
//!
//! `Optional<T>` makes absence explicit in a signature. Presence is carried by
//! the inner `Option` discriminant, never by comparing the stored value
//! against an absence sentinel, so `T` needs no notion of an "absent" value of
//! its own. Every combinator consumes `self` and returns a new instance;
//! nothing is mutated in place.

use crate::error::{AbsentValueError, OptionalResult};
use crate::stream::Stream;

/// Container holding zero or one value of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Create an empty `Optional`.
    pub fn empty() -> Self {
        Optional { value: None }
    }

    /// Create an `Optional` holding `value`.
    pub fn of(value: T) -> Self {
        Optional { value: Some(value) }
    }

    /// Transform the held value. Empty stays empty and `mapper` is not invoked.
    pub fn map<O>(self, mapper: impl FnOnce(T) -> O) -> Optional<O> {
        match self.value {
            Some(value) => Optional::of(mapper(value)),
            None => Optional::empty(),
        }
    }

    /// Transform the held value into another `Optional`, flattening exactly one
    /// level: the mapper's result is returned directly.
    pub fn flat_map<O>(self, flat_mapper: impl FnOnce(T) -> Optional<O>) -> Optional<O> {
        match self.value {
            Some(value) => flat_mapper(value),
            None => Optional::empty(),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self.value {
            Some(value) if predicate(&value) => Optional::of(value),
            _ => Optional::empty(),
        }
    }

    /// Run `executor` against the value if present, passing `self` through
    /// unchanged for further chaining.
    pub fn peek(self, executor: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self.value {
            executor(value);
        }
        self
    }

    /// Return `self` if present; otherwise evaluate `supplier` and return its
    /// result. The supplier is not invoked when a value is present.
    pub fn or(self, supplier: impl FnOnce() -> Optional<T>) -> Self {
        if self.value.is_some() {
            self
        } else {
            supplier()
        }
    }

    /// Return the held value, or `default` when empty.
    pub fn or_else(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Return the held value, or the supplier's result when empty. The
    /// supplier is not invoked when a value is present.
    pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
        self.value.unwrap_or_else(supplier)
    }

    /// Extract the held value, failing with [`AbsentValueError`] when empty.
    pub fn get(self) -> OptionalResult<T> {
        self.value.ok_or(AbsentValueError)
    }

    /// Run `executor` against the value if present.
    pub fn if_present(&self, executor: impl FnOnce(&T)) {
        if let Some(value) = &self.value {
            executor(value);
        }
    }

    /// Run `fallback` if empty.
    pub fn or_else_fallback(&self, fallback: impl FnOnce()) {
        if self.value.is_none() {
            fallback();
        }
    }

    /// Run `executor` against the value if present, `fallback` otherwise.
    pub fn if_present_or_else_fallback(&self, executor: impl FnOnce(&T), fallback: impl FnOnce()) {
        match &self.value {
            Some(value) => executor(value),
            None => fallback(),
        }
    }

    /// Whether a value is held.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Whether no value is held.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Optional<T>
where
    T: Send + 'static,
{
    /// Bridge into the pipeline world: a one-element stream when present, an
    /// already-exhausted stream when empty.
    pub fn stream(self) -> Stream<T> {
        match self.value {
            Some(value) => Stream::once(value),
            None => Stream::empty(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}
