//! Pure function and predicate combinators
//!
//! Helpers for building the mapper and predicate arguments consumed by
//! [`Optional`](crate::Optional) and [`Stream`](crate::Stream). They are
//! ordinary higher-order functions returning closures, side-effect free and
//! freely shareable. Predicates take `&T` to line up with the `filter` /
//! `find_first` signatures.

/// The identity function.
pub fn identity<T>() -> impl Fn(T) -> T {
    |x| x
}

/// A predicate that accepts every element.
pub fn always<T>() -> impl Fn(&T) -> bool {
    |_| true
}

/// A predicate that rejects every element.
pub fn never<T>() -> impl Fn(&T) -> bool {
    |_| false
}

/// Compose two functions right-to-left: `compose(f, g)(x) == f(g(x))`.
pub fn compose<I, M, O>(f: impl Fn(M) -> O, g: impl Fn(I) -> M) -> impl Fn(I) -> O {
    move |x| f(g(x))
}

/// Compose two functions left-to-right: `and_then(f, g)(x) == g(f(x))`.
pub fn and_then<I, M, O>(f: impl Fn(I) -> M, g: impl Fn(M) -> O) -> impl Fn(I) -> O {
    move |x| g(f(x))
}

/// Negate a predicate.
pub fn not<T>(predicate: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |x| !predicate(x)
}

/// Conjunction of two predicates, short-circuiting on the first.
pub fn and<T>(p1: impl Fn(&T) -> bool, p2: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |x| p1(x) && p2(x)
}

/// Disjunction of two predicates, short-circuiting on the first.
pub fn or<T>(p1: impl Fn(&T) -> bool, p2: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |x| p1(x) || p2(x)
}
