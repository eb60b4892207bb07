//! Terminal consumers
//!
//! Draining terminals block the caller until the producer side closes.
//! Short-circuiting terminals return as soon as the answer is determined and
//! stop pulling upstream: the dropped receiver cancels the producer chain, so
//! they terminate in bounded time over any finite, eventually-closed source.

use crate::optional::Optional;
use crate::stream::core::Stream;

impl<T> Stream<T>
where
    T: Send + 'static,
{
    /// Collect all remaining elements, in order.
    pub async fn to_slice(mut self) -> Vec<T> {
        let mut output = Vec::new();
        while let Some(element) = self.next().await {
            output.push(element);
        }
        output
    }

    /// Invoke `executor` once per element, in order.
    pub async fn for_each<F>(mut self, mut executor: F)
    where
        F: FnMut(T),
    {
        while let Some(element) = self.next().await {
            executor(element);
        }
    }

    /// Left fold starting from the accumulator type's zero value
    /// (`A::default()`).
    ///
    /// Always returns a present `Optional`; over an empty source it holds the
    /// zero value. This deliberately diverges from conventional
    /// reduce-without-identity semantics (which yield empty on an empty
    /// source) and is the documented contract of this operation.
    pub async fn reduce<A, F>(mut self, mut reducer: F) -> Optional<A>
    where
        A: Default,
        F: FnMut(A, T) -> A,
    {
        let mut accumulator = A::default();
        while let Some(element) = self.next().await {
            accumulator = reducer(accumulator, element);
        }
        Optional::of(accumulator)
    }

    /// Left fold starting at `identity`; over an empty source returns
    /// `identity` unchanged.
    pub async fn reduce_with_identity<A, F>(mut self, identity: A, mut reducer: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut accumulator = identity;
        while let Some(element) = self.next().await {
            accumulator = reducer(accumulator, element);
        }
        accumulator
    }

    /// First element satisfying `predicate`, or empty if the source is
    /// exhausted without a match. Stops pulling upstream once found.
    pub async fn find_first<P>(mut self, mut predicate: P) -> Optional<T>
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(element) = self.next().await {
            if predicate(&element) {
                return Optional::of(element);
            }
        }
        Optional::empty()
    }

    /// True as soon as any element satisfies `predicate`; false if the source
    /// is exhausted with none matching (including an empty source).
    pub async fn any_match<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(element) = self.next().await {
            if predicate(&element) {
                return true;
            }
        }
        false
    }

    /// False as soon as any element fails `predicate`; vacuously true over an
    /// empty source.
    pub async fn all_match<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(element) = self.next().await {
            if !predicate(&element) {
                return false;
            }
        }
        true
    }
}
