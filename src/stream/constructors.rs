//! Stream sources

use crate::stream::core::Stream;
use crate::stream::stage::{guard, pipe, spawn_stage, Fault};

impl<T> Stream<T>
where
    T: Send + 'static,
{
    /// A stream whose iteration reports end-of-sequence immediately. Never
    /// blocks: the pipe is already closed when the stream is handed out.
    pub fn empty() -> Self {
        let (tx, rx) = pipe();
        drop(tx);
        Stream::from_parts(rx, Fault::default())
    }

    /// Spawn a producer stage emitting `elements` in iterator order, closing
    /// the pipe after the last one.
    ///
    /// The iterator may be unbounded (e.g. `0..`); the producer then runs
    /// until a downstream consumer stops pulling, at which point it is
    /// cancelled by the dropped receiver. The iterator is caller-supplied
    /// code, so its panics are routed through the fault slot like any other.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T> + Send + 'static,
        I::IntoIter: Send,
    {
        let fault = Fault::default();
        let (tx, rx) = pipe();
        spawn_stage("source", {
            let fault = fault.clone();
            async move {
                let mut elements = match guard("source", &fault, || elements.into_iter()) {
                    Some(iter) => iter,
                    None => return,
                };
                loop {
                    let element = match guard("source", &fault, || elements.next()) {
                        Some(Some(element)) => element,
                        _ => break,
                    };
                    if tx.send(element).await.is_err() {
                        break;
                    }
                }
            }
        });
        Stream::from_parts(rx, fault)
    }

    /// Single-element stream; backs [`Optional::stream`](crate::Optional::stream).
    pub fn once(element: T) -> Self {
        Stream::of(std::iter::once(element))
    }
}
