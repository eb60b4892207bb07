//! The `Stream` type and its transform stages
//!
//! A `Stream<T>` is the consuming end of the pipe feeding it. Each transform
//! takes `self` by value, spawns one stage task wired to a fresh downstream
//! pipe, and returns the new stream, so a stream binding is consumable at
//! most once, enforced by move semantics. Dropping a stream drops its
//! receiver; the blocked upstream send then fails and cancellation ripples
//! back to the source, releasing every producer task.

use crate::stream::stage::{guard, pipe, spawn_stage, Fault};
use std::panic;
use tokio::sync::mpsc::Receiver;

/// Lazy, single-pass, ordered sequence of `T`, realized as a pipeline of
/// concurrently scheduled stages.
///
/// Transforms and terminals must be called from within a tokio runtime, since
/// each transform spawns a stage task.
pub struct Stream<T> {
    pub(crate) rx: Receiver<T>,
    pub(crate) fault: Fault,
}

impl<T> Stream<T>
where
    T: Send + 'static,
{
    pub(crate) fn from_parts(rx: Receiver<T>, fault: Fault) -> Self {
        Stream { rx, fault }
    }

    /// Pull the next element on behalf of a consumer. On end-of-sequence,
    /// re-raise a recorded pipeline fault so the failure surfaces at the
    /// consumer's call site.
    ///
    /// A closed pipe reports `None` exactly once per consumer loop; callers
    /// treat it as terminal and never re-poll. Stage bodies read their
    /// upstream pipe directly instead; the fault slot is shared along the
    /// chain, so only the end consumer observes it.
    pub(crate) async fn next(&mut self) -> Option<T> {
        match self.rx.recv().await {
            Some(element) => Some(element),
            None => {
                if let Some(payload) = self.fault.take() {
                    panic::resume_unwind(payload);
                }
                None
            }
        }
    }

    /// 1:1 transform of every element, order preserved.
    pub fn map<O, F>(mut self, mut mapper: F) -> Stream<O>
    where
        O: Send + 'static,
        F: FnMut(T) -> O + Send + 'static,
    {
        let fault = self.fault.clone();
        let (tx, rx) = pipe();
        spawn_stage("map", {
            let fault = fault.clone();
            async move {
                while let Some(element) = self.rx.recv().await {
                    let mapped = match guard("map", &fault, || mapper(element)) {
                        Some(mapped) => mapped,
                        None => break,
                    };
                    if tx.send(mapped).await.is_err() {
                        break;
                    }
                }
            }
        });
        Stream::from_parts(rx, fault)
    }

    /// Drop elements for which `predicate` is false; relative order of the
    /// retained elements is preserved.
    pub fn filter<P>(mut self, mut predicate: P) -> Stream<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        let fault = self.fault.clone();
        let (tx, rx) = pipe();
        spawn_stage("filter", {
            let fault = fault.clone();
            async move {
                while let Some(element) = self.rx.recv().await {
                    match guard("filter", &fault, || predicate(&element)) {
                        Some(true) => {
                            if tx.send(element).await.is_err() {
                                break;
                            }
                        }
                        Some(false) => {}
                        None => break,
                    }
                }
            }
        });
        Stream::from_parts(rx, fault)
    }

    /// For each upstream element, in order, forward every element of
    /// `flat_mapper(element)` before advancing. Sub-sequences of two different
    /// upstream elements never interleave.
    pub fn flat_map<O, F>(mut self, mut flat_mapper: F) -> Stream<O>
    where
        O: Send + 'static,
        F: FnMut(T) -> Stream<O> + Send + 'static,
    {
        let fault = self.fault.clone();
        let (tx, rx) = pipe();
        spawn_stage("flat_map", {
            let fault = fault.clone();
            async move {
                while let Some(element) = self.rx.recv().await {
                    let mut sub = match guard("flat_map", &fault, || flat_mapper(element)) {
                        Some(sub) => sub,
                        None => return,
                    };
                    // Drain the sub-stream completely before pulling the next
                    // upstream element. The sub-pipeline has its own fault
                    // slot; forward it into this pipeline's before closing.
                    loop {
                        match sub.rx.recv().await {
                            Some(sub_element) => {
                                if tx.send(sub_element).await.is_err() {
                                    return;
                                }
                            }
                            None => {
                                if let Some(payload) = sub.fault.take() {
                                    fault.record(payload);
                                    return;
                                }
                                break;
                            }
                        }
                    }
                }
            }
        });
        Stream::from_parts(rx, fault)
    }

    /// Drop the first `skip` elements by position, forward the rest unchanged.
    pub fn skip(mut self, skip: usize) -> Stream<T> {
        let fault = self.fault.clone();
        let (tx, rx) = pipe();
        spawn_stage("skip", async move {
            let mut index = 0usize;
            while let Some(element) = self.rx.recv().await {
                if index >= skip {
                    if tx.send(element).await.is_err() {
                        break;
                    }
                }
                index += 1;
            }
        });
        Stream::from_parts(rx, fault)
    }

    /// Forward only the first `limit` elements, then stop pulling upstream.
    ///
    /// Emits exactly `min(limit, upstream length)` elements. Once satisfied,
    /// the stage exits and drops its upstream receiver, cancelling the
    /// producer chain even over an unbounded source.
    pub fn limit(mut self, limit: usize) -> Stream<T> {
        let fault = self.fault.clone();
        let (tx, rx) = pipe();
        spawn_stage("limit", async move {
            let mut forwarded = 0usize;
            while forwarded < limit {
                match self.rx.recv().await {
                    Some(element) => {
                        if tx.send(element).await.is_err() {
                            break;
                        }
                        forwarded += 1;
                    }
                    None => break,
                }
            }
        });
        Stream::from_parts(rx, fault)
    }

    /// Invoke `executor` once per element as a side effect, passing the
    /// element through unchanged.
    pub fn peek<F>(mut self, mut executor: F) -> Stream<T>
    where
        F: FnMut(&T) + Send + 'static,
    {
        let fault = self.fault.clone();
        let (tx, rx) = pipe();
        spawn_stage("peek", {
            let fault = fault.clone();
            async move {
                while let Some(element) = self.rx.recv().await {
                    if guard("peek", &fault, || executor(&element)).is_none() {
                        break;
                    }
                    if tx.send(element).await.is_err() {
                        break;
                    }
                }
            }
        });
        Stream::from_parts(rx, fault)
    }
}
