//! Lazy, single-pass sequences as concurrent stage pipelines
//!
//! Every transform spawns an independently scheduled tokio task connected to
//! its neighbours by an unbuffered pipe; the pipe is the sole synchronization
//! primitive between stages and provides natural backpressure. Element order
//! from the source is preserved through every stage; only `flat_map`
//! interleaves, depth-first per upstream element. A `Stream` value is consumed
//! by whatever operation it is passed to; move semantics make reuse of the
//! original binding a compile error.

pub mod core;

mod constructors;
mod stage;
mod terminal;

pub use self::core::Stream;

use std::pin::Pin;
use std::task::{Context, Poll};

// Interop with the futures ecosystem: a pipeline end is itself a
// `futures_core::Stream`. End-of-stream observes the fault slot exactly like
// the internal consumer path.
impl<T> futures_core::Stream for Stream<T>
where
    T: Send + 'static,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = self.get_mut();
        match this.rx.poll_recv(cx) {
            Poll::Ready(None) => {
                if let Some(payload) = this.fault.take() {
                    std::panic::resume_unwind(payload);
                }
                Poll::Ready(None)
            }
            other => other,
        }
    }
}
