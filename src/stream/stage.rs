//! Stage plumbing: pipes, the fault side-channel, and task spawning
//!
//! Every pipeline stage runs on its own tokio task and talks to its neighbours
//! exclusively through the pipe between them. A stage's lifecycle is carried by
//! control flow: spawned (idle), looping on recv/send (running), upstream
//! end-of-sequence observed (draining), output sender dropped (closed). The
//! sender drop is the only close signal and happens exactly once.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, Receiver, Sender};

/// Capacity of the pipe between two adjacent stages.
///
/// Tokio has no zero-capacity channel; capacity 1 keeps rendezvous semantics:
/// a producer parks until the consumer takes its element, so a slow consumer
/// stalls the whole upstream chain.
pub(crate) const PIPE_CAPACITY: usize = 1;

/// Construct the pipe connecting two adjacent stages.
pub(crate) fn pipe<T>() -> (Sender<T>, Receiver<T>) {
    mpsc::channel(PIPE_CAPACITY)
}

type Panic = Box<dyn Any + Send + 'static>;

/// Failure side-channel shared by every stage of one pipeline.
///
/// A stage whose caller-supplied function panics records the payload here and
/// then shuts down, tearing the pipeline down in both directions. Whichever
/// consumer next observes end-of-sequence takes the payload and resumes the
/// unwind at its own call site. The first recorded panic wins.
#[derive(Clone, Default)]
pub(crate) struct Fault {
    slot: Arc<Mutex<Option<Panic>>>,
}

impl Fault {
    pub(crate) fn record(&self, payload: Panic) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_none() {
            *slot = Some(payload);
        }
    }

    pub(crate) fn take(&self) -> Option<Panic> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

/// Invoke a caller-supplied function inside a stage, routing a panic into the
/// pipeline's fault slot.
///
/// Returns `None` when the function panicked; the stage must then stop. The
/// payload is recorded before the stage's sender can drop, so a consumer that
/// observes the closed pipe is guaranteed to see the fault.
pub(crate) fn guard<O>(name: &'static str, fault: &Fault, call: impl FnOnce() -> O) -> Option<O> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(output) => Some(output),
        Err(payload) => {
            log::error!(
                "stage {}: caller-supplied function panicked, tearing down pipeline",
                name
            );
            fault.record(payload);
            None
        }
    }
}

/// Run a stage body on a dedicated task.
pub(crate) fn spawn_stage<F>(name: &'static str, body: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        log::trace!("stage {}: running", name);
        body.await;
        log::trace!("stage {}: closed", name);
    });
}
