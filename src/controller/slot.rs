//! Latest-wins bookkeeping for one request stream.

use tokio::task::JoinHandle;

/// Tracks the single live request of a stream.
///
/// Every new request gets a fresh generation and aborts its predecessor.
/// A completion is accepted only if its generation is still current, so a
/// result that was already queued before the abort is discarded too.
#[derive(Debug, Default)]
pub(crate) struct RequestSlot {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl RequestSlot {
    /// Supersede any in-flight request and return the new generation.
    pub(crate) fn next_generation(&mut self) -> u64 {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub(crate) fn track(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    /// Accept a completion. Returns `false` for stale generations.
    pub(crate) fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.task.is_none() {
            return false;
        }
        self.task = None;
        true
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for RequestSlot {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
