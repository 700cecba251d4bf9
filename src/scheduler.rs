//! Single-slot frame scheduler.
//!
//! Scroll and resize events can arrive many times per rendered frame. Each one asks for a
//! recomputation, but only the first request in a frame is kept; the rest are dropped until the
//! frame consumes the slot.

use tracing::trace;

#[derive(Default, Debug)]
/// At most one pending piece of per-frame work.
pub struct FrameScheduler {
    pending: bool,
}

impl FrameScheduler {
    #[must_use]
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks for work in the next frame. Returns `false` if a request was already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        trace!("Frame requested");
        self.pending = true;
        true
    }

    /// Consumes the pending request, if there is one. Called once per rendered frame.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Drops any pending request without running it.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    #[must_use]
    /// Whether a request is waiting for the next frame.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
