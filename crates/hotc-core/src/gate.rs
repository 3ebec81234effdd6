//! Schedule-if-none-pending latch used to coalesce high-rate input.
//!
//! Listeners call [`FrameGate::offer`] with the newest payload. Only the first
//! offer after the gate is idle asks for a frame; later offers overwrite the
//! payload. When the frame runs, [`FrameGate::fire`] hands back the newest
//! payload and re-opens the gate.

#[derive(Debug)]
pub struct FrameGate<P> {
    pending: bool,
    latest: Option<P>,
    offered: u64,
    fired: u64,
}

impl<P> Default for FrameGate<P> {
    fn default() -> Self {
        Self {
            pending: false,
            latest: None,
            offered: 0,
            fired: 0,
        }
    }
}

impl<P> FrameGate<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `payload`. Returns true when the caller must request a frame.
    pub fn offer(&mut self, payload: P) -> bool {
        self.latest = Some(payload);
        self.offered += 1;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Frame callback entry point. `None` means the gate was cancelled.
    pub fn fire(&mut self) -> Option<P> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.fired += 1;
        self.latest.take()
    }

    /// Drop any pending work. Returns true if a frame was outstanding.
    pub fn cancel(&mut self) -> bool {
        self.latest = None;
        std::mem::replace(&mut self.pending, false)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// (events offered, frames fired) since creation.
    pub fn counts(&self) -> (u64, u64) {
        (self.offered, self.fired)
    }
}
