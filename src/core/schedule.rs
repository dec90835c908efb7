use std::cell::Cell;
use std::rc::Rc;

/// Cancellation handle for a per-frame loop.
///
/// Clones share the same flag. The loop checks it before every frame and
/// stops rescheduling once it is set; cancellation is permanent.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Called by the loop driver; returns whether the frame should run.
    pub fn begin_frame(&self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        self.frames.set(self.frames.get() + 1);
        true
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}
