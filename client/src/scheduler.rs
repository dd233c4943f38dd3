//! Frame scheduling
//!
//! Stands in for the display-refresh callback so the loop can be driven by
//! a browser, a native timer or a test.

/// One-shot frame requests, re-armed by the loop after every frame
pub trait FrameScheduler {
    /// Request the next frame. Requesting while one is pending is a no-op.
    fn start(&mut self);
    /// Cancel any pending frame
    fn stop(&mut self);
    /// Consume the pending request; false if none was pending
    fn tick(&mut self) -> bool;
    fn is_pending(&self) -> bool;
}

/// Scheduler driven by hand; counts requests for assertions
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: bool,
    pub requests: u32,
    pub cancels: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&mut self) {
        if !self.pending {
            self.pending = true;
            self.requests += 1;
        }
    }

    fn stop(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancels += 1;
        }
    }

    fn tick(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    fn is_pending(&self) -> bool {
        self.pending
    }
}
