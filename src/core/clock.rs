use crate::core::constants::FRAME_FAILURE_LOG_EVERY;

/// Bookkeeping for one animation loop.
///
/// A loop keeps rescheduling itself even when a step fails; these counters
/// decide when a failure is worth logging so a broken step does not flood
/// the console at display refresh rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub failures: u64,
    pub skipped: u64,
}

impl FrameStats {
    #[inline]
    pub fn record_ok(&mut self) {
        self.frames += 1;
    }

    /// Count a failed step; returns true when this failure should be logged
    /// (the first one, then every `FRAME_FAILURE_LOG_EVERY`th).
    #[inline]
    pub fn record_failure(&mut self) -> bool {
        self.frames += 1;
        self.failures += 1;
        self.failures == 1 || self.failures % FRAME_FAILURE_LOG_EVERY == 0
    }

    /// Count a frame dropped because the state was still borrowed.
    #[inline]
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }
}
