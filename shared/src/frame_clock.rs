use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

/// Source of display frames. Timestamps are milliseconds on a monotonic clock.
pub trait FrameClock {
    fn now(&self) -> f64;

    /// Resolves with the timestamp of the next frame.
    fn next_frame(&mut self) -> LocalBoxFuture<'_, f64>;
}

/// Deterministic clock that advances a fixed step per frame and never waits.
#[derive(Debug, Clone)]
pub struct SteppedClock {
    now: f64,
    step_ms: f64,
}

impl SteppedClock {
    pub fn new(step_ms: f64) -> Self {
        Self::starting_at(0.0, step_ms)
    }

    pub fn starting_at(now: f64, step_ms: f64) -> Self {
        Self { now, step_ms }
    }
}

impl FrameClock for SteppedClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn next_frame(&mut self) -> LocalBoxFuture<'_, f64> {
        self.now += self.step_ms;
        future::ready(self.now).boxed_local()
    }
}
