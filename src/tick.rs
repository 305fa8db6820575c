use std::time::Duration;

/// Turns per-frame timestamps into elapsed-time deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<Duration>,
}

impl FrameClock {
    /// time since the previous frame; the very first frame is the zero baseline
    pub fn delta(&mut self, now: Duration) -> Duration {
        let delta = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last = Some(now);
        delta
    }
}

/// Fires at most one generation per call once more than `interval` has piled up.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    accumulated: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `delta` and reports whether a step is due.
    ///
    /// The accumulator is reset to zero when a step fires; any overshoot is
    /// dropped, so a long stall still produces a single step.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.accumulated += delta;
        if self.accumulated <= self.interval {
            return false;
        }
        self.accumulated = Duration::ZERO;
        true
    }

    #[inline]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
