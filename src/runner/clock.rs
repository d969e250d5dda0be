//! Frame clock: turns per-refresh timestamps into elapsed-time deltas.

/// Tracks the timestamp of the previous update cycle.
///
/// Timestamps are milliseconds on any monotonic clock the front end likes
/// (`Instant`-based in the terminal, a fixed-step counter in the simulator).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Start counting from `now_ms`. The first delta is measured from here.
    pub fn restart(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// Elapsed time since the previous call (or since `restart`).
    ///
    /// Returns `None` for a clock that was never started, a non-finite
    /// timestamp, or one that runs backwards. In that case the stored
    /// timestamp is left untouched.
    pub fn advance(&mut self, now_ms: f64) -> Option<f64> {
        let last = self.last_ms?;
        if !now_ms.is_finite() || now_ms < last {
            return None;
        }
        self.last_ms = Some(now_ms);
        Some(now_ms - last)
    }
}
