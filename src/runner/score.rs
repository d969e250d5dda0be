//! Score accrual on a fixed wall-clock interval.

/// Accumulates elapsed time and converts it into whole score points.
///
/// The remainder after each point carries forward, so the score tracks
/// cumulative time exactly regardless of how the time was sliced into
/// frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTracker {
    score: u32,
    timer_ms: f64,
    interval_ms: f64,
}

impl ScoreTracker {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            score: 0,
            timer_ms: 0.0,
            interval_ms,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Time accumulated toward the next point.
    pub fn timer_ms(&self) -> f64 {
        self.timer_ms
    }

    /// Add elapsed time. Returns the number of points gained.
    pub fn accrue(&mut self, delta_ms: f64) -> u32 {
        if self.interval_ms.is_nan()
            || self.interval_ms <= 0.0
            || !delta_ms.is_finite()
            || delta_ms <= 0.0
        {
            return 0;
        }
        self.timer_ms += delta_ms;
        let mut gained = 0;
        while self.timer_ms >= self.interval_ms {
            self.timer_ms -= self.interval_ms;
            gained += 1;
        }
        self.score = self.score.saturating_add(gained);
        gained
    }
}
