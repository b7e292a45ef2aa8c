use crate::constants::MS_PER_SECOND;

/// Converts scheduler timestamps (milliseconds) into elapsed animation seconds.
///
/// The start time is latched once, on the first tick that has a surface to
/// draw on, and never moves afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    start_ms: Option<f64>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the start time if it has not been set yet.
    pub fn start_at(&mut self, timestamp_ms: f64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(timestamp_ms);
        }
    }

    pub fn is_started(&self) -> bool {
        self.start_ms.is_some()
    }

    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    /// Seconds since start; zero before the clock has started.
    #[inline]
    pub fn elapsed_seconds(&self, timestamp_ms: f64) -> f64 {
        match self.start_ms {
            Some(start) => (timestamp_ms - start) / MS_PER_SECOND,
            None => 0.0,
        }
    }

    /// Latch on first use, then return elapsed seconds for this tick.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        self.start_at(timestamp_ms);
        self.elapsed_seconds(timestamp_ms)
    }
}
