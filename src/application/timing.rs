//! Fixed-interval stepping driven by variable frame deltas.

use crate::error::{Error, Result};

/// Turns raw frame timestamps into elapsed milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    previous_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the last call. The first call only records the
    /// baseline and returns 0; a timestamp going backwards also yields 0.
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
        let elapsed = match self.previous_ms {
            Some(previous) => (timestamp_ms - previous).max(0.0),
            None => 0.0,
        };
        self.previous_ms = Some(timestamp_ms);
        elapsed
    }
}

/// Countdown to the next generation plus the pause flag.
#[derive(Clone, Copy, Debug)]
pub struct Timing {
    countdown_ms: f64,
    interval_ms: f64,
    paused: bool,
}

impl Timing {
    /// Starts paused with nothing left to wait
    pub fn new(interval_ms: f64) -> Self {
        Self {
            countdown_ms: 0.0,
            interval_ms,
            paused: true,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn countdown_ms(&self) -> f64 {
        self.countdown_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Resuming drops whatever was left of the countdown
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused && !paused {
            self.countdown_ms = 0.0;
        }
        self.paused = paused;
    }

    pub fn request_immediate_step(&mut self) {
        self.countdown_ms = 0.0;
    }

    /// Replace the interval. Only finite positive values are accepted.
    pub fn set_interval(&mut self, interval_ms: f64) -> Result<()> {
        if interval_ms.is_finite() && interval_ms > 0.0 {
            self.interval_ms = interval_ms;
            Ok(())
        } else {
            Err(Error::InvalidInterval(interval_ms.to_string()))
        }
    }

    /// Spend `elapsed_ms` of the countdown. Returns true when a generation
    /// is due, in which case the countdown restarts from the interval.
    pub fn consume(&mut self, elapsed_ms: f64) -> bool {
        if self.paused {
            return false;
        }
        self.countdown_ms -= elapsed_ms;
        if self.countdown_ms <= 0.0 {
            self.countdown_ms = self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Remaining wait as a share of the interval, within 0..=1
    pub fn countdown_fraction(&self) -> f64 {
        (self.countdown_ms / self.interval_ms).clamp(0.0, 1.0)
    }
}
