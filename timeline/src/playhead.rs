//! Playback position for a timeline.
//!
//! The playhead is advanced once per display frame by whatever drives the
//! page; the timeline itself is never mutated by playback.

#[cfg(test)]
#[path = "playhead_test.rs"]
mod playhead_test;

/// Error returned by [`Playhead::set_time_scale`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("time scale must be positive and finite, got {0}")]
    InvalidTimeScale(f64),
}

/// Which way the playhead moves when advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Position, direction, and rate of playback over a timeline of fixed length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playhead {
    time: f64,
    duration: f64,
    time_scale: f64,
    direction: Direction,
    running: bool,
}

impl Playhead {
    /// A paused playhead at the start of a timeline `duration` seconds long.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self { time: 0.0, duration: duration.max(0.0), time_scale: 1.0, direction: Direction::Forward, running: false }
    }

    /// Run towards the end. A no-op when already running forward.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.running = self.time < self.duration;
    }

    /// Run back towards the start.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.running = self.time > 0.0;
    }

    /// Multiplier applied to every `advance`.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidTimeScale`] for zero, negative, or non-finite scales.
    pub fn set_time_scale(&mut self, scale: f64) -> Result<(), TimelineError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(TimelineError::InvalidTimeScale(scale));
        }
        self.time_scale = scale;
        Ok(())
    }

    /// Move by `dt` seconds of wall time. Returns whether playback is still running.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.running || !dt.is_finite() || dt <= 0.0 {
            return self.running;
        }
        let step = dt * self.time_scale;
        match self.direction {
            Direction::Forward => {
                self.time = (self.time + step).min(self.duration);
                self.running = self.time < self.duration;
            }
            Direction::Reverse => {
                self.time = (self.time - step).max(0.0);
                self.running = self.time > 0.0;
            }
        }
        self.running
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Position as a fraction of the timeline; 1 for an empty timeline.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 { 1.0 } else { self.time / self.duration }
    }
}
