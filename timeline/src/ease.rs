//! Easing curves mapping linear progress to eased progress.

#[cfg(test)]
#[path = "ease_test.rs"]
mod ease_test;

/// An easing curve. Every curve maps `0 → 0` and `1 → 1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Cubic acceleration from rest.
    Power2In,
    /// Cubic deceleration into rest.
    Power2Out,
    /// Cubic acceleration, then deceleration, symmetric about the midpoint.
    Power2InOut,
    /// Exponential deceleration; lands exactly on 1.
    #[default]
    ExpoOut,
    /// Deceleration that overshoots the destination before settling.
    /// The inner value is the overshoot amount.
    BackOut(f64),
}

impl Ease {
    /// Overshoot used by the menu triggers.
    pub const BACK_OUT_DEFAULT: Self = Self::BackOut(1.7);

    /// Eased progress for linear progress `t`, clamped into `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power2In => t * t * t,
            Self::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = 2.0 - 2.0 * t;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}
