//! The animated property set.

#[cfg(test)]
#[path = "pose_test.rs"]
mod pose_test;

/// Visual state of one animated element.
///
/// `alpha` doubles as visibility: an element at zero alpha is hidden outright.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub alpha: f64,
    /// Vertical offset in CSS pixels.
    pub y: f64,
    /// Rotation in degrees.
    pub rotate: f64,
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Fully visible, untransformed.
    pub const IDENTITY: Self = Self { alpha: 1.0, y: 0.0, rotate: 0.0, scale: 1.0 };

    /// Whether the element should be removed from view entirely.
    #[must_use]
    pub fn hidden(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Linear blend from `self` to `to` at `t` (not clamped).
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            alpha: mix(self.alpha, to.alpha, t),
            y: mix(self.y, to.y, t),
            rotate: mix(self.rotate, to.rotate, t),
            scale: mix(self.scale, to.scale, t),
        }
    }

    /// `self` with every field present in `delta` replaced.
    #[must_use]
    pub fn with(&self, delta: &PoseDelta) -> Self {
        Self {
            alpha: delta.alpha.unwrap_or(self.alpha),
            y: delta.y.unwrap_or(self.y),
            rotate: delta.rotate.unwrap_or(self.rotate),
            scale: delta.scale.unwrap_or(self.scale),
        }
    }
}

fn mix(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// A partial pose: the destination of a tween. Absent fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PoseDelta {
    pub alpha: Option<f64>,
    pub y: Option<f64>,
    pub rotate: Option<f64>,
    pub scale: Option<f64>,
}

impl PoseDelta {
    /// A delta that lands on [`Pose::IDENTITY`].
    pub const REVEAL: Self = Self { alpha: Some(1.0), y: Some(0.0), rotate: Some(0.0), scale: Some(1.0) };

    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    #[must_use]
    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn rotate(mut self, rotate: f64) -> Self {
        self.rotate = Some(rotate);
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }
}
