//! Tweens and the timeline that orders them.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::collections::BTreeMap;

use crate::ease::Ease;
use crate::pose::{Pose, PoseDelta};

/// One animated transition of a single target between two poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<K> {
    pub target: K,
    pub from: Pose,
    pub to: Pose,
    /// Start offset in seconds from the beginning of the timeline.
    pub start: f64,
    /// Length in seconds.
    pub duration: f64,
    pub ease: Ease,
}

impl<K> Tween<K> {
    /// Timeline offset at which this tween has fully landed.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Linear local progress at timeline position `time`, in `[0, 1]`.
    #[must_use]
    pub fn progress_at(&self, time: f64) -> f64 {
        if time < self.start {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            ((time - self.start) / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Interpolated pose at timeline position `time`.
    #[must_use]
    pub fn pose_at(&self, time: f64) -> Pose {
        self.from.lerp(&self.to, self.ease.apply(self.progress_at(time)))
    }
}

/// Per-tween overrides of the timeline defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TweenOptions {
    pub duration: Option<f64>,
    pub ease: Option<Ease>,
    /// Added to the start offset.
    pub delay: f64,
}

impl TweenOptions {
    #[must_use]
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

/// Spreads the start of a group of tweens over `amount` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub amount: f64,
    pub ease: Ease,
}

impl Stagger {
    /// Start offset of item `index` out of `count`, relative to the group start.
    #[must_use]
    pub fn offset(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let t = index as f64 / (count - 1) as f64;
        self.amount * self.ease.apply(t)
    }
}

/// An ordered, finite description of pose changes keyed by target.
///
/// Built once, then sampled at arbitrary positions. The `from` pose of every
/// tween is the target's pose once all of its earlier tweens have landed, so
/// a timeline reads top to bottom like the sequence it describes.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    default_ease: Ease,
    default_duration: f64,
    initial: BTreeMap<K, Pose>,
    settled: BTreeMap<K, Pose>,
    tweens: Vec<Tween<K>>,
}

impl<K: Copy + Ord> Timeline<K> {
    #[must_use]
    pub fn new(default_ease: Ease, default_duration: f64) -> Self {
        Self {
            default_ease,
            default_duration,
            initial: BTreeMap::new(),
            settled: BTreeMap::new(),
            tweens: Vec::new(),
        }
    }

    /// Pin the pose `target` has before anything plays.
    pub fn set(&mut self, target: K, pose: Pose) -> &mut Self {
        self.initial.insert(target, pose);
        self.settled.insert(target, pose);
        self
    }

    /// Tween `target` towards `delta` starting at `start`, with timeline defaults.
    pub fn to(&mut self, target: K, start: f64, delta: PoseDelta) -> &mut Self {
        self.to_with(target, start, delta, TweenOptions::default())
    }

    /// Tween `target` towards `delta` starting at `start + options.delay`.
    pub fn to_with(&mut self, target: K, start: f64, delta: PoseDelta, options: TweenOptions) -> &mut Self {
        let from = self.settled.get(&target).copied().unwrap_or_default();
        let to = from.with(&delta);
        self.initial.entry(target).or_insert(from);
        self.settled.insert(target, to);
        self.tweens.push(Tween {
            target,
            from,
            to,
            start: (start + options.delay).max(0.0),
            duration: options.duration.unwrap_or(self.default_duration).max(0.0),
            ease: options.ease.unwrap_or(self.default_ease),
        });
        self
    }

    /// Tween every target in `targets` towards `delta`, spreading their starts with `stagger`.
    pub fn to_staggered(
        &mut self,
        targets: &[K],
        start: f64,
        delta: PoseDelta,
        options: TweenOptions,
        stagger: Stagger,
    ) -> &mut Self {
        for (index, target) in targets.iter().enumerate() {
            let offset = stagger.offset(index, targets.len());
            self.to_with(*target, start + offset, delta, options);
        }
        self
    }

    /// Offset at which the last tween lands.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    #[must_use]
    pub fn tweens(&self) -> &[Tween<K>] {
        &self.tweens
    }

    /// Pose of `target` before playback, if the timeline touches it.
    #[must_use]
    pub fn initial(&self, target: K) -> Option<Pose> {
        self.initial.get(&target).copied()
    }

    /// Every target's pose at position `time`.
    #[must_use]
    pub fn sample(&self, time: f64) -> BTreeMap<K, Pose> {
        let mut poses = self.initial.clone();
        for tween in &self.tweens {
            if time >= tween.start {
                poses.insert(tween.target, tween.pose_at(time));
            }
        }
        poses
    }
}
