//! Declarative animation timelines for the landing page.
//!
//! A [`Timeline`] is a finite, ordered description of pose changes keyed by an
//! arbitrary target type. It knows nothing about the DOM: callers sample it at
//! a playhead position and apply the resulting [`Pose`]s themselves. The
//! [`Playhead`] is the scheduler that moves that position forward or backward
//! once per display frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`ease`] | Easing curves |
//! | [`pose`] | Animated property set and partial deltas |
//! | [`sequence`] | Tweens, staggering, and the [`Timeline`] itself |
//! | [`playhead`] | Playback position, direction, and time scale |

pub mod ease;
pub mod playhead;
pub mod pose;
pub mod sequence;

pub use ease::Ease;
pub use playhead::{Direction, Playhead, TimelineError};
pub use pose::{Pose, PoseDelta};
pub use sequence::{Stagger, Timeline, Tween, TweenOptions};
