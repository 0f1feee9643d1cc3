//! Click-to-play hero video.
//!
//! Clicking the wrapper toggles playback. Starting playback blows the play
//! badge up and away while the pause badge pops in and straight back out;
//! pausing shrinks the pause badge and restores the play badge. Each toggle
//! builds a fresh timeline from wherever the badges currently are, so rapid
//! clicks never snap.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use std::collections::BTreeMap;
use std::rc::Rc;

use timeline::{Ease, Playhead, Pose, PoseDelta, Timeline, TweenOptions};

use crate::config::ShowcaseConfig;
use crate::dom::{DomQuery, FrameDriven, MediaElement, Node, apply_pose};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Badge {
    Play,
    Pause,
}

const BADGE_GONE: Pose = Pose { alpha: 0.0, y: 0.0, rotate: 0.0, scale: 0.0 };

/// Play badge bursts away; pause badge flashes in and out.
#[must_use]
pub fn playing_timeline(from: &BTreeMap<Badge, Pose>) -> Timeline<Badge> {
    let mut tl = Timeline::new(Ease::Power2Out, 0.6);
    for (badge, pose) in from {
        tl.set(*badge, *pose);
    }
    let vanish = PoseDelta::default().scale(0.0).alpha(0.0);
    tl.to_with(Badge::Play, 0.0, PoseDelta::default().scale(1.8).alpha(0.0), TweenOptions::default().duration(0.9))
        .to(Badge::Pause, 0.0, PoseDelta::default().scale(1.0).alpha(1.0))
        .to_with(Badge::Pause, 0.4, vanish, TweenOptions::default().ease(Ease::Power2InOut));
    tl
}

/// Pause badge shrinks away; play badge returns.
#[must_use]
pub fn paused_timeline(from: &BTreeMap<Badge, Pose>) -> Timeline<Badge> {
    let mut tl = Timeline::new(Ease::Power2Out, 0.9);
    for (badge, pose) in from {
        tl.set(*badge, *pose);
    }
    tl.to(Badge::Pause, 0.0, PoseDelta::default().scale(0.0).alpha(0.0))
        .to(Badge::Play, 0.0, PoseDelta::default().scale(1.0).alpha(1.0));
    tl
}

pub struct ShowcaseElements {
    pub wrapper: Node,
    pub video: Rc<dyn MediaElement>,
    pub play_badge: Option<Node>,
    pub pause_badge: Option<Node>,
}

impl ShowcaseElements {
    /// `None` unless both the click wrapper and the video exist. Badges are optional.
    pub fn locate(doc: &dyn DomQuery, cfg: &ShowcaseConfig) -> Option<Self> {
        Some(Self {
            wrapper: doc.query(&cfg.wrapper)?,
            video: doc.media(&cfg.video)?,
            play_badge: doc.query(&cfg.play_icon),
            pause_badge: doc.query(&cfg.pause_icon),
        })
    }
}

pub struct ShowcaseVideo {
    elements: ShowcaseElements,
    timeline: Timeline<Badge>,
    playhead: Playhead,
    poses: BTreeMap<Badge, Pose>,
}

impl ShowcaseVideo {
    /// Hide the pause badge; the play badge stays as authored.
    pub fn new(elements: ShowcaseElements) -> Self {
        let poses = BTreeMap::from([(Badge::Play, Pose::IDENTITY), (Badge::Pause, BADGE_GONE)]);
        let showcase =
            Self { elements, timeline: Timeline::new(Ease::Linear, 0.0), playhead: Playhead::new(0.0), poses };
        if let Some(badge) = &showcase.elements.pause_badge {
            apply_pose(badge.as_ref(), &BADGE_GONE);
        }
        showcase
    }

    /// Play if paused, pause if playing. Returns whether the video is now playing.
    pub fn toggle(&mut self) -> bool {
        let timeline = if self.elements.video.is_paused() {
            self.elements.video.play();
            playing_timeline(&self.poses)
        } else {
            self.elements.video.pause();
            paused_timeline(&self.poses)
        };
        self.playhead = Playhead::new(timeline.duration());
        self.timeline = timeline;
        self.playhead.play();
        let playing = self.is_playing();
        log::debug!("showcase: playing={playing}");
        playing
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.elements.video.is_paused()
    }

    fn sample(&mut self) {
        self.poses.extend(self.timeline.sample(self.playhead.time()));
        for (badge, pose) in &self.poses {
            let node = match badge {
                Badge::Play => &self.elements.play_badge,
                Badge::Pause => &self.elements.pause_badge,
            };
            if let Some(node) = node {
                apply_pose(node.as_ref(), pose);
            }
        }
    }
}

impl FrameDriven for ShowcaseVideo {
    fn tick(&mut self, dt: f64) -> bool {
        let running = self.playhead.advance(dt);
        self.sample();
        running
    }
}
