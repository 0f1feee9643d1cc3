//! Video lightbox for the hero and showcase sections.
//!
//! Opening shows the modal, locks page scroll, embeds the player, and plays a
//! short fade/scale-in. Closing plays its own quicker fade/scale-out from
//! wherever the elements currently are, then tears the player down.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::collections::BTreeMap;

use timeline::{Ease, Playhead, Pose, PoseDelta, Timeline, TweenOptions};

use crate::config::ModalConfig;
use crate::dom::{DomQuery, FrameDriven, Node, apply_pose, scroll_lock};
use crate::error::{BindError, ModalError};

/// Video id from a `watch?v=` link: the text after the first `v=` up to any `&`.
#[must_use]
pub fn youtube_video_id(link: &str) -> Option<&str> {
    let (_, rest) = link.split_once("v=")?;
    let id = rest.split('&').next().unwrap_or_default();
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(id)
}

fn embed_markup(id: &str) -> String {
    format!(
        "<iframe src=\"https://www.youtube.com/embed/{id}?autoplay=1\" frameborder=\"0\" \
         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
         allowfullscreen></iframe>"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModalTarget {
    Overlay,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Open,
    /// Playing the close transition; becomes `Hidden` when it lands.
    Closing,
}

pub struct ModalElements {
    pub root: Node,
    pub overlay: Node,
    pub content: Node,
    pub player: Node,
    pub body: Option<Node>,
}

impl ModalElements {
    /// # Errors
    ///
    /// Returns [`BindError::MissingElement`] for the first absent part.
    pub fn locate(doc: &dyn DomQuery, cfg: &ModalConfig) -> Result<Self, BindError> {
        let require = |selector: &str| doc.query(selector).ok_or_else(|| BindError::missing(selector));
        Ok(Self {
            root: require(&cfg.root)?,
            overlay: require(&cfg.overlay)?,
            content: require(&cfg.content)?,
            player: require(&cfg.player)?,
            body: doc.body(),
        })
    }
}

const OVERLAY_HIDDEN: Pose = Pose { alpha: 0.0, ..Pose::IDENTITY };
const CONTENT_HIDDEN: Pose = Pose { alpha: 0.0, y: 40.0, rotate: 0.0, scale: 0.8 };

/// Fade the overlay in, then lift and grow the content into place.
#[must_use]
pub fn open_timeline() -> Timeline<ModalTarget> {
    let mut tl = Timeline::new(Ease::Power2Out, 0.5);
    tl.set(ModalTarget::Overlay, OVERLAY_HIDDEN)
        .set(ModalTarget::Content, CONTENT_HIDDEN)
        .to_with(
            ModalTarget::Overlay,
            0.0,
            PoseDelta::default().alpha(1.0),
            TweenOptions::default().duration(0.3).ease(Ease::Linear),
        )
        .to(ModalTarget::Content, 0.2, PoseDelta::REVEAL);
    tl
}

/// Drop the content away, overlapping the overlay fade, starting from `from`.
#[must_use]
pub fn close_timeline(from: &BTreeMap<ModalTarget, Pose>) -> Timeline<ModalTarget> {
    let mut tl = Timeline::new(Ease::Power2Out, 0.3);
    for (target, pose) in from {
        tl.set(*target, *pose);
    }
    tl.to_with(
        ModalTarget::Content,
        0.0,
        PoseDelta::default().alpha(0.0).scale(0.8).y(40.0),
        TweenOptions::default().ease(Ease::Power2In),
    )
    .to(ModalTarget::Overlay, 0.1, PoseDelta::default().alpha(0.0));
    tl
}

pub struct VideoModal {
    elements: ModalElements,
    timeline: Timeline<ModalTarget>,
    playhead: Playhead,
    poses: BTreeMap<ModalTarget, Pose>,
    state: ModalState,
}

impl VideoModal {
    pub fn new(elements: ModalElements) -> Self {
        let poses = BTreeMap::from([(ModalTarget::Overlay, OVERLAY_HIDDEN), (ModalTarget::Content, CONTENT_HIDDEN)]);
        let modal = Self {
            elements,
            timeline: Timeline::new(Ease::Linear, 0.0),
            playhead: Playhead::new(0.0),
            poses,
            state: ModalState::Hidden,
        };
        modal.elements.root.set_style("display", "none");
        modal.apply_poses();
        modal
    }

    /// Show the modal playing `link`.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidVideoLink`] when no video id can be read
    /// from `link`; the modal is left as it was.
    pub fn open(&mut self, link: &str) -> Result<(), ModalError> {
        let id = youtube_video_id(link).ok_or_else(|| ModalError::InvalidVideoLink(link.to_owned()))?;
        self.elements.root.set_style("display", "block");
        if let Some(body) = &self.elements.body {
            scroll_lock(body.as_ref(), true);
        }
        self.elements.player.set_inner_html(&embed_markup(id));
        self.start(open_timeline());
        self.state = ModalState::Open;
        log::debug!("modal: playing {id}");
        Ok(())
    }

    /// Play the close transition. Does nothing unless the modal is open.
    pub fn close(&mut self) {
        if self.state != ModalState::Open {
            return;
        }
        self.start(close_timeline(&self.poses));
        self.state = ModalState::Closing;
        if !self.playhead.is_running() {
            self.finish_close();
        }
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    fn start(&mut self, timeline: Timeline<ModalTarget>) {
        self.playhead = Playhead::new(timeline.duration());
        self.timeline = timeline;
        self.playhead.play();
        self.sample();
    }

    fn finish_close(&mut self) {
        self.elements.root.set_style("display", "none");
        if let Some(body) = &self.elements.body {
            scroll_lock(body.as_ref(), false);
        }
        self.elements.player.set_inner_html("");
        self.state = ModalState::Hidden;
        log::debug!("modal: closed");
    }

    fn sample(&mut self) {
        self.poses.extend(self.timeline.sample(self.playhead.time()));
        self.apply_poses();
    }

    fn apply_poses(&self) {
        for (target, pose) in &self.poses {
            let node = match target {
                ModalTarget::Overlay => &self.elements.overlay,
                ModalTarget::Content => &self.elements.content,
            };
            apply_pose(node.as_ref(), pose);
        }
    }
}

impl FrameDriven for VideoModal {
    fn tick(&mut self, dt: f64) -> bool {
        let running = self.playhead.advance(dt);
        self.sample();
        if !running && self.state == ModalState::Closing {
            self.finish_close();
        }
        running
    }
}
