use std::rc::Rc;

use super::*;
use crate::fake::{FakeDocument, FakeElement, FakeVideo};

struct Fixture {
    video: Rc<FakeVideo>,
    play: Rc<FakeElement>,
    pause: Rc<FakeElement>,
}

impl Fixture {
    fn new() -> Self {
        Self { video: FakeVideo::new(), play: FakeElement::new(), pause: FakeElement::new() }
    }

    fn showcase(&self) -> ShowcaseVideo {
        ShowcaseVideo::new(ShowcaseElements {
            wrapper: FakeElement::new().node(),
            video: self.video.clone(),
            play_badge: Some(self.play.node()),
            pause_badge: Some(self.pause.node()),
        })
    }
}

fn settle(showcase: &mut ShowcaseVideo) {
    for _ in 0..1_000 {
        if !showcase.tick(1.0 / 60.0) {
            return;
        }
    }
}

fn start() -> BTreeMap<Badge, Pose> {
    BTreeMap::from([(Badge::Play, Pose::IDENTITY), (Badge::Pause, BADGE_GONE)])
}

#[test]
fn pause_badge_starts_hidden() {
    let fx = Fixture::new();
    fx.showcase();
    assert_eq!(fx.pause.style("visibility").as_deref(), Some("hidden"));
    assert_eq!(fx.play.style("opacity"), None);
}

#[test]
fn toggle_alternates_playback() {
    let fx = Fixture::new();
    let mut showcase = fx.showcase();
    assert!(!showcase.is_playing());
    assert!(showcase.toggle());
    assert_eq!(fx.video.plays.get(), 1);
    assert!(!showcase.toggle());
    assert!(fx.video.is_paused());
}

#[test]
fn playing_hides_both_badges_when_done() {
    let fx = Fixture::new();
    let mut showcase = fx.showcase();
    showcase.toggle();
    settle(&mut showcase);
    assert_eq!(fx.play.style("visibility").as_deref(), Some("hidden"));
    assert_eq!(fx.play.style("transform").as_deref(), Some("translateY(0px) rotate(0deg) scale(1.8)"));
    assert_eq!(fx.pause.style("visibility").as_deref(), Some("hidden"));
}

#[test]
fn pause_badge_flashes_while_starting() {
    let tl = playing_timeline(&start());
    assert!((tl.duration() - 1.0).abs() < 1e-9);
    let mid = tl.sample(0.35);
    assert!(mid[&Badge::Pause].alpha > 0.9);
    assert!(tl.sample(tl.duration())[&Badge::Pause].hidden());
}

#[test]
fn pausing_restores_play_badge() {
    let fx = Fixture::new();
    let mut showcase = fx.showcase();
    showcase.toggle();
    settle(&mut showcase);
    showcase.toggle();
    settle(&mut showcase);
    assert_eq!(fx.play.style("opacity").as_deref(), Some("1"));
    assert_eq!(fx.play.style("transform").as_deref(), Some("translateY(0px) rotate(0deg) scale(1)"));
    assert_eq!(fx.pause.style("visibility").as_deref(), Some("hidden"));
}

#[test]
fn rapid_toggle_continues_from_current_pose() {
    let fx = Fixture::new();
    let mut showcase = fx.showcase();
    showcase.toggle();
    showcase.tick(0.3);
    let play_opacity: f64 = fx.play.style("opacity").unwrap().parse().unwrap();
    assert!(play_opacity > 0.0 && play_opacity < 1.0);

    showcase.toggle();
    showcase.tick(0.0001);
    let resumed: f64 = fx.play.style("opacity").unwrap().parse().unwrap();
    assert!((resumed - play_opacity).abs() < 0.01, "{resumed} vs {play_opacity}");
}

#[test]
fn paused_timeline_lands_on_play_badge() {
    let tl = paused_timeline(&start());
    let end = tl.sample(tl.duration());
    assert_eq!(end[&Badge::Play], Pose::IDENTITY);
    assert_eq!(end[&Badge::Pause], BADGE_GONE);
}

#[test]
fn locate_requires_wrapper_and_video() {
    let doc = FakeDocument::new();
    let cfg = ShowcaseConfig::default();
    doc.register(&cfg.wrapper, FakeElement::new().node());
    assert!(ShowcaseElements::locate(&doc, &cfg).is_none());
    doc.register_media(&cfg.video, FakeVideo::new());
    let elements = ShowcaseElements::locate(&doc, &cfg).unwrap();
    assert!(elements.play_badge.is_none());
}
