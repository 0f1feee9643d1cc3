use std::collections::BTreeMap;
use std::rc::Rc;

use super::*;
use crate::fake::{FakeDocument, FakeElement};

struct Fixture {
    root: Rc<FakeElement>,
    overlay: Rc<FakeElement>,
    content: Rc<FakeElement>,
    player: Rc<FakeElement>,
    body: Rc<FakeElement>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            root: FakeElement::new(),
            overlay: FakeElement::new(),
            content: FakeElement::new(),
            player: FakeElement::new(),
            body: FakeElement::new(),
        }
    }

    fn modal(&self) -> VideoModal {
        VideoModal::new(ModalElements {
            root: self.root.node(),
            overlay: self.overlay.node(),
            content: self.content.node(),
            player: self.player.node(),
            body: Some(self.body.node()),
        })
    }
}

fn settle(modal: &mut VideoModal) {
    for _ in 0..1_000 {
        if !modal.tick(1.0 / 60.0) {
            return;
        }
    }
}

const LINK: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

// =============================================================
// youtube_video_id
// =============================================================

#[test]
fn video_id_from_watch_link() {
    assert_eq!(youtube_video_id(LINK), Some("dQw4w9WgXcQ"));
}

#[test]
fn video_id_stops_at_next_parameter() {
    assert_eq!(youtube_video_id("https://youtube.com/watch?v=abc_-12&t=30s"), Some("abc_-12"));
}

#[test]
fn video_id_rejects_missing_or_unsafe_ids() {
    assert_eq!(youtube_video_id("https://youtu.be/abc"), None);
    assert_eq!(youtube_video_id("https://youtube.com/watch?v="), None);
    assert_eq!(youtube_video_id("https://youtube.com/watch?v=\"><script>"), None);
}

// =============================================================
// VideoModal
// =============================================================

#[test]
fn new_modal_is_hidden() {
    let fx = Fixture::new();
    let modal = fx.modal();
    assert_eq!(modal.state(), ModalState::Hidden);
    assert_eq!(fx.root.style("display").as_deref(), Some("none"));
    assert_eq!(fx.overlay.style("visibility").as_deref(), Some("hidden"));
}

#[test]
fn open_shows_player_and_locks_scroll() {
    let fx = Fixture::new();
    let mut modal = fx.modal();
    modal.open(LINK).unwrap();
    assert_eq!(modal.state(), ModalState::Open);
    assert_eq!(fx.root.style("display").as_deref(), Some("block"));
    assert_eq!(fx.body.style("overflow").as_deref(), Some("hidden"));
    assert!(fx.player.html().contains("youtube.com/embed/dQw4w9WgXcQ?autoplay=1"));

    settle(&mut modal);
    assert_eq!(fx.content.style("transform").as_deref(), Some("translateY(0px) rotate(0deg) scale(1)"));
    assert_eq!(fx.overlay.style("opacity").as_deref(), Some("1"));
}

#[test]
fn invalid_link_leaves_modal_untouched() {
    let fx = Fixture::new();
    let mut modal = fx.modal();
    let err = modal.open("https://example.com/video").unwrap_err();
    assert_eq!(err, ModalError::InvalidVideoLink("https://example.com/video".to_owned()));
    assert_eq!(modal.state(), ModalState::Hidden);
    assert_eq!(fx.root.style("display").as_deref(), Some("none"));
    assert_eq!(fx.body.style("overflow"), None);
}

#[test]
fn close_tears_down_after_rewind() {
    let fx = Fixture::new();
    let mut modal = fx.modal();
    modal.open(LINK).unwrap();
    settle(&mut modal);
    modal.close();
    assert_eq!(modal.state(), ModalState::Closing);
    assert_eq!(fx.root.style("display").as_deref(), Some("block"));

    settle(&mut modal);
    assert_eq!(modal.state(), ModalState::Hidden);
    assert_eq!(fx.root.style("display").as_deref(), Some("none"));
    assert_eq!(fx.body.style("overflow").as_deref(), Some("auto"));
    assert!(fx.player.html().is_empty());
}

#[test]
fn close_before_any_frame_still_plays_out() {
    let fx = Fixture::new();
    let mut modal = fx.modal();
    modal.open(LINK).unwrap();
    modal.close();
    assert_eq!(modal.state(), ModalState::Closing);
    settle(&mut modal);
    assert_eq!(modal.state(), ModalState::Hidden);
    assert!(fx.player.html().is_empty());
}

#[test]
fn close_eases_content_out_before_overlay() {
    let fx = Fixture::new();
    let mut modal = fx.modal();
    modal.open(LINK).unwrap();
    settle(&mut modal);
    modal.close();
    modal.tick(0.1);
    // Content has started dropping; the overlay has not begun to fade.
    let content: f64 = fx.content.style("opacity").unwrap().parse().unwrap();
    assert!(content < 1.0 && content > 0.5, "content opacity {content}");
    assert_eq!(fx.overlay.style("opacity").as_deref(), Some("1"));
    settle(&mut modal);
    assert_eq!(fx.content.style("transform").as_deref(), Some("translateY(40px) rotate(0deg) scale(0.8)"));
    assert_eq!(fx.overlay.style("visibility").as_deref(), Some("hidden"));
}

#[test]
fn close_timeline_starts_from_current_poses() {
    let from = BTreeMap::from([
        (ModalTarget::Overlay, Pose::IDENTITY),
        (ModalTarget::Content, Pose { alpha: 0.5, ..Pose::IDENTITY }),
    ]);
    let tl = close_timeline(&from);
    assert_eq!(tl.sample(0.0), from);
    assert!((tl.duration() - 0.4).abs() < 1e-9);
    let end = tl.sample(tl.duration());
    assert!(end[&ModalTarget::Overlay].hidden());
    assert_eq!(end[&ModalTarget::Content], Pose { alpha: 0.0, y: 40.0, rotate: 0.0, scale: 0.8 });
}

#[test]
fn open_timeline_lands_on_identity() {
    let tl = open_timeline();
    assert!((tl.duration() - 0.7).abs() < 1e-9);
    let end = tl.sample(tl.duration());
    assert_eq!(end[&ModalTarget::Overlay], Pose::IDENTITY);
    assert_eq!(end[&ModalTarget::Content], Pose::IDENTITY);
}

#[test]
fn close_when_hidden_is_noop() {
    let fx = Fixture::new();
    let mut modal = fx.modal();
    modal.close();
    assert_eq!(modal.state(), ModalState::Hidden);
    assert_eq!(fx.body.style("overflow"), None);
}

#[test]
fn locate_requires_every_part() {
    let doc = FakeDocument::new();
    let cfg = ModalConfig::default();
    doc.register(&cfg.root, FakeElement::new().node());
    assert!(matches!(ModalElements::locate(&doc, &cfg), Err(BindError::MissingElement { .. })));
    for selector in [&cfg.overlay, &cfg.content, &cfg.player] {
        doc.register(selector, FakeElement::new().node());
    }
    assert!(ModalElements::locate(&doc, &cfg).is_ok());
}
