//! Slide-out navigation menu.
//!
//! One reversible [`Timeline`] reveals the overlay: backdrop, then the content
//! wrapper, then the list items (staggered), then the close trigger, while the
//! open trigger fades away. Opening plays it forward at normal speed; closing
//! plays it backward slightly faster. The page's frame loop drives it through
//! [`FrameDriven::tick`].
//!
//! State that must be true the instant `open`/`close` returns (interactivity,
//! `aria-hidden`, the scroll lock) is written synchronously, never left to the
//! timeline.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::rc::Rc;

use timeline::{Ease, Playhead, Pose, PoseDelta, Stagger, Timeline, TweenOptions};

use crate::config::MenuConfig;
use crate::consts::{ACTIVE_CLASS, DIMMED_CLASS, MENU_OPEN_CLASS};
use crate::dom::{DomQuery, Environment, FrameDriven, Node, Timers, apply_pose, scroll_lock};
use crate::error::BindError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// What each tween of the menu timeline animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MenuTarget {
    Backdrop,
    Content,
    Item(usize),
    CloseTrigger,
    OpenTrigger,
}

pub struct MenuElements {
    pub container: Node,
    pub content: Node,
    pub open_trigger: Node,
    pub close_trigger: Node,
    pub items: Vec<Node>,
    pub dropdowns: Vec<Node>,
    pub body: Option<Node>,
}

impl MenuElements {
    /// Look up every menu part.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingElement`] naming the first required part
    /// (container, content, open trigger, close trigger) that is absent.
    pub fn locate(doc: &dyn DomQuery, cfg: &MenuConfig) -> Result<Self, BindError> {
        let require = |selector: &str| doc.query(selector).ok_or_else(|| BindError::missing(selector));
        Ok(Self {
            container: require(&cfg.container)?,
            content: require(&cfg.content)?,
            open_trigger: require(&cfg.open_trigger)?,
            close_trigger: require(&cfg.close_trigger)?,
            items: doc.query_all(&cfg.items),
            dropdowns: doc.query_all(&cfg.dropdowns),
            body: doc.body(),
        })
    }

    fn node(&self, target: MenuTarget) -> Option<&Node> {
        match target {
            MenuTarget::Backdrop => Some(&self.container),
            MenuTarget::Content => Some(&self.content),
            MenuTarget::Item(i) => self.items.get(i),
            MenuTarget::CloseTrigger => Some(&self.close_trigger),
            MenuTarget::OpenTrigger => Some(&self.open_trigger),
        }
    }
}

/// Tunables lifted out of [`MenuConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSettings {
    pub desktop_breakpoint_px: f64,
    pub close_time_scale: f64,
    pub reveal_delay_ms: u32,
}

impl From<&MenuConfig> for MenuSettings {
    fn from(cfg: &MenuConfig) -> Self {
        Self {
            desktop_breakpoint_px: cfg.desktop_breakpoint_px,
            close_time_scale: cfg.close_time_scale,
            reveal_delay_ms: cfg.reveal_delay_ms,
        }
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self::from(&MenuConfig::default())
    }
}

const TRIGGER_HIDDEN: Pose = Pose { alpha: 0.0, y: -10.0, rotate: 0.0, scale: 0.95 };
const CONTENT_HIDDEN: Pose = Pose { alpha: 0.0, y: -30.0, rotate: -1.0, scale: 0.98 };
const BACKDROP_HIDDEN: Pose = Pose { alpha: 0.0, ..Pose::IDENTITY };

/// The overlay reveal sequence for a menu with `item_count` list items.
#[must_use]
pub fn menu_timeline(item_count: usize) -> Timeline<MenuTarget> {
    let items: Vec<MenuTarget> = (0..item_count).map(MenuTarget::Item).collect();
    let back_out = TweenOptions::default().duration(0.5).ease(Ease::BACK_OUT_DEFAULT);

    let mut tl = Timeline::new(Ease::ExpoOut, 0.8);
    tl.set(MenuTarget::Backdrop, BACKDROP_HIDDEN)
        .set(MenuTarget::Content, CONTENT_HIDDEN)
        .set(MenuTarget::CloseTrigger, TRIGGER_HIDDEN);
    for item in &items {
        tl.set(*item, TRIGGER_HIDDEN);
    }

    tl.to_with(
        MenuTarget::Backdrop,
        0.0,
        PoseDelta::default().alpha(1.0),
        TweenOptions::default().duration(0.5).ease(Ease::Power2Out),
    )
    .to_with(MenuTarget::Content, 0.1, PoseDelta::REVEAL, TweenOptions::default().duration(0.6))
    .to_staggered(&items, 0.2, PoseDelta::REVEAL, TweenOptions::default().duration(0.7), Stagger {
        amount: 0.4,
        ease: Ease::Power2Out,
    })
    .to_with(MenuTarget::CloseTrigger, 0.3, PoseDelta::REVEAL, back_out)
    .to_with(
        MenuTarget::OpenTrigger,
        0.1,
        PoseDelta::default().alpha(0.0).y(-10.0).scale(0.95),
        back_out.delay(0.3),
    );
    tl
}

pub struct NavigationMenuController {
    elements: MenuElements,
    env: Rc<dyn Environment>,
    timers: Rc<dyn Timers>,
    settings: MenuSettings,
    timeline: Timeline<MenuTarget>,
    playhead: Playhead,
    state: MenuState,
}

impl NavigationMenuController {
    /// Hide every animated part and build (without playing) the timeline.
    pub fn new(
        elements: MenuElements,
        env: Rc<dyn Environment>,
        timers: Rc<dyn Timers>,
        settings: MenuSettings,
    ) -> Self {
        let timeline = menu_timeline(elements.items.len());
        let playhead = Playhead::new(timeline.duration());
        let menu = Self { elements, env, timers, settings, timeline, playhead, state: MenuState::Closed };
        menu.apply_frame();
        menu.set_interactive(false);
        menu
    }

    pub fn open(&mut self) {
        if let Err(err) = self.playhead.set_time_scale(1.0) {
            log::warn!("menu: {err}");
        }
        self.playhead.play();
        self.elements.open_trigger.add_class(DIMMED_CLASS);
        self.set_interactive(true);
        self.state = MenuState::Open;
        log::debug!("menu: open");
    }

    pub fn close(&mut self) {
        if let Err(err) = self.playhead.set_time_scale(self.settings.close_time_scale) {
            log::warn!("menu: {err}");
        }
        self.playhead.reverse();
        self.set_interactive(false);
        self.state = MenuState::Closed;

        let trigger = Rc::clone(&self.elements.open_trigger);
        self.timers.after(
            self.settings.reveal_delay_ms,
            Box::new(move || {
                trigger.remove_class(DIMMED_CLASS);
                apply_pose(trigger.as_ref(), &Pose::IDENTITY);
            }),
        );
        log::debug!("menu: close");
    }

    /// Activate dropdown `index`.
    ///
    /// At desktop widths only one dropdown may be active; below the breakpoint
    /// each dropdown toggles on its own.
    pub fn handle_dropdown_click(&mut self, index: usize) {
        let Some(clicked) = self.elements.dropdowns.get(index) else {
            return;
        };
        if self.env.viewport_width() >= self.settings.desktop_breakpoint_px {
            for dropdown in &self.elements.dropdowns {
                dropdown.remove_class(ACTIVE_CLASS);
            }
            clicked.add_class(ACTIVE_CLASS);
        } else {
            clicked.toggle_class(ACTIVE_CLASS);
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.playhead.is_running()
    }

    /// Current playhead position as a fraction of the timeline.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.playhead.progress()
    }

    fn set_interactive(&self, open: bool) {
        let container = &self.elements.container;
        container.set_style("pointer-events", if open { "auto" } else { "none" });
        container.set_attribute("aria-hidden", if open { "false" } else { "true" });
        container.set_class(MENU_OPEN_CLASS, open);
        self.elements.content.set_style("pointer-events", if open { "auto" } else { "none" });
        if let Some(body) = &self.elements.body {
            scroll_lock(body.as_ref(), open);
        }
    }

    fn apply_frame(&self) {
        for (target, pose) in self.timeline.sample(self.playhead.time()) {
            if let Some(node) = self.elements.node(target) {
                apply_pose(node.as_ref(), &pose);
            }
        }
    }
}

impl FrameDriven for NavigationMenuController {
    fn tick(&mut self, dt: f64) -> bool {
        let running = self.playhead.advance(dt);
        self.apply_frame();
        running
    }
}
