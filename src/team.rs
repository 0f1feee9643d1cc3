//! Team member tabs.
//!
//! Selecting a tab marks it active and swaps the detail panel over to that
//! member: the panel is faded out with a `transitioning` class, rewritten from
//! the tab's own title, role, and portrait, then faded back in. Clicks that
//! land while a swap is in flight are dropped.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::TeamConfig;
use crate::consts::{TAB_ACTIVE_CLASS, TRANSITIONING_CLASS};
use crate::dom::{DomElement, DomQuery, Node, Timers};

/// What the detail panel shows for one member.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamMember {
    pub title: String,
    pub role: String,
    pub image: Option<String>,
}

impl TeamMember {
    /// Read a member from the parts of `tab`. Missing parts read as empty.
    pub fn read(tab: &dyn DomElement, cfg: &TeamConfig) -> Self {
        Self {
            title: tab.find(&cfg.tab_title).map(|n| n.text()).unwrap_or_default(),
            role: tab.find(&cfg.tab_role).map(|n| n.text()).unwrap_or_default(),
            image: tab.find(&cfg.tab_image).and_then(|n| n.attribute("src")),
        }
    }
}

/// The panel a selected member is written into.
pub struct TeamDetails {
    pub panel: Node,
    pub title: Option<Node>,
    pub role: Option<Node>,
    pub image: Option<Node>,
}

impl TeamDetails {
    pub fn locate(panel: Node, cfg: &TeamConfig) -> Self {
        Self {
            title: panel.find(&cfg.detail_title),
            role: panel.find(&cfg.detail_role),
            image: panel.find(&cfg.detail_image),
            panel,
        }
    }

    fn show(&self, member: &TeamMember) {
        if let Some(title) = &self.title {
            title.set_text(&member.title);
        }
        if let Some(role) = &self.role {
            role.set_text(&member.role);
        }
        if let (Some(image), Some(src)) = (&self.image, &member.image) {
            image.set_attribute("src", src);
        }
    }
}

pub struct TeamTabs {
    tabs: Vec<Node>,
    details: Rc<TeamDetails>,
    cfg: Rc<TeamConfig>,
    timers: Rc<dyn Timers>,
    swapping: Rc<Cell<bool>>,
}

impl TeamTabs {
    /// `None` when the page has no detail panel or no tabs.
    pub fn locate(doc: &dyn DomQuery, cfg: &TeamConfig) -> Option<(Vec<Node>, TeamDetails)> {
        let panel = doc.query(&cfg.details)?;
        let tabs = doc.query_all(&cfg.tabs);
        if tabs.is_empty() {
            return None;
        }
        Some((tabs, TeamDetails::locate(panel, cfg)))
    }

    pub fn new(tabs: Vec<Node>, details: TeamDetails, timers: Rc<dyn Timers>, cfg: &TeamConfig) -> Self {
        Self { tabs, details: Rc::new(details), cfg: Rc::new(cfg.clone()), timers, swapping: Rc::new(Cell::new(false)) }
    }

    /// Switch to tab `index`. Returns whether a swap started.
    ///
    /// Ignored for the active tab, for an unknown index, and while the
    /// previous swap is still settling.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(tab) = self.tabs.get(index) else {
            return false;
        };
        if tab.has_class(TAB_ACTIVE_CLASS) || self.swapping.get() {
            return false;
        }
        for other in &self.tabs {
            other.remove_class(TAB_ACTIVE_CLASS);
        }
        tab.add_class(TAB_ACTIVE_CLASS);

        self.swapping.set(true);
        self.details.panel.add_class(TRANSITIONING_CLASS);
        log::debug!("team: swapping to tab {index}");

        let tab = Rc::clone(tab);
        let details = Rc::clone(&self.details);
        let cfg = Rc::clone(&self.cfg);
        let timers = Rc::clone(&self.timers);
        let swapping = Rc::clone(&self.swapping);
        self.timers.after(
            self.cfg.swap_delay_ms,
            Box::new(move || {
                details.show(&TeamMember::read(tab.as_ref(), &cfg));
                details.panel.remove_class(TRANSITIONING_CLASS);
                timers.after(cfg.settle_delay_ms, Box::new(move || swapping.set(false)));
            }),
        );
        true
    }

    /// A swap is in flight and new selections are being dropped.
    #[must_use]
    pub fn is_swapping(&self) -> bool {
        self.swapping.get()
    }
}
