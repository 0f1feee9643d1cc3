//! Page wiring: locate each component's elements, build it, and attach its
//! event handlers.
//!
//! Components that are absent from the page are skipped. A menu missing one
//! of its required parts is skipped with a warning; every other component is
//! optional and skipped silently.

#[cfg(test)]
#[path = "bind_test.rs"]
mod bind_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::accordion::{Accordion, AccordionStyle};
use crate::config::{AccordionConfig, SiteConfig};
use crate::counter::CounterGroup;
use crate::dom::{DomQuery, Environment, FrameDriven, FrameScheduler, PreferenceStore, Timers};
use crate::menu::{MenuElements, MenuSettings, NavigationMenuController};
use crate::modal::{ModalElements, VideoModal};
use crate::pricing::{PricingElements, PricingToggle};
use crate::showcase::{ShowcaseElements, ShowcaseVideo};
use crate::team::TeamTabs;
use crate::theme::{ThemeElements, ThemePreference};

/// Browser services handed to every component.
#[derive(Clone)]
pub struct Host {
    pub env: Rc<dyn Environment>,
    pub timers: Rc<dyn Timers>,
    pub store: Rc<dyn PreferenceStore>,
    pub frames: Rc<dyn FrameScheduler>,
}

/// Every component bound on the page. Handlers hold their own references, so
/// dropping this does not unbind anything.
#[derive(Default)]
pub struct Page {
    pub theme: Option<Rc<RefCell<ThemePreference>>>,
    pub menu: Option<Rc<RefCell<NavigationMenuController>>>,
    /// One per accordion variant present on the page.
    pub accordions: Vec<Rc<RefCell<Accordion>>>,
    pub pricing: Option<Rc<RefCell<PricingToggle>>>,
    pub counter: Option<Rc<RefCell<CounterGroup>>>,
    pub modal: Option<Rc<RefCell<VideoModal>>>,
    pub team: Option<Rc<RefCell<TeamTabs>>>,
    pub showcase: Option<Rc<RefCell<ShowcaseVideo>>>,
}

pub fn bind_page(doc: &dyn DomQuery, host: &Host, cfg: &SiteConfig) -> Page {
    let page = Page {
        theme: bind_theme(doc, host, cfg),
        menu: bind_menu(doc, host, cfg),
        accordions: cfg.accordions.iter().filter_map(|variant| bind_accordion(doc, variant)).collect(),
        pricing: bind_pricing(doc, cfg),
        counter: bind_counter(doc, host, cfg),
        modal: bind_modal(doc, host, cfg),
        team: bind_team(doc, host, cfg),
        showcase: bind_showcase(doc, host, cfg),
    };
    log::debug!(
        "bind: theme={} menu={} accordions={} pricing={} counter={} modal={} team={} showcase={}",
        page.theme.is_some(),
        page.menu.is_some(),
        page.accordions.len(),
        page.pricing.is_some(),
        page.counter.is_some(),
        page.modal.is_some(),
        page.team.is_some(),
        page.showcase.is_some(),
    );
    page
}

/// Hand `component` to the frame loop.
fn animate<T: FrameDriven + 'static>(frames: &dyn FrameScheduler, component: &Rc<RefCell<T>>) {
    let target: Rc<RefCell<T>> = Rc::clone(component);
    frames.animate(target);
}

fn bind_theme(doc: &dyn DomQuery, host: &Host, cfg: &SiteConfig) -> Option<Rc<RefCell<ThemePreference>>> {
    let elements = ThemeElements::locate(doc, &cfg.theme)?;
    let theme = ThemePreference::initialize(
        elements,
        Rc::clone(&host.store),
        host.env.as_ref(),
        cfg.theme.storage_key.clone(),
    );
    let theme = Rc::new(RefCell::new(theme));
    if let Some(button) = doc.query(&cfg.theme.toggle) {
        let theme = Rc::clone(&theme);
        button.on_click(
            false,
            Box::new(move || {
                theme.borrow_mut().toggle();
            }),
        );
    }
    Some(theme)
}

fn bind_menu(doc: &dyn DomQuery, host: &Host, cfg: &SiteConfig) -> Option<Rc<RefCell<NavigationMenuController>>> {
    let elements = match MenuElements::locate(doc, &cfg.menu) {
        Ok(elements) => elements,
        Err(err) => {
            log::warn!("menu: not bound: {err}");
            return None;
        }
    };
    let open_trigger = Rc::clone(&elements.open_trigger);
    let close_trigger = Rc::clone(&elements.close_trigger);
    let dropdowns = elements.dropdowns.clone();

    let menu = NavigationMenuController::new(
        elements,
        Rc::clone(&host.env),
        Rc::clone(&host.timers),
        MenuSettings::from(&cfg.menu),
    );
    let menu = Rc::new(RefCell::new(menu));

    {
        let menu = Rc::clone(&menu);
        let frames = Rc::clone(&host.frames);
        open_trigger.on_click(
            false,
            Box::new(move || {
                menu.borrow_mut().open();
                animate(frames.as_ref(), &menu);
            }),
        );
    }
    {
        let menu = Rc::clone(&menu);
        let frames = Rc::clone(&host.frames);
        close_trigger.on_click(
            false,
            Box::new(move || {
                menu.borrow_mut().close();
                animate(frames.as_ref(), &menu);
            }),
        );
    }
    for (index, dropdown) in dropdowns.iter().enumerate() {
        let menu = Rc::clone(&menu);
        dropdown.on_click(false, Box::new(move || menu.borrow_mut().handle_dropdown_click(index)));
    }
    Some(menu)
}

fn bind_accordion(doc: &dyn DomQuery, cfg: &AccordionConfig) -> Option<Rc<RefCell<Accordion>>> {
    let items = Accordion::locate(doc, cfg);
    if items.is_empty() {
        return None;
    }
    let headers: Vec<_> = items.iter().map(|item| Rc::clone(&item.header)).collect();
    let accordion = Rc::new(RefCell::new(Accordion::new(items, AccordionStyle::from(cfg))));
    for (index, header) in headers.iter().enumerate() {
        let accordion = Rc::clone(&accordion);
        header.on_click(false, Box::new(move || accordion.borrow_mut().toggle(index)));
    }
    Some(accordion)
}

fn bind_pricing(doc: &dyn DomQuery, cfg: &SiteConfig) -> Option<Rc<RefCell<PricingToggle>>> {
    let elements = PricingElements::locate(doc, &cfg.pricing)?;
    let switch = Rc::clone(&elements.switch);
    let pricing = Rc::new(RefCell::new(PricingToggle::initialize(elements)));
    {
        let pricing = Rc::clone(&pricing);
        switch.on_click(
            false,
            Box::new(move || {
                pricing.borrow_mut().toggle();
            }),
        );
    }
    Some(pricing)
}

fn bind_counter(doc: &dyn DomQuery, host: &Host, cfg: &SiteConfig) -> Option<Rc<RefCell<CounterGroup>>> {
    let section = doc.query(&cfg.counter.section)?;
    let nodes = CounterGroup::locate(doc, &cfg.counter)?;
    let counter = Rc::new(RefCell::new(CounterGroup::new(nodes, Rc::clone(&host.timers), &cfg.counter)));
    {
        let counter = Rc::clone(&counter);
        section.on_first_visible(
            cfg.counter.visibility_threshold,
            Box::new(move || {
                counter.borrow_mut().on_visible();
            }),
        );
    }
    Some(counter)
}

fn bind_modal(doc: &dyn DomQuery, host: &Host, cfg: &SiteConfig) -> Option<Rc<RefCell<VideoModal>>> {
    let triggers = doc.query_all(&cfg.modal.triggers);
    if triggers.is_empty() {
        return None;
    }
    let elements = match ModalElements::locate(doc, &cfg.modal) {
        Ok(elements) => elements,
        Err(err) => {
            log::debug!("modal: not bound: {err}");
            return None;
        }
    };
    let overlay = Rc::clone(&elements.overlay);
    let modal = Rc::new(RefCell::new(VideoModal::new(elements)));

    for trigger in &triggers {
        let modal = Rc::clone(&modal);
        let frames = Rc::clone(&host.frames);
        let link_source = Rc::clone(trigger);
        trigger.on_click(
            true,
            Box::new(move || {
                let link = link_source.attribute("href").unwrap_or_default();
                if let Err(err) = modal.borrow_mut().open(&link) {
                    log::warn!("modal: {err}");
                    return;
                }
                animate(frames.as_ref(), &modal);
            }),
        );
    }
    let dismissers = doc.query(&cfg.modal.close).into_iter().chain(std::iter::once(overlay));
    for dismisser in dismissers {
        let modal = Rc::clone(&modal);
        let frames = Rc::clone(&host.frames);
        dismisser.on_click(
            false,
            Box::new(move || {
                modal.borrow_mut().close();
                animate(frames.as_ref(), &modal);
            }),
        );
    }
    Some(modal)
}

fn bind_team(doc: &dyn DomQuery, host: &Host, cfg: &SiteConfig) -> Option<Rc<RefCell<TeamTabs>>> {
    let (tabs, details) = TeamTabs::locate(doc, &cfg.team)?;
    let team = Rc::new(RefCell::new(TeamTabs::new(tabs.clone(), details, Rc::clone(&host.timers), &cfg.team)));
    for (index, tab) in tabs.iter().enumerate() {
        let team = Rc::clone(&team);
        tab.on_click(
            false,
            Box::new(move || {
                team.borrow_mut().select(index);
            }),
        );
    }
    Some(team)
}

fn bind_showcase(doc: &dyn DomQuery, host: &Host, cfg: &SiteConfig) -> Option<Rc<RefCell<ShowcaseVideo>>> {
    let elements = ShowcaseElements::locate(doc, &cfg.showcase)?;
    let wrapper = Rc::clone(&elements.wrapper);
    let showcase = Rc::new(RefCell::new(ShowcaseVideo::new(elements)));
    {
        let showcase = Rc::clone(&showcase);
        let frames = Rc::clone(&host.frames);
        wrapper.on_click(
            false,
            Box::new(move || {
                showcase.borrow_mut().toggle();
                animate(frames.as_ref(), &showcase);
            }),
        );
    }
    Some(showcase)
}
