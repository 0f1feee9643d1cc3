//! `web-sys` implementations of the [`crate::dom`] seams, and page start-up.
//!
//! Listeners and observers live as long as the page, so their closures are
//! leaked with `forget()`. Frame loops use `requestAnimationFrame` and drop
//! their closure once the component reports idle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlMediaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Storage, Window,
};

use crate::bind::{Host, bind_page};
use crate::config::SiteConfig;
use crate::consts::{CONFIG_SCRIPT_ID, PREFERS_DARK_QUERY};
use crate::dom::{
    DomElement, DomQuery, Environment, FrameDriven, FrameScheduler, MediaElement, Node, PreferenceStore, Timers,
};
use crate::error::DomError;

fn warn_js(context: &str, err: &JsValue) {
    log::warn!("{context}: {err:?}");
}

// ── Elements ────────────────────────────────────────────────────

pub struct WebElement(Element);

impl WebElement {
    #[must_use]
    pub fn node(el: Element) -> Node {
        Rc::new(Self(el))
    }
}

impl DomElement for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            warn_js("add class", &err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            warn_js("remove class", &err);
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                warn_js("toggle class", &err);
                self.has_class(class)
            }
        }
    }

    fn set_style(&self, name: &str, value: &str) {
        let Some(el) = self.0.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = el.style().set_property(name, value) {
            warn_js("set style", &err);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            warn_js("set attribute", &err);
        }
    }

    fn scroll_height(&self) -> f64 {
        f64::from(self.0.scroll_height())
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn parent(&self) -> Option<Node> {
        self.0.parent_element().map(WebElement::node)
    }

    fn find(&self, selector: &str) -> Option<Node> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(WebElement::node),
            Err(err) => {
                warn_js("query selector", &err);
                None
            }
        }
    }

    fn on_click(&self, prevent_default: bool, mut handler: Box<dyn FnMut()>) {
        let cb = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if prevent_default {
                event.prevent_default();
            }
            handler();
        });
        if let Err(err) = self.0.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
            warn_js("add click listener", &err);
        }
        cb.forget();
    }

    fn on_first_visible(&self, threshold: f64, handler: Box<dyn FnOnce()>) {
        let pending = RefCell::new(Some(handler));
        let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_ref::<IntersectionObserverEntry>()
                        .is_some_and(IntersectionObserverEntry::is_intersecting)
                });
                if !visible {
                    return;
                }
                observer.disconnect();
                if let Some(handler) = pending.borrow_mut().take() {
                    handler();
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer.observe(&self.0),
            Err(err) => warn_js("intersection observer", &err),
        }
        cb.forget();
    }
}

// ── Document ────────────────────────────────────────────────────

pub struct WebDocument(Document);

impl DomQuery for WebDocument {
    fn root(&self) -> Option<Node> {
        self.0.document_element().map(WebElement::node)
    }

    fn body(&self) -> Option<Node> {
        self.0.body().map(|body| WebElement::node(body.into()))
    }

    fn query(&self, selector: &str) -> Option<Node> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(WebElement::node),
            Err(err) => {
                warn_js("query selector", &err);
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Node> {
        let list = match self.0.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                warn_js("query selector all", &err);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .map(WebElement::node)
            .collect()
    }

    fn media(&self, selector: &str) -> Option<Rc<dyn MediaElement>> {
        let found = match self.0.query_selector(selector) {
            Ok(found) => found?,
            Err(err) => {
                warn_js("query selector", &err);
                return None;
            }
        };
        let media = found.dyn_ref::<HtmlMediaElement>()?.clone();
        Some(Rc::new(WebMedia(media)))
    }
}

pub struct WebMedia(HtmlMediaElement);

impl MediaElement for WebMedia {
    fn is_paused(&self) -> bool {
        self.0.paused()
    }

    fn play(&self) {
        // Autoplay refusals reject the returned promise rather than erroring here.
        if let Err(err) = self.0.play() {
            warn_js("play media", &err);
        }
    }

    fn pause(&self) {
        if let Err(err) = self.0.pause() {
            warn_js("pause media", &err);
        }
    }
}

// ── Browser services ────────────────────────────────────────────

pub struct LocalStorage(Option<Storage>);

impl LocalStorage {
    fn from_window(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self(storage),
            Err(err) => {
                warn_js("local storage", &err);
                Self(None)
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.0.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn_js("read local storage", &err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        let storage = self.0.as_ref().ok_or(DomError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| DomError::StorageWrite { key: key.to_owned() })
    }
}

pub struct BrowserEnv(Window);

impl Environment for BrowserEnv {
    fn prefers_dark(&self) -> bool {
        match self.0.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                warn_js("match media", &err);
                false
            }
        }
    }

    fn viewport_width(&self) -> f64 {
        match self.0.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(0.0),
            Err(err) => {
                warn_js("inner width", &err);
                0.0
            }
        }
    }
}

pub struct GlooTimers;

impl Timers for GlooTimers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// One `requestAnimationFrame` loop per animated component.
#[derive(Default)]
pub struct AnimationFrames {
    running: RefCell<Vec<(Rc<RefCell<dyn FrameDriven>>, Rc<Cell<bool>>)>>,
}

impl AnimationFrames {
    fn flag_for(&self, target: &Rc<RefCell<dyn FrameDriven>>) -> Rc<Cell<bool>> {
        let mut running = self.running.borrow_mut();
        if let Some((_, flag)) = running.iter().find(|(t, _)| Rc::ptr_eq(t, target)) {
            return Rc::clone(flag);
        }
        let flag = Rc::new(Cell::new(false));
        running.push((Rc::clone(target), Rc::clone(&flag)));
        flag
    }
}

impl FrameScheduler for AnimationFrames {
    fn animate(&self, target: Rc<RefCell<dyn FrameDriven>>) {
        let active = self.flag_for(&target);
        if active.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        active.set(true);

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let last_ts: Cell<Option<f64>> = Cell::new(None);
        let active_for_cb = Rc::clone(&active);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            let dt = last_ts.get().map_or(0.0, |prev| ((ts - prev) / 1000.0).max(0.0));
            last_ts.set(Some(ts));

            let more = target.borrow_mut().tick(dt);
            let rescheduled = more
                && web_sys::window().is_some_and(|w| {
                    holder_for_cb
                        .borrow()
                        .as_ref()
                        .is_some_and(|cb| request_frame(&w, cb))
                });
            if !rescheduled {
                active_for_cb.set(false);
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);

        if request_frame(&window, &cb) {
            *holder.borrow_mut() = Some(cb);
        } else {
            active.set(false);
        }
    }
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut(f64)>) -> bool {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(err) => {
            warn_js("request animation frame", &err);
            false
        }
    }
}

// ── Start-up ────────────────────────────────────────────────────

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: using defaults: {err}");
            SiteConfig::default()
        }
    }
}

fn bind_document() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = load_config(&document);
    let host = Host {
        env: Rc::new(BrowserEnv(window.clone())),
        timers: Rc::new(GlooTimers),
        store: Rc::new(LocalStorage::from_window(&window)),
        frames: Rc::new(AnimationFrames::default()),
    };
    bind_page(&WebDocument(document), &host, &config);
}

/// Bind the page now, or once the DOM has been parsed.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        bind_document();
        return;
    }
    let cb = Closure::<dyn FnMut()>::new(bind_document);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
        warn_js("DOMContentLoaded listener", &err);
    }
    cb.forget();
}
