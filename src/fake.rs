//! In-memory stand-ins for the browser, used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::dom::{
    DomElement, DomQuery, Environment, FrameDriven, FrameScheduler, MediaElement, Node, PreferenceStore, Timers,
};
use crate::error::DomError;

#[derive(Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
    html: RefCell<String>,
    scroll_height: Cell<f64>,
    parent: RefCell<Option<Node>>,
    children: RefCell<BTreeMap<String, Node>>,
    clicks: RefCell<Vec<(bool, Box<dyn FnMut()>)>>,
    visibility: RefCell<Vec<(f64, Box<dyn FnOnce()>)>>,
}

impl FakeElement {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_classes(classes: &[&str]) -> Rc<Self> {
        let el = Self::new();
        for class in classes {
            el.add_class(class);
        }
        el
    }

    pub fn node(self: &Rc<Self>) -> Node {
        self.clone()
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.styles.borrow().get(name).cloned()
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    pub fn set_scroll_height(&self, height: f64) {
        self.scroll_height.set(height);
    }

    pub fn set_parent(&self, parent: Node) {
        *self.parent.borrow_mut() = Some(parent);
    }

    pub fn attach(&self, selector: &str, child: Node) {
        self.children.borrow_mut().insert(selector.to_owned(), child);
    }

    /// Fire every click handler, as the browser would.
    pub fn click(&self) {
        let mut handlers = self.clicks.take();
        for (_, handler) in &mut handlers {
            handler();
        }
        let mut slot = self.clicks.borrow_mut();
        handlers.append(&mut slot);
        *slot = handlers;
    }

    pub fn click_listeners(&self) -> usize {
        self.clicks.borrow().len()
    }

    pub fn prevents_default(&self) -> bool {
        self.clicks.borrow().iter().any(|(prevent, _)| *prevent)
    }

    /// Scroll the element into view, firing its one-shot visibility handlers.
    pub fn scroll_into_view(&self) {
        for (_, handler) in self.visibility.take() {
            handler();
        }
    }

    pub fn visibility_thresholds(&self) -> Vec<f64> {
        self.visibility.borrow().iter().map(|(threshold, _)| *threshold).collect()
    }
}

impl DomElement for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let mut classes = self.classes.borrow_mut();
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_owned());
            true
        }
    }

    fn set_style(&self, name: &str, value: &str) {
        self.styles.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height.get()
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
    }

    fn set_inner_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_owned();
    }

    fn parent(&self) -> Option<Node> {
        self.parent.borrow().clone()
    }

    fn find(&self, selector: &str) -> Option<Node> {
        self.children.borrow().get(selector).cloned()
    }

    fn on_click(&self, prevent_default: bool, handler: Box<dyn FnMut()>) {
        self.clicks.borrow_mut().push((prevent_default, handler));
    }

    fn on_first_visible(&self, threshold: f64, handler: Box<dyn FnOnce()>) {
        self.visibility.borrow_mut().push((threshold, handler));
    }
}

/// A document whose selectors resolve to whatever was registered.
pub struct FakeDocument {
    pub root: Rc<FakeElement>,
    pub body: Rc<FakeElement>,
    nodes: RefCell<BTreeMap<String, Vec<Node>>>,
    media: RefCell<BTreeMap<String, Rc<dyn MediaElement>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            root: FakeElement::new(),
            body: FakeElement::new(),
            nodes: RefCell::new(BTreeMap::new()),
            media: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn register(&self, selector: &str, node: Node) {
        self.nodes.borrow_mut().entry(selector.to_owned()).or_default().push(node);
    }

    pub fn register_media(&self, selector: &str, media: Rc<dyn MediaElement>) {
        self.media.borrow_mut().insert(selector.to_owned(), media);
    }
}

impl DomQuery for FakeDocument {
    fn root(&self) -> Option<Node> {
        Some(self.root.node())
    }

    fn body(&self) -> Option<Node> {
        Some(self.body.node())
    }

    fn query(&self, selector: &str) -> Option<Node> {
        self.nodes.borrow().get(selector).and_then(|nodes| nodes.first().cloned())
    }

    fn query_all(&self, selector: &str) -> Vec<Node> {
        self.nodes.borrow().get(selector).cloned().unwrap_or_default()
    }

    fn media(&self, selector: &str) -> Option<Rc<dyn MediaElement>> {
        self.media.borrow().get(selector).cloned()
    }
}

/// A video that starts paused and counts how often it was told to play.
pub struct FakeVideo {
    paused: Cell<bool>,
    pub plays: Cell<usize>,
}

impl FakeVideo {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { paused: Cell::new(true), plays: Cell::new(0) })
    }
}

impl MediaElement for FakeVideo {
    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn play(&self) {
        self.paused.set(false);
        self.plays.set(self.plays.get() + 1);
    }

    fn pause(&self) {
        self.paused.set(true);
    }
}

#[derive(Default)]
pub struct FakeStore {
    entries: RefCell<HashMap<String, String>>,
    pub fail_writes: Cell<bool>,
}

impl FakeStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with(key: &str, value: &str) -> Rc<Self> {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for FakeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        if self.fail_writes.get() {
            return Err(DomError::StorageWrite { key: key.to_owned() });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct FakeEnv {
    pub prefers_dark: Cell<bool>,
    pub width: Cell<f64>,
}

impl FakeEnv {
    pub fn new(prefers_dark: bool, width: f64) -> Rc<Self> {
        Rc::new(Self { prefers_dark: Cell::new(prefers_dark), width: Cell::new(width) })
    }
}

impl Environment for FakeEnv {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn viewport_width(&self) -> f64 {
        self.width.get()
    }
}

/// Queues callbacks with their absolute due time; nothing fires until asked.
#[derive(Default)]
pub struct FakeTimers {
    now_ms: Cell<u64>,
    queue: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
}

impl FakeTimers {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Delays of the queued callbacks relative to now, in scheduling order.
    pub fn pending_delays(&self) -> Vec<u64> {
        let now = self.now_ms.get();
        self.queue.borrow().iter().map(|(due, _)| due - now).collect()
    }

    /// Advance the clock by `ms`, firing every callback that falls due,
    /// including ones scheduled by callbacks along the way.
    pub fn advance(&self, ms: u64) {
        let until = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= until)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(i, _)| i);
                earliest.map(|i| queue.remove(i))
            };
            let Some((due, task)) = next else {
                break;
            };
            self.now_ms.set(due);
            task();
        }
        self.now_ms.set(until);
    }

    /// Fire everything, however far in the future.
    pub fn run_all(&self) {
        self.advance(u64::from(u32::MAX));
    }
}

impl Timers for FakeTimers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let due = self.now_ms.get() + u64::from(delay_ms);
        self.queue.borrow_mut().push((due, task));
    }
}

/// Collects animation requests; frames only advance when a test asks.
#[derive(Default)]
pub struct FakeFrames {
    active: RefCell<Vec<Rc<RefCell<dyn FrameDriven>>>>,
    pub requests: Cell<usize>,
}

impl FakeFrames {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn running(&self) -> usize {
        self.active.borrow().len()
    }

    /// Tick every running target at 60 fps until all are idle.
    pub fn settle(&self) {
        for _ in 0..10_000 {
            let active = self.active.take();
            let still: Vec<_> = active.into_iter().filter(|t| t.borrow_mut().tick(1.0 / 60.0)).collect();
            let mut slot = self.active.borrow_mut();
            let mut added = std::mem::take(&mut *slot);
            *slot = still;
            slot.append(&mut added);
            if slot.is_empty() {
                return;
            }
        }
    }
}

impl FrameScheduler for FakeFrames {
    fn animate(&self, target: Rc<RefCell<dyn FrameDriven>>) {
        self.requests.set(self.requests.get() + 1);
        let mut active = self.active.borrow_mut();
        if !active.iter().any(|t| Rc::ptr_eq(t, &target)) {
            active.push(target);
        }
    }
}
