//! Seams between components and the browser.
//!
//! Components hold [`Node`]s and trait objects handed to them at construction.
//! The `hydrate` build backs these with `web-sys`; tests back them with the
//! in-memory fakes in `fake`.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use timeline::Pose;

use crate::error::DomError;

/// Shared handle to one element.
pub type Node = Rc<dyn DomElement>;

/// The slice of the element API the components use.
pub trait DomElement {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
    fn set_style(&self, name: &str, value: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    /// Full content height in CSS px, including overflow.
    fn scroll_height(&self) -> f64;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_inner_html(&self, html: &str);
    fn parent(&self) -> Option<Node>;
    /// First descendant matching `selector`.
    fn find(&self, selector: &str) -> Option<Node>;
    /// Run `handler` on every click for the lifetime of the page.
    fn on_click(&self, prevent_default: bool, handler: Box<dyn FnMut()>);
    /// Run `handler` once, the first time at least `threshold` of the element is visible.
    fn on_first_visible(&self, threshold: f64, handler: Box<dyn FnOnce()>);

    /// Add `class` when `on`, otherwise remove it.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Document-level lookups.
pub trait DomQuery {
    /// The `<html>` element.
    fn root(&self) -> Option<Node>;
    fn body(&self) -> Option<Node>;
    fn query(&self, selector: &str) -> Option<Node>;
    fn query_all(&self, selector: &str) -> Vec<Node>;
    /// First `<video>`/`<audio>` element matching `selector`.
    fn media(&self, selector: &str) -> Option<Rc<dyn MediaElement>>;
}

/// Playback controls of a media element.
pub trait MediaElement {
    fn is_paused(&self) -> bool;
    fn play(&self);
    fn pause(&self);
}

/// Persistent key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`DomError`] when storage is unavailable or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), DomError>;
}

/// Read-only signals from the browser.
pub trait Environment {
    /// The operating system asks for a dark color scheme.
    fn prefers_dark(&self) -> bool;
    /// Viewport width in CSS px.
    fn viewport_width(&self) -> f64;
}

/// Single-shot deferred callbacks. There is no cancellation.
pub trait Timers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Something animated once per display frame.
pub trait FrameDriven {
    /// Advance by `dt` seconds. Returns whether another frame is needed.
    fn tick(&mut self, dt: f64) -> bool;
}

/// Runs animated components until they come to rest.
pub trait FrameScheduler {
    /// Tick `target` once per display frame until it reports idle. Asking
    /// again while it is still running must not start a second loop.
    fn animate(&self, target: Rc<RefCell<dyn FrameDriven>>);
}

/// Write `pose` as inline `opacity`, `visibility`, and `transform`.
pub fn apply_pose(node: &dyn DomElement, pose: &Pose) {
    node.set_style("opacity", &css_number(pose.alpha));
    node.set_style("visibility", if pose.hidden() { "hidden" } else { "inherit" });
    node.set_style(
        "transform",
        &format!(
            "translateY({}px) rotate({}deg) scale({})",
            css_number(pose.y),
            css_number(pose.rotate),
            css_number(pose.scale)
        ),
    );
}

/// Engage or release the page scroll lock on `body`.
pub fn scroll_lock(body: &dyn DomElement, engaged: bool) {
    body.set_style("overflow", if engaged { "hidden" } else { "auto" });
}

/// Short decimal form for inline styles: four places, no negative zero.
#[must_use]
pub fn css_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0 + 0.0;
    format!("{rounded}")
}
