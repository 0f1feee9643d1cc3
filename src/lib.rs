//! # landing
//!
//! Client-side interaction layer for the marketing site, compiled to WebAssembly.
//!
//! Every component receives the elements it drives through the [`dom`] traits
//! rather than looking them up itself, so the whole layer runs under plain
//! `cargo test` against in-memory fakes. The browser bindings in `web` (behind
//! the `hydrate` feature) are the only code that touches `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference with persistence |
//! | [`menu`] | Slide-out navigation overlay and its timeline |
//! | [`accordion`] | Single-open accordions, one per page variant |
//! | [`pricing`] | Monthly/yearly billing switch |
//! | [`counter`] | Count-up statistics |
//! | [`modal`] | Video lightbox |
//! | [`team`] | Team member tabs and detail panel |
//! | [`showcase`] | Click-to-play hero video |
//! | [`bind`] | Locates and wires every component on the page |
//! | [`dom`] | Element, media, storage, environment, and timer seams |
//! | [`config`] | Selectors and tunables, overridable from the page |
//! | [`consts`] | Class names and defaults |
//! | [`error`] | Error types |

pub mod accordion;
pub mod bind;
pub mod config;
pub mod consts;
pub mod counter;
pub mod dom;
pub mod error;
pub mod menu;
pub mod modal;
pub mod pricing;
pub mod showcase;
pub mod team;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
pub(crate) mod fake;

/// WASM entry point: install logging and bind every component to the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    web::boot();
}
