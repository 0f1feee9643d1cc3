//! Light/dark theme preference.
//!
//! The resolved theme is applied as the `dark` class on `<html>` and persisted
//! to `localStorage` as `"dark"` or `"light"` whenever the user toggles it. A
//! stored value always wins over the operating system's color-scheme signal.
//!
//! The toggle button shows the theme you would switch *to*: in dark mode the
//! light icon is revealed and the dark icon hidden, and vice versa.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::consts::{DARK_CLASS, HIDDEN_CLASS};
use crate::dom::{DomQuery, Environment, Node, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored value first, then the OS signal, then light.
    ///
    /// Any stored value other than `"dark"` counts as an explicit light choice.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            Some(_) => Self::Light,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

/// Elements the theme touches. Icons are optional.
pub struct ThemeElements {
    pub root: Node,
    pub dark_icon: Option<Node>,
    pub light_icon: Option<Node>,
}

impl ThemeElements {
    /// `None` only when the document has no root element.
    pub fn locate(doc: &dyn DomQuery, cfg: &ThemeConfig) -> Option<Self> {
        Some(Self { root: doc.root()?, dark_icon: doc.query(&cfg.dark_icon), light_icon: doc.query(&cfg.light_icon) })
    }
}

pub struct ThemePreference {
    elements: ThemeElements,
    store: Rc<dyn PreferenceStore>,
    storage_key: String,
    state: ThemeState,
}

impl ThemePreference {
    /// Resolve the starting theme and apply it to the page.
    pub fn initialize(
        elements: ThemeElements,
        store: Rc<dyn PreferenceStore>,
        env: &dyn Environment,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let stored = store.get(&storage_key);
        let state = ThemeState::resolve(stored.as_deref(), env.prefers_dark());
        log::debug!("theme: initial {} (stored={stored:?})", state.as_str());

        let theme = Self { elements, store, storage_key, state };
        theme.apply();
        theme
    }

    /// Flip the theme, apply it, and persist it. Returns the new theme.
    ///
    /// A failed write is logged; the page still switches.
    pub fn toggle(&mut self) -> ThemeState {
        self.state = self.state.toggled();
        self.apply();
        if let Err(err) = self.store.set(&self.storage_key, self.state.as_str()) {
            log::warn!("theme: could not persist preference: {err}");
        }
        log::debug!("theme: toggled to {}", self.state.as_str());
        self.state
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    fn apply(&self) {
        let dark = self.state == ThemeState::Dark;
        self.elements.root.set_class(DARK_CLASS, dark);
        if let Some(icon) = &self.elements.dark_icon {
            icon.set_class(HIDDEN_CLASS, dark);
        }
        if let Some(icon) = &self.elements.light_icon {
            icon.set_class(HIDDEN_CLASS, !dark);
        }
    }
}
