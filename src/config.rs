//! Selectors and tunables for every component.
//!
//! Defaults match the shipped markup. A page may override any subset by
//! embedding `<script id="site-config" type="application/json">` with the
//! same camelCase shape; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACCORDION_OPEN_BODY_MARGIN_PX, ACCORDION_OPEN_BORDER, ACCORDION_OPEN_PADDING_PX, COUNTER_STAGGER_MS,
    COUNTER_STEP_MS, COUNTER_VISIBILITY_THRESHOLD, DESKTOP_BREAKPOINT_PX, MENU_CLOSE_TIME_SCALE,
    OPEN_TRIGGER_REVEAL_DELAY_MS, TEAM_SETTLE_DELAY_MS, TEAM_SWAP_DELAY_MS, THEME_STORAGE_KEY,
};
use crate::error::BindError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    /// One entry per accordion variant on the page.
    pub accordions: Vec<AccordionConfig>,
    pub pricing: PricingConfig,
    pub counter: CounterConfig,
    pub modal: ModalConfig,
    pub team: TeamConfig,
    pub showcase: ShowcaseConfig,
}

impl SiteConfig {
    /// Parse page-supplied overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Config`] when `raw` is not valid JSON of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, BindError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            menu: MenuConfig::default(),
            accordions: vec![AccordionConfig::bordered(), AccordionConfig::compact(), AccordionConfig::plain()],
            pricing: PricingConfig::default(),
            counter: CounterConfig::default(),
            modal: ModalConfig::default(),
            team: TeamConfig::default(),
            showcase: ShowcaseConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle: String,
    pub dark_icon: String,
    pub light_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            toggle: "#theme-toggle".to_owned(),
            dark_icon: "#theme-toggle-dark-icon".to_owned(),
            light_icon: "#theme-toggle-light-icon".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    pub container: String,
    pub content: String,
    pub items: String,
    pub dropdowns: String,
    pub open_trigger: String,
    pub close_trigger: String,
    pub desktop_breakpoint_px: f64,
    pub close_time_scale: f64,
    pub reveal_delay_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            container: ".menu".to_owned(),
            content: ".menu-overflow".to_owned(),
            items: ".menu-list".to_owned(),
            dropdowns: ".menu-list-item-anchor".to_owned(),
            open_trigger: ".menu-open".to_owned(),
            close_trigger: ".menu-close".to_owned(),
            desktop_breakpoint_px: DESKTOP_BREAKPOINT_PX,
            close_time_scale: MENU_CLOSE_TIME_SCALE,
            reveal_delay_ms: OPEN_TRIGGER_REVEAL_DELAY_MS,
        }
    }
}

/// Selectors and open-state styling for one accordion variant.
///
/// Each optional field is written only when set: `openPaddingPx` on the item,
/// `openBodyMarginPx` on the body, `openBorder` on the item (collapsed items
/// get a transparent border), and `stateAttribute` on the item as
/// `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionConfig {
    pub items: String,
    pub header: String,
    pub body: String,
    pub open_padding_px: Option<f64>,
    pub open_body_margin_px: Option<f64>,
    pub open_border: Option<String>,
    pub state_attribute: Option<String>,
}

impl AccordionConfig {
    /// FAQ cards that gain a border and bottom padding when open.
    #[must_use]
    pub fn bordered() -> Self {
        Self {
            items: ".accordion-item".to_owned(),
            header: ".accordion-header".to_owned(),
            body: ".accordion-body".to_owned(),
            open_padding_px: Some(ACCORDION_OPEN_PADDING_PX),
            open_body_margin_px: None,
            open_border: Some(ACCORDION_OPEN_BORDER.to_owned()),
            state_attribute: None,
        }
    }

    /// Compact list that spaces the open body and flags items with `data-active`.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            items: ".accordion-itemV4".to_owned(),
            header: ".accordion-headerV4".to_owned(),
            body: ".accordion-bodyV4".to_owned(),
            open_padding_px: None,
            open_body_margin_px: Some(ACCORDION_OPEN_BODY_MARGIN_PX),
            open_border: None,
            state_attribute: Some("data-active".to_owned()),
        }
    }

    /// Borderless FAQ with bottom padding only.
    #[must_use]
    pub fn plain() -> Self {
        Self { items: ".accordion-itemV5".to_owned(), open_border: None, ..Self::bordered() }
    }
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self::bordered()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingConfig {
    pub toggle: String,
    pub monthly_option: String,
    pub yearly_option: String,
    pub monthly_charge: String,
    pub yearly_charge: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            toggle: "#toggle".to_owned(),
            monthly_option: "#monthlyOption".to_owned(),
            yearly_option: "#yearlyOption".to_owned(),
            monthly_charge: "#monthlyCharge".to_owned(),
            yearly_charge: "#yearlyCharge".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    pub section: String,
    pub counters: String,
    pub step_ms: u32,
    pub stagger_ms: u32,
    pub visibility_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            section: "#counter".to_owned(),
            counters: ".counter".to_owned(),
            step_ms: COUNTER_STEP_MS,
            stagger_ms: COUNTER_STAGGER_MS,
            visibility_threshold: COUNTER_VISIBILITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    pub root: String,
    pub overlay: String,
    pub content: String,
    pub player: String,
    pub close: String,
    pub triggers: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            root: ".custom-modal".to_owned(),
            overlay: ".modal-overlay".to_owned(),
            content: ".modal-content".to_owned(),
            player: ".video-container".to_owned(),
            close: ".modal-close".to_owned(),
            triggers: ".video-section .hero-video".to_owned(),
        }
    }
}

/// Team member tabs and the detail panel they fill. Part selectors are
/// resolved inside each tab and inside the panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamConfig {
    pub tabs: String,
    pub details: String,
    pub tab_title: String,
    pub tab_role: String,
    pub tab_image: String,
    pub detail_title: String,
    pub detail_role: String,
    pub detail_image: String,
    pub swap_delay_ms: u32,
    pub settle_delay_ms: u32,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            tabs: ".tab-member".to_owned(),
            details: ".our-team-details".to_owned(),
            tab_title: "h3".to_owned(),
            tab_role: "p".to_owned(),
            tab_image: "img".to_owned(),
            detail_title: "h2".to_owned(),
            detail_role: "p".to_owned(),
            detail_image: "img".to_owned(),
            swap_delay_ms: TEAM_SWAP_DELAY_MS,
            settle_delay_ms: TEAM_SETTLE_DELAY_MS,
        }
    }
}

/// Click-to-play hero video with animated play/pause badges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseConfig {
    pub wrapper: String,
    pub video: String,
    pub play_icon: String,
    pub pause_icon: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            wrapper: "#heroToggleShowCaseVideo".to_owned(),
            video: "#hero-show-case-video".to_owned(),
            play_icon: "#play-icon".to_owned(),
            pause_icon: "#pause-icon".to_owned(),
        }
    }
}
