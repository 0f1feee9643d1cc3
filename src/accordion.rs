//! Single-open accordions.
//!
//! Every variant on the page shares the same rule: clicking a header collapses
//! everything, then expands that item unless it was the open one. Variants
//! differ only in which extra styles and attributes mark the open item.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use crate::config::AccordionConfig;
use crate::consts::{ACTIVE_CLASS, OPEN_CLASS};
use crate::dom::{DomQuery, Node, css_number};

pub struct AccordionItem {
    pub item: Node,
    pub header: Node,
    pub body: Node,
}

/// Open-state decorations for one variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccordionStyle {
    pub open_padding_px: Option<f64>,
    pub open_body_margin_px: Option<f64>,
    pub open_border: Option<String>,
    pub state_attribute: Option<String>,
}

impl From<&AccordionConfig> for AccordionStyle {
    fn from(cfg: &AccordionConfig) -> Self {
        Self {
            open_padding_px: cfg.open_padding_px,
            open_body_margin_px: cfg.open_body_margin_px,
            open_border: cfg.open_border.clone(),
            state_attribute: cfg.state_attribute.clone(),
        }
    }
}

pub struct Accordion {
    items: Vec<AccordionItem>,
    style: AccordionStyle,
}

impl Accordion {
    /// Collect every item that has both a header and a body; others are skipped.
    pub fn locate(doc: &dyn DomQuery, cfg: &AccordionConfig) -> Vec<AccordionItem> {
        doc.query_all(&cfg.items)
            .into_iter()
            .filter_map(|item| {
                let header = item.find(&cfg.header)?;
                let body = item.find(&cfg.body)?;
                Some(AccordionItem { item, header, body })
            })
            .collect()
    }

    /// Take over `items`, marking each one closed when the variant tracks state.
    #[must_use]
    pub fn new(items: Vec<AccordionItem>, style: AccordionStyle) -> Self {
        let accordion = Self { items, style };
        if let Some(attribute) = &accordion.style.state_attribute {
            for entry in &accordion.items {
                entry.item.set_attribute(attribute, "false");
            }
        }
        accordion
    }

    /// Collapse everything, then expand `index` unless it was the open one.
    pub fn toggle(&mut self, index: usize) {
        let Some(target) = self.items.get(index) else {
            return;
        };
        let was_open = target.header.has_class(OPEN_CLASS);
        for entry in &self.items {
            self.collapse(entry);
        }
        if !was_open {
            self.expand(target);
        }
        log::debug!("accordion: open item {:?}", self.open_index());
    }

    /// The expanded item, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.items.iter().position(|entry| entry.header.has_class(OPEN_CLASS))
    }

    fn expand(&self, entry: &AccordionItem) {
        entry.header.add_class(OPEN_CLASS);
        entry.header.add_class(ACTIVE_CLASS);
        entry.body.set_style("height", &px(entry.body.scroll_height()));
        if let Some(padding) = self.style.open_padding_px {
            entry.item.set_style("padding-bottom", &px(padding));
        }
        if let Some(margin) = self.style.open_body_margin_px {
            entry.body.set_style("margin-bottom", &px(margin));
        }
        if let Some(border) = &self.style.open_border {
            entry.item.set_style("border", border);
        }
        if let Some(attribute) = &self.style.state_attribute {
            entry.item.set_attribute(attribute, "true");
        }
    }

    fn collapse(&self, entry: &AccordionItem) {
        entry.header.remove_class(OPEN_CLASS);
        entry.header.remove_class(ACTIVE_CLASS);
        entry.body.set_style("height", "0");
        if self.style.open_padding_px.is_some() {
            entry.item.set_style("padding-bottom", "0");
        }
        if self.style.open_body_margin_px.is_some() {
            entry.body.set_style("margin-bottom", "0");
        }
        if self.style.open_border.is_some() {
            entry.item.set_style("border-color", "transparent");
        }
        if let Some(attribute) = &self.style.state_attribute {
            entry.item.set_attribute(attribute, "false");
        }
    }
}

fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}
