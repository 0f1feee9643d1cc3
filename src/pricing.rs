//! Monthly/yearly billing switch on the pricing table.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::config::PricingConfig;
use crate::consts::{ACTIVE_CLASS, YEARLY_CLASS};
use crate::dom::{DomQuery, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }
}

pub struct PricingElements {
    pub switch: Node,
    pub monthly_option: Node,
    pub yearly_option: Node,
    pub monthly_charge: Node,
    pub yearly_charge: Node,
}

impl PricingElements {
    /// `None` unless every part is present; pages without pricing skip the component.
    pub fn locate(doc: &dyn DomQuery, cfg: &PricingConfig) -> Option<Self> {
        Some(Self {
            switch: doc.query(&cfg.toggle)?,
            monthly_option: doc.query(&cfg.monthly_option)?,
            yearly_option: doc.query(&cfg.yearly_option)?,
            monthly_charge: doc.query(&cfg.monthly_charge)?,
            yearly_charge: doc.query(&cfg.yearly_charge)?,
        })
    }
}

pub struct PricingToggle {
    elements: PricingElements,
    period: BillingPeriod,
}

impl PricingToggle {
    /// Start on monthly billing.
    pub fn initialize(elements: PricingElements) -> Self {
        let toggle = Self { elements, period: BillingPeriod::Monthly };
        toggle.apply();
        toggle
    }

    pub fn toggle(&mut self) -> BillingPeriod {
        self.period = self.period.toggled();
        self.apply();
        self.period
    }

    #[must_use]
    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    fn apply(&self) {
        let yearly = self.period == BillingPeriod::Yearly;
        let els = &self.elements;
        els.switch.set_class(YEARLY_CLASS, yearly);
        els.monthly_option.set_class(ACTIVE_CLASS, !yearly);
        els.yearly_option.set_class(ACTIVE_CLASS, yearly);
        els.monthly_charge.set_style("display", if yearly { "none" } else { "block" });
        els.yearly_charge.set_style("display", if yearly { "block" } else { "none" });
    }
}
