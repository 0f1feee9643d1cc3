//! Count-up statistics that run once when their section scrolls into view.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::CounterConfig;
use crate::consts::COUNTER_STEPS;
use crate::dom::{DomQuery, Node, Timers};

/// Progress of one counter towards its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterRun {
    pub target: u64,
    pub current: u64,
}

impl CounterRun {
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self { target, current: 0 }
    }

    /// Size of each increment: the target split into [`COUNTER_STEPS`], rounded up.
    #[must_use]
    pub fn increment(&self) -> u64 {
        self.target.div_ceil(COUNTER_STEPS)
    }

    /// Advance one increment. Returns whether more steps remain.
    pub fn step(&mut self) -> bool {
        if self.current < self.target {
            self.current = self.current.saturating_add(self.increment()).min(self.target);
        }
        self.current < self.target
    }
}

/// One counter and the wrapper that fades in around it.
pub struct CounterNode {
    pub value: Node,
    pub wrapper: Option<Node>,
    pub target: u64,
}

impl CounterNode {
    /// Target read from `data-value`; anything unparsable counts to 0.
    pub fn from_node(value: Node) -> Self {
        let target = match value.attribute("data-value").map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(target)) => target,
            _ => 0,
        };
        let wrapper = value.parent();
        Self { value, wrapper, target }
    }
}

pub struct CounterGroup {
    counters: Vec<CounterNode>,
    timers: Rc<dyn Timers>,
    step_ms: u32,
    stagger_ms: u32,
    started: bool,
}

impl CounterGroup {
    /// `None` when the page has no counter section.
    pub fn locate(doc: &dyn DomQuery, cfg: &CounterConfig) -> Option<Vec<CounterNode>> {
        doc.query(&cfg.section)?;
        Some(doc.query_all(&cfg.counters).into_iter().map(CounterNode::from_node).collect())
    }

    pub fn new(counters: Vec<CounterNode>, timers: Rc<dyn Timers>, cfg: &CounterConfig) -> Self {
        Self { counters, timers, step_ms: cfg.step_ms, stagger_ms: cfg.stagger_ms, started: false }
    }

    /// Start counting the first time the section becomes visible.
    /// Returns whether this call started it.
    pub fn on_visible(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        log::debug!("counter: starting {} counters", self.counters.len());

        for (index, counter) in self.counters.iter().enumerate() {
            counter.value.set_text("0");
            let run = Rc::new(Cell::new(CounterRun::new(counter.target)));
            count(Rc::clone(&counter.value), run, Rc::clone(&self.timers), self.step_ms);

            if let Some(wrapper) = &counter.wrapper {
                wrapper.set_style("opacity", "0");
                wrapper.set_style("transform", "translateY(20px)");
                let wrapper = Rc::clone(wrapper);
                let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(self.stagger_ms);
                self.timers.after(
                    delay,
                    Box::new(move || {
                        wrapper.set_style("transition", "all 0.7s ease");
                        wrapper.set_style("opacity", "1");
                        wrapper.set_style("transform", "translateY(0)");
                    }),
                );
            }
        }
        true
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }
}

/// Step once now, then keep stepping every `step_ms` until the target is shown.
fn count(node: Node, run: Rc<Cell<CounterRun>>, timers: Rc<dyn Timers>, step_ms: u32) {
    let mut state = run.get();
    let more = state.step();
    run.set(state);
    node.set_text(&state.current.to_string());
    if more {
        let next = Rc::clone(&timers);
        timers.after(step_ms, Box::new(move || count(node, run, next, step_ms)));
    }
}
