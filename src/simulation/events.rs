//! Events emitted during a step for the JS collaborators
//!
//! The inventory panel consumes item finds; the particle renderer consumes
//! effect triggers. Both are fire-and-forget: the core accumulates events
//! during `step` and the shell drains them once per frame. The core never
//! waits on a consumer.

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectKind {
    Jump,
    Landing,
    JetpackExhaust,
    Debris,
    Thinking,
    ItemSparkle,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Event {
    /// A completed dig uncovered a collectible. `source` is the layer or
    /// pocket key the inventory uses to name the find.
    #[serde(rename_all = "camelCase")]
    ItemFound { col: i32, row: i32, source: &'static str },
    /// A visual effect trigger at a screen-space position
    #[serde(rename_all = "camelCase")]
    Effect { kind: EffectKind, x: f32, y: f32 },
}

#[derive(Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub(crate) fn push_item_found(&mut self, col: i32, row: i32, source: &'static str) {
        self.events.push(Event::ItemFound { col, row, source });
    }

    pub(crate) fn push_effect(&mut self, kind: EffectKind, x: f32, y: f32) {
        self.events.push(Event::Effect { kind, x, y });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }

    /// Serialize and clear; the shell calls this once per frame
    pub fn drain_json(&mut self) -> String {
        let out = serde_json::to_string(&self.events).unwrap_or_else(|_| "[]".to_string());
        self.events.clear();
        out
    }
}
