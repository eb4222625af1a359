//! Keyboard state
//!
//! Key events arrive asynchronously from the host; the frame loop samples the
//! last known state at the start of each tick. No queuing, no debouncing.

use std::collections::HashMap;

use crate::sim::TickInput;

const LEFT_KEYS: [&str; 2] = ["a", "arrowleft"];
const RIGHT_KEYS: [&str; 2] = ["d", "arrowright"];

/// Last-known pressed state per key, keyed by lower-cased key identifier
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.pressed.insert(key.to_lowercase(), true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed.insert(key.to_lowercase(), false);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    fn any_down(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_down(k))
    }

    /// Sample the current state as steering input for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.any_down(&LEFT_KEYS),
            right: self.any_down(&RIGHT_KEYS),
        }
    }
}
