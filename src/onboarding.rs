//! One-time bookmark hint
//!
//! The persisted flag is read once, at the first file selection. If it is
//! unset the hint is armed and appears after a fixed delay; dismissing it
//! writes the flag. The hint never arms twice in one process.

use crate::core::timer::Countdown;
use crate::settings::ViewerConfig;
use crate::traits::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverState {
    /// No file selected yet, flag not read
    Idle,
    /// Flag was already set when read
    Suppressed,
    /// Waiting for the delay to elapse
    Armed,
    Visible,
    Dismissed,
}

pub struct Onboarding<S: KeyValueStore> {
    store: S,
    key: String,
    countdown: Countdown,
    state: PopoverState,
}

impl<S: KeyValueStore> Onboarding<S> {
    pub fn new(store: S, config: &ViewerConfig) -> Self {
        Self {
            store,
            key: config.onboarding_key.clone(),
            countdown: Countdown::new(config.popover_delay),
            state: PopoverState::Idle,
        }
    }

    pub fn state(&self) -> PopoverState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == PopoverState::Visible
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Called on every file selection; only the first one has an effect
    pub fn on_file_selected(&mut self) {
        if self.state != PopoverState::Idle {
            return;
        }

        let seen = self.store.get(&self.key).is_some_and(|v| !v.is_empty());
        if seen {
            log::debug!("Onboarding hint already shown, suppressing");
            self.state = PopoverState::Suppressed;
        } else {
            self.countdown.start();
            self.state = PopoverState::Armed;
        }
    }

    /// Advances the arming delay; returns true when the hint just appeared
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.state == PopoverState::Armed && self.countdown.tick(delta) {
            self.state = PopoverState::Visible;
            return true;
        }
        false
    }

    /// Hides the hint and persists the flag; no-op unless visible
    pub fn dismiss(&mut self) -> bool {
        if self.state != PopoverState::Visible {
            return false;
        }

        self.state = PopoverState::Dismissed;
        if let Err(e) = self.store.set(&self.key, "true") {
            log::warn!("Failed to persist onboarding flag: {:#}", e);
        }
        true
    }
}
