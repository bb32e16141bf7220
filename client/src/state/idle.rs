//! Reactive mirror of the inactivity watchdog.
//!
//! The watchdog itself lives in `util::idle_timer`; this snapshot is what
//! views subscribe to.

#[cfg(test)]
#[path = "idle_test.rs"]
mod idle_test;

use session::IdleMachine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdleState {
    pub is_idle: bool,
    pub is_warning_shown: bool,
}

impl IdleState {
    #[must_use]
    pub fn of(machine: &IdleMachine) -> Self {
        Self {
            is_idle: machine.is_idle(),
            is_warning_shown: machine.is_warning_shown(),
        }
    }

    /// Warning is up and idle has not been reached yet.
    #[must_use]
    pub fn awaiting_confirmation(self) -> bool {
        self.is_warning_shown && !self.is_idle
    }
}
