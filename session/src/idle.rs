//! Inactivity watchdog modelled as an explicit state machine.
//!
//! DESIGN
//! ======
//! The machine never touches a clock. Hosts feed it two kinds of input,
//! activity and timer expiry, and it answers with an [`IdleStep`]: the
//! notices to dispatch and at most one timer to arm. Every armed timer
//! carries a generation number; cancelling bumps the generation, so an
//! expiry that was already queued when a reset happened is ignored.
//!
//! Warning and idle are chained. With a warning configured, idle is armed
//! when the warning fires, for `timeout - warning_timeout` (clamped at zero),
//! rather than measured from the last activity.

#[cfg(test)]
#[path = "idle_test.rs"]
mod idle_test;

use std::time::Duration;

/// Inactivity before the session counts as idle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Window events that count as user activity.
pub const DEFAULT_EVENTS: [&str; 6] = ["mousedown", "mousemove", "keydown", "scroll", "touchstart", "click"];

/// Watchdog configuration. Hosts compare configs to detect changes while
/// mounted, hence `PartialEq`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdleConfig {
    pub timeout: Duration,
    pub warning_timeout: Option<Duration>,
    pub events: Vec<String>,
    pub disabled: bool,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            warning_timeout: None,
            events: DEFAULT_EVENTS.iter().map(|e| (*e).to_owned()).collect(),
            disabled: false,
        }
    }
}

impl IdleConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_warning(mut self, warning_timeout: Duration) -> Self {
        self.warning_timeout = Some(warning_timeout);
        self
    }

    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// True when the warning would fire at or after the idle deadline.
    /// Such configs still work: idle follows the warning with zero delay.
    #[must_use]
    pub fn warning_overlaps_timeout(&self) -> bool {
        self.warning_timeout.is_some_and(|w| w >= self.timeout)
    }
}

/// Exactly one phase holds at any instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdlePhase {
    #[default]
    Active,
    /// Warning fired, idle not yet reached.
    Warned,
    Idle,
}

/// Lifecycle callbacks the host should invoke, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleNotice {
    Warning,
    Idle,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Warning,
    Idle,
}

/// A timer the host must arm, replacing any previously armed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub generation: u64,
    pub delay: Duration,
}

/// Output of one machine transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdleStep {
    pub notices: Vec<IdleNotice>,
    pub timer: Option<TimerRequest>,
}

impl IdleStep {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty() && self.timer.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct IdleMachine {
    timeout: Duration,
    warning_timeout: Option<Duration>,
    phase: IdlePhase,
    warning_shown: bool,
    running: bool,
    generation: u64,
    pending: Option<TimerKind>,
}

impl IdleMachine {
    /// Build a stopped machine. `warning_timeout` should only be passed when
    /// the host has a warning callback to deliver it to.
    #[must_use]
    pub fn new(timeout: Duration, warning_timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            warning_timeout,
            phase: IdlePhase::Active,
            warning_shown: false,
            running: false,
            generation: 0,
            pending: None,
        }
    }

    /// Build a stopped machine from `config`, ignoring its warning timeout
    /// unless `has_warning_handler` is set.
    #[must_use]
    pub fn from_config(config: &IdleConfig, has_warning_handler: bool) -> Self {
        let warning = if has_warning_handler { config.warning_timeout } else { None };
        Self::new(config.timeout, warning)
    }

    /// Stop and adopt new durations. The generation counter carries over so
    /// expiries armed under the old config stay stale.
    pub fn reconfigure(&mut self, config: &IdleConfig, has_warning_handler: bool) {
        self.stop();
        let fresh = Self::from_config(config, has_warning_handler);
        self.timeout = fresh.timeout;
        self.warning_timeout = fresh.warning_timeout;
    }

    /// Begin watching from a fresh active state.
    pub fn start(&mut self) -> IdleStep {
        self.running = true;
        self.phase = IdlePhase::Active;
        self.warning_shown = false;
        IdleStep {
            notices: Vec::new(),
            timer: Some(self.arm_sequence()),
        }
    }

    /// Stop watching and invalidate any armed timer.
    pub fn stop(&mut self) {
        self.running = false;
        self.cancel();
    }

    /// Record user activity: cancel pending timers, leave the idle episode if
    /// in one, and re-arm the sequence.
    pub fn activity(&mut self) -> IdleStep {
        if !self.running {
            return IdleStep::default();
        }
        self.cancel();
        self.warning_shown = false;

        let mut notices = Vec::new();
        if self.phase == IdlePhase::Idle {
            notices.push(IdleNotice::Active);
        }
        self.phase = IdlePhase::Active;

        IdleStep {
            notices,
            timer: Some(self.arm_sequence()),
        }
    }

    /// Handle expiry of the timer armed with `generation`. Stale or
    /// duplicate expiries yield an empty step.
    pub fn expire(&mut self, generation: u64) -> IdleStep {
        if !self.running || generation != self.generation {
            return IdleStep::default();
        }
        match self.pending.take() {
            Some(TimerKind::Warning) => {
                self.phase = IdlePhase::Warned;
                self.warning_shown = true;
                let remaining = self
                    .warning_timeout
                    .map_or(Duration::ZERO, |w| self.timeout.saturating_sub(w));
                IdleStep {
                    notices: vec![IdleNotice::Warning],
                    timer: Some(self.arm(TimerKind::Idle, remaining)),
                }
            }
            Some(TimerKind::Idle) if self.phase != IdlePhase::Idle => {
                self.phase = IdlePhase::Idle;
                IdleStep {
                    notices: vec![IdleNotice::Idle],
                    timer: None,
                }
            }
            Some(TimerKind::Idle) | None => IdleStep::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> IdlePhase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == IdlePhase::Idle
    }

    /// Warning flag; stays set through the idle episode until activity.
    #[must_use]
    pub fn is_warning_shown(&self) -> bool {
        self.warning_shown
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending(&self) -> Option<TimerKind> {
        self.pending
    }

    fn arm_sequence(&mut self) -> TimerRequest {
        match self.warning_timeout {
            Some(warning) => self.arm(TimerKind::Warning, warning),
            None => self.arm(TimerKind::Idle, self.timeout),
        }
    }

    fn arm(&mut self, kind: TimerKind, delay: Duration) -> TimerRequest {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(kind);
        TimerRequest {
            kind,
            generation: self.generation,
            delay,
        }
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}
