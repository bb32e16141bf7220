//! Browser host for the inactivity watchdog.
//!
//! ARCHITECTURE
//! ============
//! `session::IdleMachine` decides; this module supplies the inputs and
//! effects. Window listeners feed activity, a single `gloo_timers` timeout
//! feeds expiries, and the machine's notices become `on_idle` / `on_active`
//! / `on_warning` callback runs.
//!
//! Callbacks run after the machine borrow is released, so a callback may
//! call `reset()`. A timer requested by a step is armed only if no such
//! reentrant call has moved the machine to a newer generation. Timer expiry
//! is handled in a spawned task so the firing `Timeout` is never dropped
//! from inside its own callback.
//!
//! The runtime is torn down on config change, on `disabled`, and when the
//! owning reactive scope is disposed (via `Drop`).

#[cfg(test)]
#[path = "idle_timer_test.rs"]
mod idle_timer_test;

use std::time::Duration;

use leptos::prelude::*;
use session::{IdleConfig, IdleMachine, IdleNotice, TimerRequest};

use crate::state::idle::IdleState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use session::IdleStep;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Longest delay `setTimeout` honours; larger values fire immediately.
pub const MAX_TIMER_DELAY_MS: u32 = 2_147_483_647;

/// Lifecycle callbacks. `on_warning` also enables the configured warning
/// timeout; without it the warning is skipped.
#[derive(Clone, Copy, Default)]
pub struct IdleHandlers {
    pub on_idle: Option<Callback<()>>,
    pub on_active: Option<Callback<()>>,
    pub on_warning: Option<Callback<()>>,
}

impl IdleHandlers {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn dispatch(&self, notice: IdleNotice) {
        let callback = match notice {
            IdleNotice::Idle => self.on_idle,
            IdleNotice::Active => self.on_active,
            IdleNotice::Warning => self.on_warning,
        };
        if let Some(callback) = callback {
            callback.run(());
        }
    }
}

/// Convert a requested delay to a `setTimeout` argument.
pub fn timer_delay_ms(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMER_DELAY_MS, |ms| ms.min(MAX_TIMER_DELAY_MS))
}

/// Whether `timer` should still be armed once a step's callbacks have run.
/// A callback that reset or tore down the watchdog has already moved the
/// machine past the step's generation.
pub fn timer_is_current(machine: &IdleMachine, timer: &TimerRequest) -> bool {
    machine.is_running() && machine.generation() == timer.generation
}

/// Handle returned by [`use_idle_timer`].
#[derive(Clone, Copy)]
pub struct IdleTimerHandle {
    state: RwSignal<IdleState>,
    #[cfg(feature = "hydrate")]
    runtime: StoredValue<Rc<IdleRuntime>, LocalStorage>,
}

impl IdleTimerHandle {
    /// Treat as one activity event.
    pub fn reset(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(runtime) = self.runtime.try_get_value() {
            runtime.on_activity();
        }
    }

    pub fn is_idle(&self) -> bool {
        self.snapshot().is_idle
    }

    pub fn is_warning_shown(&self) -> bool {
        self.snapshot().is_warning_shown
    }

    /// Reactive snapshot for views.
    pub fn state(&self) -> RwSignal<IdleState> {
        self.state
    }

    fn snapshot(&self) -> IdleState {
        #[cfg(feature = "hydrate")]
        {
            self.runtime
                .try_with_value(|runtime| IdleState::of(&runtime.machine.borrow()))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.state.get_untracked()
        }
    }
}

/// Watch for inactivity according to `config`.
///
/// Re-activates whenever `config` changes; `disabled` detaches everything.
pub fn use_idle_timer(config: Signal<IdleConfig>, handlers: IdleHandlers) -> IdleTimerHandle {
    let state = RwSignal::new(IdleState::default());

    #[cfg(feature = "hydrate")]
    {
        let runtime = StoredValue::new_local(IdleRuntime::new(handlers, state));
        Effect::new(move |previous: Option<IdleConfig>| {
            let next = config.get();
            if previous.as_ref() == Some(&next) {
                return next;
            }
            if let Some(runtime) = runtime.try_get_value() {
                runtime.deactivate();
                if !next.disabled {
                    runtime.activate(&next);
                }
            }
            next
        });
        IdleTimerHandle { state, runtime }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, handlers);
        IdleTimerHandle { state }
    }
}

#[cfg(feature = "hydrate")]
type ActivityListener = Closure<dyn FnMut(web_sys::Event)>;

#[cfg(feature = "hydrate")]
struct IdleRuntime {
    machine: RefCell<IdleMachine>,
    timeout: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<(String, ActivityListener)>>,
    handlers: IdleHandlers,
    state: RwSignal<IdleState>,
    weak_self: Weak<IdleRuntime>,
}

#[cfg(feature = "hydrate")]
impl IdleRuntime {
    fn new(handlers: IdleHandlers, state: RwSignal<IdleState>) -> Rc<Self> {
        Rc::new_cyclic(|weak_self| Self {
            machine: RefCell::new(IdleMachine::new(session::idle::DEFAULT_TIMEOUT, None)),
            timeout: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            handlers,
            state,
            weak_self: weak_self.clone(),
        })
    }

    fn activate(&self, config: &IdleConfig) {
        let has_warning = self.handlers.on_warning.is_some();
        if has_warning && config.warning_overlaps_timeout() {
            log::warn!(
                "idle warning ({:?}) is not before timeout ({:?}); idle will follow the warning immediately",
                config.warning_timeout,
                config.timeout
            );
        }

        self.machine.borrow_mut().reconfigure(config, has_warning);
        self.attach_listeners(&config.events);
        let step = self.machine.borrow_mut().start();
        self.apply(step);
    }

    fn deactivate(&self) {
        self.machine.borrow_mut().stop();
        self.timeout.borrow_mut().take();
        self.detach_listeners();
        self.state.set(IdleState::default());
    }

    fn on_activity(&self) {
        let step = self.machine.borrow_mut().activity();
        self.apply(step);
    }

    fn on_expire(&self, generation: u64) {
        let step = self.machine.borrow_mut().expire(generation);
        self.apply(step);
    }

    fn apply(&self, step: IdleStep) {
        self.state.set(IdleState::of(&self.machine.borrow()));
        for notice in step.notices {
            self.handlers.dispatch(notice);
        }
        if let Some(timer) = step.timer {
            let current = timer_is_current(&self.machine.borrow(), &timer);
            if current {
                self.arm(timer);
            }
        }
    }

    fn arm(&self, timer: TimerRequest) {
        let weak = self.weak_self.clone();
        let generation = timer.generation;
        let handle = Timeout::new(timer_delay_ms(timer.delay), move || {
            leptos::task::spawn_local(async move {
                if let Some(runtime) = weak.upgrade() {
                    runtime.on_expire(generation);
                }
            });
        });
        // Replacing the slot drops, and so cancels, the previous timeout.
        *self.timeout.borrow_mut() = Some(handle);
    }

    fn attach_listeners(&self, events: &[String]) {
        let Some(window) = web_sys::window() else {
            log::warn!("idle timer: no window, activity listeners not attached");
            return;
        };
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);

        let mut listeners = self.listeners.borrow_mut();
        for event in events {
            let weak = self.weak_self.clone();
            let listener: ActivityListener = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                if let Some(runtime) = weak.upgrade() {
                    runtime.on_activity();
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            if window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    listener.as_ref().unchecked_ref(),
                    &options,
                )
                .is_ok()
            {
                listeners.push((event.clone(), listener));
            } else {
                log::warn!("idle timer: failed to listen for `{event}`");
            }
        }
    }

    fn detach_listeners(&self) {
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        let Some(window) = web_sys::window() else {
            return;
        };
        for (event, listener) in &listeners {
            let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for IdleRuntime {
    fn drop(&mut self) {
        self.machine.get_mut().stop();
        self.timeout.get_mut().take();
        self.detach_listeners();
    }
}
