//! Session lifecycle core for the campus front-end modules.
//!
//! This crate is UI-framework agnostic so the Leptos client can drive it from
//! browser events while tests drive it from plain function calls.
//!
//! - [`idle`] models the inactivity watchdog as an explicit state machine.
//! - [`bootstrap`] migrates the login handoff cookie into persistent storage
//!   and reads the session back.
//! - [`port`] defines the storage/cookie seams plus in-memory fakes.
//! - [`module`] carries per-module bootstrap profiles.
//! - [`nav`] filters navigation entries by role.

pub mod bootstrap;
pub mod error;
pub mod handoff;
pub mod idle;
pub mod module;
pub mod nav;
pub mod port;

pub use bootstrap::{BootstrapConfig, Session, bootstrap, clear_session};
pub use error::SessionError;
pub use idle::{IdleConfig, IdleMachine, IdleNotice, IdlePhase, IdleStep, TimerKind, TimerRequest};
pub use module::ModuleProfile;
pub use nav::{NavItem, visible_items};
pub use port::{CookieJar, KeyValueStore, MemoryCookieJar, MemoryStore};
