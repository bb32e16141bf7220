//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render module chrome while reading shared session state from
//! Leptos context providers.

pub mod idle_warning_modal;
pub mod nav_menu;
pub mod session_layout;
