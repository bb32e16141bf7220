//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `idle`) so the layout and pages can
//! depend on small focused models provided through Leptos context.

pub mod auth;
pub mod idle;
