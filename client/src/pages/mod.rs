//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page resolves its module from the route and delegates session
//! handling to `SessionLayout`.

pub mod login;
pub mod module;
