//! Auth-session state for the current module.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated once per load by `use_auth_bootstrap`. Route guards and
//! role-aware components read it from context and must treat
//! `mounted == false` as "not known yet".

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;
use session::Session;

/// Session snapshot exposed to the module tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<Value>,
    pub role: Option<String>,
    pub mounted: bool,
}

impl From<Session> for AuthState {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            user: session.user,
            role: session.role,
            mounted: session.mounted,
        }
    }
}

impl AuthState {
    /// State after logout: known, and empty.
    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            mounted: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.mounted && self.token.is_some()
    }

    /// Name shown in the header: user `name`, then `email`, then "Guest".
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| {
                ["name", "email"]
                    .into_iter()
                    .find_map(|field| u.get(field).and_then(Value::as_str))
            })
            .filter(|name| !name.is_empty())
            .unwrap_or("Guest")
            .to_owned()
    }
}
