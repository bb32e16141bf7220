//! Login handoff payload parsing and role resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cross-origin login flow drops a short-lived cookie holding a
//! URL-encoded JSON object: a token under `token` or `access_token`, a
//! `user` record, and optionally a `role`. The bootstrap consumes it once.

#[cfg(test)]
#[path = "handoff_test.rs"]
mod handoff_test;

use serde_json::{Map, Value};

use crate::error::SessionError;

/// A decoded handoff cookie.
#[derive(Clone, Debug, PartialEq)]
pub struct Handoff {
    pub token: String,
    pub user: Option<Value>,
    pub role: Option<String>,
}

impl Handoff {
    /// Effective role for this handoff, see [`resolve_role`].
    #[must_use]
    pub fn resolved_role(&self, roles_field: &str, fallback: &str) -> String {
        resolve_role(self.user.as_ref(), self.role.as_deref(), roles_field, fallback)
    }
}

/// Parse a raw cookie value into a [`Handoff`].
///
/// The value is URL-decoded first; a value that is not valid percent-encoding
/// is parsed as-is. The token is taken from the first of `token_fields`
/// holding a non-empty string.
///
/// # Errors
///
/// Returns [`SessionError::MalformedHandoff`] when the payload is not a JSON
/// object and [`SessionError::MissingToken`] when no token field is usable.
pub fn parse_handoff(raw: &str, token_fields: &[&str]) -> Result<Handoff, SessionError> {
    let decoded = urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |d| d.into_owned());
    let payload: Map<String, Value> = serde_json::from_str(&decoded).map_err(SessionError::MalformedHandoff)?;

    let token = token_fields
        .iter()
        .find_map(|field| non_empty_str(payload.get(*field)))
        .ok_or(SessionError::MissingToken)?
        .to_owned();

    let user = payload.get("user").filter(|u| u.is_object()).cloned();
    let role = non_empty_str(payload.get("role")).map(str::to_owned);

    Ok(Handoff { token, user, role })
}

/// Role precedence: first entry of `user[roles_field]`, then the payload
/// role, then `fallback`.
#[must_use]
pub fn resolve_role(user: Option<&Value>, payload_role: Option<&str>, roles_field: &str, fallback: &str) -> String {
    let first_listed = user
        .and_then(|u| u.get(roles_field))
        .and_then(Value::as_array)
        .and_then(|roles| non_empty_str(roles.first()));

    first_listed
        .or(payload_role.filter(|r| !r.is_empty()))
        .unwrap_or(fallback)
        .to_owned()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
