//! Once-per-load session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module mounts this on its first client-side render. A fresh handoff
//! cookie is migrated into persistent storage and deleted; then the session
//! is always read back from storage, so a handoff from this load and a
//! session cached by an earlier load take the same path.
//!
//! ERROR HANDLING
//! ==============
//! Storage/cookie failures and malformed stored JSON are logged and read as
//! absent values. The caller only ever sees a [`Session`], at worst an empty
//! one, which routes the user back to login.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SessionError;
use crate::handoff::{Handoff, parse_handoff};
use crate::port::{CookieJar, KeyValueStore};

pub const HANDOFF_COOKIE: &str = "auth_data";
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "role";

/// Per-module bootstrap parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    /// Payload fields that may hold the token, in preference order.
    pub token_fields: Vec<String>,
    /// Prepended to the `token`/`user`/`role` storage keys.
    pub key_prefix: String,
    pub fallback_role: String,
    /// Field of the user record holding the ordered role list.
    pub roles_field: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            cookie_name: HANDOFF_COOKIE.to_owned(),
            cookie_path: "/".to_owned(),
            token_fields: vec!["token".to_owned(), "access_token".to_owned()],
            key_prefix: String::new(),
            fallback_role: "guest".to_owned(),
            roles_field: "roles".to_owned(),
        }
    }
}

impl BootstrapConfig {
    #[must_use]
    pub fn token_key(&self) -> String {
        format!("{}{TOKEN_KEY}", self.key_prefix)
    }

    #[must_use]
    pub fn user_key(&self) -> String {
        format!("{}{USER_KEY}", self.key_prefix)
    }

    #[must_use]
    pub fn role_key(&self) -> String {
        format!("{}{ROLE_KEY}", self.key_prefix)
    }
}

/// Session state exposed to the module tree.
///
/// `mounted` is false until the bootstrap has completed once; role-gated UI
/// must wait for it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<Value>,
    pub role: Option<String>,
    pub mounted: bool,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }

    /// String field of the user record, e.g. `"name"` or `"email"`.
    #[must_use]
    pub fn user_field(&self, field: &str) -> Option<&str> {
        self.user.as_ref()?.get(field)?.as_str()
    }
}

/// Run the bootstrap sequence and return the resulting mounted session.
pub fn bootstrap<S, C>(store: &S, cookies: &C, config: &BootstrapConfig) -> Session
where
    S: KeyValueStore + ?Sized,
    C: CookieJar + ?Sized,
{
    match consume_handoff(store, cookies, config) {
        Ok(true) => log::debug!("handoff cookie `{}` consumed", config.cookie_name),
        Ok(false) => {}
        Err(err) => log::warn!("handoff cookie `{}` ignored: {err}", config.cookie_name),
    }

    Session {
        mounted: true,
        ..read_session(store, config)
    }
}

/// Migrate the handoff cookie into storage if one is present.
///
/// The cookie is deleted whenever it was found, even if its payload was
/// unusable, so it can never be consumed twice. A write that fails part way
/// clears the session keys, so no mix of old and new values survives.
///
/// # Errors
///
/// Returns the first storage, cookie or payload error encountered.
pub fn consume_handoff<S, C>(store: &S, cookies: &C, config: &BootstrapConfig) -> Result<bool, SessionError>
where
    S: KeyValueStore + ?Sized,
    C: CookieJar + ?Sized,
{
    let Some(raw) = cookies.get(&config.cookie_name)? else {
        return Ok(false);
    };

    let fields: Vec<&str> = config.token_fields.iter().map(String::as_str).collect();
    let persisted = parse_handoff(&raw, &fields).and_then(|handoff| {
        persist_handoff(store, config, &handoff).inspect_err(|_| clear_session(store, config))
    });
    let deleted = cookies.delete(&config.cookie_name, &config.cookie_path);

    persisted?;
    deleted?;
    Ok(true)
}

fn persist_handoff<S>(store: &S, config: &BootstrapConfig, handoff: &Handoff) -> Result<(), SessionError>
where
    S: KeyValueStore + ?Sized,
{
    let role = handoff.resolved_role(&config.roles_field, &config.fallback_role);

    store.set(&config.token_key(), &Value::String(handoff.token.clone()).to_string())?;
    match &handoff.user {
        Some(user) => store.set(&config.user_key(), &user.to_string())?,
        None => store.remove(&config.user_key())?,
    }
    store.set(&config.role_key(), &role)
}

/// Read the persisted session. Never fails; unreadable values are absent.
/// The returned session is not yet marked mounted.
pub fn read_session<S>(store: &S, config: &BootstrapConfig) -> Session
where
    S: KeyValueStore + ?Sized,
{
    let token = read_json::<String, _>(store, &config.token_key()).filter(|t| !t.is_empty());
    let user = read_json::<Value, _>(store, &config.user_key()).filter(|u| !u.is_null());
    let role = read_raw(store, &config.role_key()).filter(|r| !r.is_empty());

    Session {
        token,
        user,
        role,
        mounted: false,
    }
}

/// Remove the session keys. Used by logout, including the idle logout.
pub fn clear_session<S>(store: &S, config: &BootstrapConfig)
where
    S: KeyValueStore + ?Sized,
{
    for key in [config.token_key(), config.user_key(), config.role_key()] {
        if let Err(err) = store.remove(&key) {
            log::warn!("failed to clear `{key}`: {err}");
        }
    }
}

fn read_raw<S>(store: &S, key: &str) -> Option<String>
where
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .inspect_err(|err| log::warn!("session read failed: {err}"))
        .ok()
        .flatten()
}

fn read_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = read_raw(store, key)?;
    serde_json::from_str(&raw)
        .map_err(|source| SessionError::MalformedJson {
            key: key.to_owned(),
            source,
        })
        .inspect_err(|err| log::warn!("{err}"))
        .ok()
}
