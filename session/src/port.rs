//! Storage and cookie seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client implements these over `localStorage` and
//! `document.cookie`; tests use the in-memory fakes below.

#[cfg(test)]
#[path = "port_test.rs"]
mod port_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::SessionError;

/// String key/value persistence (browser `localStorage` semantics).
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the write is rejected (quota, privacy mode).
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Cookie access scoped to what the handoff needs.
pub trait CookieJar {
    /// Read the raw value of cookie `name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the cookie string cannot be read.
    fn get(&self, name: &str) -> Result<Option<String>, SessionError>;

    /// Expire cookie `name` on `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the cookie string cannot be written.
    fn delete(&self, name: &str, path: &str) -> Result<(), SessionError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        store
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// In-memory [`CookieJar`] that records deletions.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<BTreeMap<String, String>>,
    deleted: RefCell<Vec<(String, String)>>,
}

impl MemoryCookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cookie(name: &str, value: &str) -> Self {
        let jar = Self::new();
        jar.cookies.borrow_mut().insert(name.to_owned(), value.to_owned());
        jar
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cookies.borrow().contains_key(name)
    }

    /// `(name, path)` pairs passed to [`CookieJar::delete`], in call order.
    #[must_use]
    pub fn deletions(&self) -> Vec<(String, String)> {
        self.deleted.borrow().clone()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>, SessionError> {
        Ok(self.cookies.borrow().get(name).cloned())
    }

    fn delete(&self, name: &str, path: &str) -> Result<(), SessionError> {
        self.cookies.borrow_mut().remove(name);
        self.deleted.borrow_mut().push((name.to_owned(), path.to_owned()));
        Ok(())
    }
}

/// Find cookie `name` in a `document.cookie` style string (`a=1; b=2`).
///
/// Returns the raw (still URL-encoded) value of the first match.
#[must_use]
pub fn find_cookie<'a>(cookie_string: &'a str, name: &str) -> Option<&'a str> {
    cookie_string.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then_some(value.trim())
    })
}

/// Cookie assignment that expires `name` on `path`.
#[must_use]
pub fn expired_cookie(name: &str, path: &str) -> String {
    format!("{name}=; path={path}; max-age=0")
}
