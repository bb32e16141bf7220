//! `localStorage` and `document.cookie` adapters for the session ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! These centralize the hydrate-only web-sys glue. On the server both report
//! the store as unavailable, which the bootstrap reads as "no session".

use session::error::SessionError;
use session::port::{CookieJar, KeyValueStore};
#[cfg(feature = "hydrate")]
use session::port::{expired_cookie, find_cookie};

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

/// Browser `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SessionError::StorageUnavailable)
}

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, SessionError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or_else(|| SessionError::Cookie("document unavailable".to_owned()))
}

#[cfg(feature = "hydrate")]
fn storage_error(key: &str, err: &wasm_bindgen::JsValue) -> SessionError {
    SessionError::Storage {
        key: key.to_owned(),
        message: format!("{err:?}"),
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| storage_error(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(SessionError::StorageUnavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| storage_error(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(SessionError::StorageUnavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| storage_error(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(SessionError::StorageUnavailable)
        }
    }
}

impl CookieJar for BrowserCookies {
    fn get(&self, name: &str) -> Result<Option<String>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let all = html_document()?
                .cookie()
                .map_err(|e| SessionError::Cookie(format!("{e:?}")))?;
            Ok(find_cookie(&all, name).map(str::to_owned))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Ok(None)
        }
    }

    fn delete(&self, name: &str, path: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(&expired_cookie(name, path))
                .map_err(|e| SessionError::Cookie(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, path);
            Ok(())
        }
    }
}
