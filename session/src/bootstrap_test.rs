use serde_json::json;

use super::*;
use crate::port::{MemoryCookieJar, MemoryStore};

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
        Err(SessionError::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Err(SessionError::StorageUnavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), SessionError> {
        Err(SessionError::StorageUnavailable)
    }
}

struct BrokenCookies;

impl CookieJar for BrokenCookies {
    fn get(&self, _name: &str) -> Result<Option<String>, SessionError> {
        Err(SessionError::Cookie("document unavailable".to_owned()))
    }

    fn delete(&self, _name: &str, _path: &str) -> Result<(), SessionError> {
        Err(SessionError::Cookie("document unavailable".to_owned()))
    }
}

/// Memory store that refuses writes to a single key.
struct RejectingStore {
    inner: MemoryStore,
    rejected: &'static str,
}

impl KeyValueStore for RejectingStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if key == self.rejected {
            return Err(SessionError::Storage {
                key: key.to_owned(),
                message: "quota exceeded".to_owned(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.inner.remove(key)
    }
}

fn student_config() -> BootstrapConfig {
    BootstrapConfig {
        fallback_role: "student".to_owned(),
        ..BootstrapConfig::default()
    }
}

// =============================================================
// Handoff present
// =============================================================

#[test]
fn handoff_is_persisted_and_cookie_cleared() {
    let store = MemoryStore::new();
    let cookies = MemoryCookieJar::with_cookie("auth_data", r#"{"token":"abc","user":{"roles":["teacher"]}}"#);

    let session = bootstrap(&store, &cookies, &BootstrapConfig::default());

    assert_eq!(store.raw("role").as_deref(), Some("teacher"));
    assert_eq!(store.raw("token").as_deref(), Some("\"abc\""));
    assert!(!cookies.contains("auth_data"));
    assert_eq!(cookies.deletions(), vec![("auth_data".to_owned(), "/".to_owned())]);

    assert!(session.mounted);
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.role.as_deref(), Some("teacher"));
    assert_eq!(session.user, Some(json!({"roles": ["teacher"]})));
}

#[test]
fn handoff_replaces_cached_session() {
    let store = MemoryStore::with_entries([
        ("token", "\"old\""),
        ("user", r#"{"name":"Old"}"#),
        ("role", "admin"),
    ]);
    let cookies = MemoryCookieJar::with_cookie("auth_data", r#"{"access_token":"new","role":"coordinator"}"#);

    let session = bootstrap(&store, &cookies, &BootstrapConfig::default());

    assert_eq!(session.token.as_deref(), Some("new"));
    assert_eq!(session.role.as_deref(), Some("coordinator"));
    assert_eq!(session.user, None);
    assert_eq!(store.raw("user"), None);
}

#[test]
fn handoff_without_role_sources_uses_fallback() {
    let store = MemoryStore::new();
    let cookies = MemoryCookieJar::with_cookie("auth_data", r#"{"token":"abc","user":{"name":"Ana"}}"#);

    let session = bootstrap(&store, &cookies, &student_config());
    assert_eq!(session.role.as_deref(), Some("student"));
    assert_eq!(session.user_field("name"), Some("Ana"));
}

#[test]
fn handoff_is_consumed_only_once() {
    let store = MemoryStore::new();
    let cookies = MemoryCookieJar::with_cookie("auth_data", r#"{"token":"abc","user":{}}"#);
    let config = BootstrapConfig::default();

    assert!(consume_handoff(&store, &cookies, &config).unwrap());
    assert!(!consume_handoff(&store, &cookies, &config).unwrap());
    assert_eq!(cookies.deletions().len(), 1);
}

#[test]
fn malformed_handoff_is_deleted_and_cache_kept() {
    let store = MemoryStore::with_entries([("token", "\"cached\""), ("role", "teacher")]);
    let cookies = MemoryCookieJar::with_cookie("auth_data", "garbage");

    let session = bootstrap(&store, &cookies, &BootstrapConfig::default());

    assert!(!cookies.contains("auth_data"));
    assert_eq!(session.token.as_deref(), Some("cached"));
    assert_eq!(session.role.as_deref(), Some("teacher"));
    assert!(session.mounted);
}

#[test]
fn prefixed_keys_and_custom_cookie_are_used() {
    let config = BootstrapConfig {
        cookie_name: "eval_auth".to_owned(),
        key_prefix: "evaluation_".to_owned(),
        ..BootstrapConfig::default()
    };
    let store = MemoryStore::new();
    let cookies = MemoryCookieJar::with_cookie("eval_auth", r#"{"token":"t","user":{"roles":["evaluator"]}}"#);

    let session = bootstrap(&store, &cookies, &config);

    assert_eq!(store.raw("evaluation_role").as_deref(), Some("evaluator"));
    assert_eq!(store.raw("role"), None);
    assert_eq!(session.role.as_deref(), Some("evaluator"));
}

// =============================================================
// No handoff
// =============================================================

#[test]
fn empty_environment_yields_empty_mounted_session() {
    let session = bootstrap(&MemoryStore::new(), &MemoryCookieJar::new(), &BootstrapConfig::default());
    assert_eq!(
        session,
        Session {
            token: None,
            user: None,
            role: None,
            mounted: true,
        }
    );
    assert!(!session.is_authenticated());
}

#[test]
fn cached_session_is_read_back() {
    let store = MemoryStore::with_entries([
        ("token", "\"cached\""),
        ("user", r#"{"name":"Ana","roles":["teacher"]}"#),
        ("role", "teacher"),
    ]);

    let session = bootstrap(&store, &MemoryCookieJar::new(), &BootstrapConfig::default());

    assert!(session.is_authenticated());
    assert!(session.has_role("teacher"));
    assert_eq!(session.user_field("name"), Some("Ana"));
}

#[test]
fn invalid_user_json_reads_as_absent() {
    let store = MemoryStore::with_entries([("token", "\"abc\""), ("user", "{not json"), ("role", "student")]);

    let session = bootstrap(&store, &MemoryCookieJar::new(), &BootstrapConfig::default());

    assert_eq!(session.user, None);
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert!(session.mounted);
}

#[test]
fn unquoted_token_reads_as_absent() {
    let store = MemoryStore::with_entries([("token", "abc"), ("role", "")]);
    let session = read_session(&store, &BootstrapConfig::default());
    assert_eq!(session.token, None);
    assert_eq!(session.role, None);
    assert!(!session.mounted);
}

#[test]
fn broken_ports_degrade_to_no_session() {
    let session = bootstrap(&BrokenStore, &BrokenCookies, &BootstrapConfig::default());
    assert_eq!(session.token, None);
    assert_eq!(session.user, None);
    assert_eq!(session.role, None);
    assert!(session.mounted);
}

#[test]
fn storage_write_failure_still_clears_cookie() {
    let cookies = MemoryCookieJar::with_cookie("auth_data", r#"{"token":"abc"}"#);
    let err = consume_handoff(&BrokenStore, &cookies, &BootstrapConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::StorageUnavailable));
    assert!(!cookies.contains("auth_data"));
}

#[test]
fn failed_role_write_leaves_no_mixed_session() {
    let store = RejectingStore {
        inner: MemoryStore::with_entries([("token", "\"admin-token\""), ("role", "admin")]),
        rejected: "role",
    };
    let cookies = MemoryCookieJar::with_cookie(
        "auth_data",
        r#"{"token":"student-token","user":{"name":"Stu","roles":["student"]}}"#,
    );

    let session = bootstrap(&store, &cookies, &BootstrapConfig::default());

    assert!(session.mounted);
    assert_eq!(session.token, None);
    assert_eq!(session.user, None);
    assert_eq!(session.role, None);
    assert!(store.inner.is_empty());
    assert!(!cookies.contains("auth_data"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn clear_session_removes_all_keys() {
    let store = MemoryStore::with_entries([
        ("token", "\"abc\""),
        ("user", "{}"),
        ("role", "teacher"),
        ("theme", "dark"),
    ]);

    clear_session(&store, &BootstrapConfig::default());

    assert_eq!(store.raw("token"), None);
    assert_eq!(store.raw("user"), None);
    assert_eq!(store.raw("role"), None);
    assert_eq!(store.raw("theme").as_deref(), Some("dark"));
    assert_eq!(read_session(&store, &BootstrapConfig::default()), Session::default());
}

#[test]
fn clear_session_tolerates_broken_store() {
    clear_session(&BrokenStore, &BootstrapConfig::default());
}
