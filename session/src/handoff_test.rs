use serde_json::json;

use super::*;

const FIELDS: &[&str] = &["token", "access_token"];

#[test]
fn parses_plain_json_payload() {
    let handoff = parse_handoff(r#"{"token":"abc","user":{"roles":["teacher"]}}"#, FIELDS).unwrap();
    assert_eq!(handoff.token, "abc");
    assert_eq!(handoff.user, Some(json!({"roles": ["teacher"]})));
    assert_eq!(handoff.role, None);
}

#[test]
fn parses_url_encoded_payload() {
    let raw = "%7B%22access_token%22%3A%22xyz%22%2C%22role%22%3A%22admin%22%7D";
    let handoff = parse_handoff(raw, FIELDS).unwrap();
    assert_eq!(handoff.token, "xyz");
    assert_eq!(handoff.role.as_deref(), Some("admin"));
    assert_eq!(handoff.user, None);
}

#[test]
fn token_field_order_is_respected() {
    let raw = r#"{"token":"first","access_token":"second"}"#;
    assert_eq!(parse_handoff(raw, &["access_token", "token"]).unwrap().token, "second");
    assert_eq!(parse_handoff(raw, &["token", "access_token"]).unwrap().token, "first");
}

#[test]
fn empty_token_falls_through_to_next_field() {
    let raw = r#"{"token":"","access_token":"later"}"#;
    assert_eq!(parse_handoff(raw, FIELDS).unwrap().token, "later");
}

#[test]
fn missing_token_is_rejected() {
    let err = parse_handoff(r#"{"user":{}}"#, FIELDS).unwrap_err();
    assert!(matches!(err, SessionError::MissingToken));
}

#[test]
fn non_object_payload_is_rejected() {
    assert!(matches!(
        parse_handoff("not json", FIELDS).unwrap_err(),
        SessionError::MalformedHandoff(_)
    ));
    assert!(matches!(
        parse_handoff(r#"["token"]"#, FIELDS).unwrap_err(),
        SessionError::MalformedHandoff(_)
    ));
}

#[test]
fn non_object_user_is_dropped() {
    let handoff = parse_handoff(r#"{"token":"t","user":"alice"}"#, FIELDS).unwrap();
    assert_eq!(handoff.user, None);
}

// =============================================================
// Role resolution
// =============================================================

#[test]
fn first_listed_role_wins() {
    let user = json!({"roles": ["teacher", "admin"]});
    assert_eq!(resolve_role(Some(&user), Some("admin"), "roles", "guest"), "teacher");
}

#[test]
fn payload_role_used_when_roles_empty_or_missing() {
    let empty = json!({"roles": []});
    assert_eq!(resolve_role(Some(&empty), Some("admin"), "roles", "guest"), "admin");
    let none = json!({"name": "Ana"});
    assert_eq!(resolve_role(Some(&none), Some("admin"), "roles", "guest"), "admin");
    assert_eq!(resolve_role(None, Some("admin"), "roles", "guest"), "admin");
}

#[test]
fn fallback_used_when_no_source_applies() {
    let odd = json!({"roles": [{"name": "teacher"}]});
    assert_eq!(resolve_role(Some(&odd), None, "roles", "student"), "student");
    assert_eq!(resolve_role(None, Some(""), "roles", "guest"), "guest");
}

#[test]
fn custom_roles_field_is_honoured() {
    let user = json!({"groups": ["staff"], "roles": ["ignored"]});
    assert_eq!(resolve_role(Some(&user), None, "groups", "guest"), "staff");
}

#[test]
fn handoff_resolved_role_combines_sources() {
    let handoff = parse_handoff(r#"{"token":"t","role":"coordinator","user":{}}"#, FIELDS).unwrap();
    assert_eq!(handoff.resolved_role("roles", "guest"), "coordinator");
}
