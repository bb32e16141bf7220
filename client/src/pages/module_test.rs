use serde_json::json;

use super::*;

#[test]
fn welcome_without_role_is_generic() {
    assert_eq!(
        welcome_message(ModuleProfile::Support, &AuthState::signed_out()),
        "Welcome to Support."
    );
}

#[test]
fn welcome_names_user_and_role() {
    let state = AuthState {
        token: Some("abc".to_owned()),
        user: Some(json!({"name": "Ana"})),
        role: Some("teacher".to_owned()),
        mounted: true,
    };
    assert_eq!(
        welcome_message(ModuleProfile::Academic, &state),
        "Welcome to Academic, Ana (teacher)."
    );
}
