use super::*;

#[test]
fn should_redirect_unauth_when_mounted_and_token_missing() {
    assert!(should_redirect_unauth(&AuthState::signed_out()));
}

#[test]
fn should_not_redirect_before_mount() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = AuthState {
        token: Some("abc".to_owned()),
        role: Some("teacher".to_owned()),
        mounted: true,
        ..AuthState::default()
    };
    assert!(!should_redirect_unauth(&state));
}
