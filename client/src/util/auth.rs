//! Module auth hooks: session bootstrap, logout and the login redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module layout applies the same bootstrap and redirect behavior,
//! parameterized by its `ModuleProfile`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{ModuleProfile, bootstrap, clear_session};

use crate::state::auth::AuthState;
use crate::util::browser_storage::{BrowserCookies, BrowserStore};

/// Bootstrap `module`'s session on the first client-side render.
///
/// The returned signal starts unmounted. Effects never run during SSR, so
/// browser storage is only touched after hydration.
pub fn use_auth_bootstrap(module: ModuleProfile) -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::default());
    Effect::new(move || {
        let session = bootstrap(&BrowserStore, &BrowserCookies, &module.bootstrap_config());
        log::debug!(
            "{module} session bootstrapped (authenticated: {}, role: {:?})",
            session.is_authenticated(),
            session.role
        );
        auth.set(AuthState::from(session));
    });
    auth
}

/// Drop `module`'s persisted session and mark the reactive state signed out.
pub fn logout(module: ModuleProfile, auth: RwSignal<AuthState>) {
    clear_session(&BrowserStore, &module.bootstrap_config());
    auth.set(AuthState::signed_out());
    log::info!("{module} session cleared");
}

/// Redirect only once the bootstrap has finished and found no token.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.mounted && state.token.is_none()
}

/// Navigate to `login_route` whenever the session is known to be missing.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, login_route: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(&login_route, NavigateOptions::default());
        }
    });
}
